pub(crate) mod bike;
pub(crate) mod ring;
