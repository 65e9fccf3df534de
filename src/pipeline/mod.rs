pub(crate) mod radar;
pub(crate) mod rotate;
