pub(crate) mod angles;
pub(crate) mod model;
