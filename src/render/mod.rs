pub(crate) mod cpu;
pub(crate) mod radar;
pub(crate) mod svg;
