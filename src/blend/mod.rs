pub(crate) mod mode;
pub(crate) mod non_separable;
pub(crate) mod separable;
