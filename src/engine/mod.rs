pub(crate) mod modes;
pub(crate) mod pipeline;
pub(crate) mod settings;
