pub(crate) mod buffer;
pub(crate) mod interop;
pub(crate) mod layout;
pub(crate) mod plane;
