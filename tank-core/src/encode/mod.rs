/// PNG output.
pub(crate) mod png;
