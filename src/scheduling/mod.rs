pub(crate) mod containers;
pub(crate) mod delays;
