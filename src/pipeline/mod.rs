pub(crate) mod cache;
pub(crate) mod opts;
pub(crate) mod synthesize;
