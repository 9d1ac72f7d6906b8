pub(crate) mod combine;
pub(crate) mod fingerprint;
pub(crate) mod timeline;
