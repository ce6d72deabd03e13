#![forbid(unsafe_code)]

//! Key material handling.
//!
//! A [`Key`] is an opaque byte string: a symmetric secret, a PEM-encoded
//! private key, or anything else a crypto backend knows how to interpret.
//! Loading and generation live here; interpretation is the backend's job.

mod key;

pub use key::Key;
