//! # test
//! Holds utility functions that are beneficial for testing

use crate::api_models::BackendObject;

/// Constructs a [`BackendObject`] for testing
///
/// # Examples
/// ```rs
/// let object = make_backend_object("docs", 0, "/root/", "DIRECTORY");
/// assert_eq!("docs", object.name)
/// ```
pub(crate) fn make_backend_object(name: &str, size: u64, path: &str, kind: &str) -> BackendObject {
    BackendObject {
        name: name.to_string(),
        size,
        path: path.to_string(),
        kind: kind.to_string(),
    }
}
