use chrono::{DateTime, Utc};
use serde::{self, Deserialize};
use serde::Serialize;

/// The `type` value the storage API uses for directories. Anything else,
/// including different casing, is treated as a plain file.
const DIRECTORY_KIND: &str = "DIRECTORY";

/// A file or folder exactly as the storage API reports it. Unknown extra
/// fields in the payload are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BackendObject {
    pub name: String,
    pub size: u64,
    pub path: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The shape the UI listing renders, camelCase on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontObject {
    pub last_modified: Option<DateTime<Utc>>,
    pub name: String,
    pub size: u64,
    pub path: String,
    pub folder: bool,
}

/// Normalize one backend record into the display shape.
///
/// `path` is the input path immediately followed by the name, with no
/// separator inserted; the backend already reports parent paths with a
/// trailing `/`. `last_modified` is always `None`: the record carries no
/// timestamp, and none is invented here.
pub fn map_object_to_front_format(object: &BackendObject) -> FrontObject {
    FrontObject {
        last_modified: None,
        name: object.name.clone(),
        size: object.size,
        path: format!("{}{}", object.path, object.name),
        folder: object.kind == DIRECTORY_KIND,
    }
}

#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub username: String,
}
