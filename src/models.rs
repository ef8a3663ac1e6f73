//! Display-oriented projections of catalogue entities.
//!
//! DESIGN
//! ======
//! These mirror the GraphQL fragments the UI requests. Only the fields the
//! helpers read are modelled; unknown keys are ignored on deserialize and
//! missing lists default to empty so partially-populated fragments still load.

use serde::{Deserialize, Serialize};

/// A file backing a scene, image or gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualFile {
    pub path: String,
}

/// Folder backing a folder-based gallery.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub path: String,
}

/// Any file-backed object with an optional explicit title (scene, image, ...).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileObject {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub files: Vec<VisualFile>,
}

/// A gallery, which may be backed by files (zip) or a folder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gallery {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub files: Vec<VisualFile>,
    #[serde(default)]
    pub folder: Option<Folder>,
}

/// Association between a local entity and a record on a stash-box endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StashId {
    pub endpoint: String,
    #[serde(alias = "id")]
    pub stash_id: String,
}

impl StashId {
    #[must_use]
    pub fn new(endpoint: impl Into<String>, stash_id: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into(), stash_id: stash_id.into() }
    }
}

/// Fingerprint stored locally for a scene file (`oshash`, `md5`, `phash`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

/// Fingerprint submitted to a stash-box for a remote scene.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteFingerprint {
    pub algorithm: String,
    pub hash: String,
    /// Duration in seconds of the file the fingerprint was taken from.
    #[serde(default)]
    pub duration: f64,
}

/// The subset of a scraped remote scene used for match scoring.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RemoteScene {
    #[serde(default)]
    pub duration: Option<f64>,
    #[serde(default)]
    pub fingerprints: Vec<RemoteFingerprint>,
}
