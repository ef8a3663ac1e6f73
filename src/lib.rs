//! Data-shaping helpers for the media catalogue front end.
//!
//! SYSTEM CONTEXT
//! ==============
//! Page components hand snapshots of GraphQL responses to these helpers to
//! derive display titles and paths, compare perceptual hashes against remote
//! fingerprints, and reconcile stash-box identifiers. Nothing here holds state;
//! every function is a pure transformation of caller-supplied data.

pub mod config;
pub mod data;
pub mod files;
pub mod fingerprint;
pub mod hamming;
pub mod models;
pub mod stashbox;
pub mod text;

pub use config::{ConfigError, MatchConfig};
pub use files::{gallery_path, gallery_title, object_path, object_title, scene_title};
pub use fingerprint::{DurationStatus, MatchConfidence, PhashMatch, duration_status, match_phashes};
pub use hamming::{HashError, distance, try_distance};
pub use models::{FileObject, Fingerprint, Folder, Gallery, RemoteFingerprint, RemoteScene, StashId, VisualFile};
pub use stashbox::merge_stash_ids;
