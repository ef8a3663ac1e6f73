//! Title and path derivation for file-backed objects.
//!
//! Every helper returns a `String`; missing data falls back to the empty string.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use crate::models::{FileObject, Gallery};
use crate::text::file_name_from_path;

fn explicit_title(title: Option<&String>) -> Option<&str> {
    title.map(String::as_str).filter(|t| !t.is_empty())
}

/// Title for a scene, image or other file-backed object.
#[must_use]
pub fn object_title(object: &FileObject) -> String {
    if let Some(title) = explicit_title(object.title.as_ref()) {
        return title.to_owned();
    }
    object.files.first().map(|f| file_name_from_path(&f.path).to_owned()).unwrap_or_default()
}

/// Scenes follow the generic object rule.
#[must_use]
pub fn scene_title(scene: &FileObject) -> String {
    object_title(scene)
}

#[must_use]
pub fn object_path(object: &FileObject) -> String {
    object.files.first().map(|f| f.path.clone()).unwrap_or_default()
}

/// Title for a gallery, falling back to its first file and then its folder.
#[must_use]
pub fn gallery_title(gallery: &Gallery) -> String {
    if let Some(title) = explicit_title(gallery.title.as_ref()) {
        return title.to_owned();
    }
    if let Some(file) = gallery.files.first() {
        return file_name_from_path(&file.path).to_owned();
    }
    gallery.folder.as_ref().map(|f| file_name_from_path(&f.path).to_owned()).unwrap_or_default()
}

#[must_use]
pub fn gallery_path(gallery: &Gallery) -> String {
    gallery
        .files
        .first()
        .map(|f| f.path.clone())
        .or_else(|| gallery.folder.as_ref().map(|f| f.path.clone()))
        .unwrap_or_default()
}
