use super::*;
use crate::models::{Folder, VisualFile};

fn file(path: &str) -> VisualFile {
    VisualFile { path: path.to_owned() }
}

fn object(title: Option<&str>, paths: &[&str]) -> FileObject {
    FileObject { title: title.map(str::to_owned), files: paths.iter().map(|p| file(p)).collect() }
}

#[test]
fn object_title_prefers_explicit_title() {
    let obj = object(Some("Beach Day"), &["/media/clips/beach.mp4"]);
    assert_eq!(object_title(&obj), "Beach Day");
    assert_eq!(scene_title(&obj), "Beach Day");
}

#[test]
fn object_title_uses_first_file_name_when_untitled() {
    let obj = object(None, &["/media/clips/beach.mp4", "/media/other/second.mp4"]);
    assert_eq!(object_title(&obj), "beach.mp4");
}

#[test]
fn object_title_treats_empty_title_as_absent() {
    let obj = object(Some(""), &["C:\\Videos\\holiday.mkv"]);
    assert_eq!(object_title(&obj), "holiday.mkv");
}

#[test]
fn object_title_and_path_are_empty_without_data() {
    let obj = object(None, &[]);
    assert_eq!(object_title(&obj), "");
    assert_eq!(object_path(&obj), "");
}

#[test]
fn object_path_returns_first_file_path() {
    let obj = object(Some("x"), &["/a/b.mp4", "/c/d.mp4"]);
    assert_eq!(object_path(&obj), "/a/b.mp4");
}

#[test]
fn gallery_title_falls_back_through_files_then_folder() {
    let titled = Gallery { title: Some("Trip".into()), files: vec![file("/g/trip.zip")], folder: None };
    assert_eq!(gallery_title(&titled), "Trip");

    let zipped = Gallery {
        title: None,
        files: vec![file("/g/trip.zip")],
        folder: Some(Folder { path: "/g/dir".into() }),
    };
    assert_eq!(gallery_title(&zipped), "trip.zip");

    let folder =
        Gallery { title: None, files: vec![], folder: Some(Folder { path: "/photos/2021/summer".into() }) };
    assert_eq!(gallery_title(&folder), "summer");

    assert_eq!(gallery_title(&Gallery::default()), "");
}

#[test]
fn gallery_path_prefers_file_over_folder() {
    let zipped = Gallery {
        title: None,
        files: vec![file("/g/trip.zip")],
        folder: Some(Folder { path: "/g/dir".into() }),
    };
    assert_eq!(gallery_path(&zipped), "/g/trip.zip");

    let folder = Gallery { title: None, files: vec![], folder: Some(Folder { path: "/g/dir".into() }) };
    assert_eq!(gallery_path(&folder), "/g/dir");

    assert_eq!(gallery_path(&Gallery::default()), "");
}

#[test]
fn objects_deserialize_from_partial_fragments() {
    let raw = r#"{"id":"1","files":[{"path":"/x/y.mp4","size":10}]}"#;
    let obj: FileObject = serde_json::from_str(raw).expect("object");
    assert_eq!(object_title(&obj), "y.mp4");

    let gallery: Gallery = serde_json::from_str(r#"{"title":null,"folder":{"path":"/p/q"}}"#).expect("gallery");
    assert_eq!(gallery_title(&gallery), "q");
}
