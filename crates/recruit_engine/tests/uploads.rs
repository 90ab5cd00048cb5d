use std::sync::Arc;

use pretty_assertions::assert_eq;
use recruit_core::{FileUpload, UploadedCv};
use recruit_engine::{
    CvLibrary, FixedClock, MemoryStorage, PreviewRegistry, SessionStore, Storage,
    UPLOADED_CVS_KEY,
};

fn library() -> (Arc<MemoryStorage>, CvLibrary) {
    recruit_logging::initialize_for_tests();
    let storage = Arc::new(MemoryStorage::new());
    let library = CvLibrary::new(
        SessionStore::new(storage.clone()),
        PreviewRegistry::new(),
        Arc::new(FixedClock::new(1_792_324_800_000)),
    );
    (storage, library)
}

fn file(name: &str, len: usize) -> FileUpload {
    FileUpload {
        name: name.to_string(),
        bytes: vec![b'x'; len],
    }
}

#[test]
fn upload_appends_loading_entries_with_handles() {
    let (storage, library) = library();
    let added = library
        .upload(vec![file("a.pdf", 1_048_576), file("b.pdf", 10)])
        .unwrap();

    assert_eq!(added.len(), 2);
    assert_eq!(added[0].name, "a.pdf");
    assert_eq!(added[0].size, "1.0 MB");
    assert_eq!(added[1].size, "0.0 MB");
    assert!(added.iter().all(|cv| cv.is_loading));
    assert!(added.iter().all(|cv| cv.upload_date == "2026-10-18"));
    assert!(added.iter().all(|cv| cv.id.len() == 9));
    assert_ne!(added[0].id, added[1].id);
    assert_eq!(library.previews().live_count(), 2);

    let persisted: Vec<UploadedCv> =
        serde_json::from_str(&storage.get_item(UPLOADED_CVS_KEY).unwrap()).unwrap();
    assert_eq!(persisted, added);
}

#[test]
fn later_uploads_go_to_the_end() {
    let (_, library) = library();
    library.upload(vec![file("first.pdf", 1)]).unwrap();
    library.upload(vec![file("second.pdf", 1)]).unwrap();
    let names: Vec<_> = library.list().into_iter().map(|cv| cv.name).collect();
    assert_eq!(names, vec!["first.pdf", "second.pdf"]);
}

#[test]
fn mark_loaded_clears_loading_flag() {
    let (_, library) = library();
    let added = library.upload(vec![file("a.pdf", 1)]).unwrap();
    assert!(library.mark_loaded(&added[0].id).unwrap());
    assert!(!library.list()[0].is_loading);
    assert!(!library.mark_loaded("missing").unwrap());
}

#[test]
fn delete_releases_preview_handles() {
    let (_, library) = library();
    let added = library
        .upload(vec![file("a.pdf", 3), file("b.pdf", 3), file("c.pdf", 3)])
        .unwrap();

    let removed = library
        .delete(&[added[0].id.clone(), added[2].id.clone()])
        .unwrap();
    assert_eq!(removed, 2);
    assert_eq!(library.previews().live_count(), 1);
    let remaining: Vec<_> = library.list().into_iter().map(|cv| cv.name).collect();
    assert_eq!(remaining, vec!["b.pdf"]);

    assert_eq!(library.delete(&[added[0].id.clone()]).unwrap(), 0);
    assert_eq!(library.previews().live_count(), 1);
}

#[test]
fn download_resolves_the_uploaded_bytes() {
    let (_, library) = library();
    let added = library
        .upload(vec![FileUpload {
            name: "cv.pdf".to_string(),
            bytes: b"%PDF-1.7".to_vec(),
        }])
        .unwrap();

    let file = library.download(&added[0].id).expect("download");
    assert_eq!(file.name, "cv.pdf");
    assert_eq!(file.bytes.as_ref(), b"%PDF-1.7");

    library.delete(&[added[0].id.clone()]).unwrap();
    assert!(library.download(&added[0].id).is_none());
}
