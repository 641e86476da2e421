//! Frame store round trips across knowledge bases

use framesets::frame::storage::{decode_frame, encode_frame};
use framesets::{DemonKind, FrameError, FrameStorage, KnowledgeBase};
use tempfile::TempDir;

#[test]
fn test_store_and_reload_preserves_behavior() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FrameStorage::new(temp_dir.path()).unwrap();

    let mut kb = crate::integration::vehicles();
    assert!(kb.create_demon("Vehicle", "wheels", DemonKind::IfGetV));
    assert!(kb.put_demon("Vehicle", "wheels", DemonKind::IfGetV, "audit"));
    kb.store_frame(&storage, "Vehicle").unwrap();
    kb.store_frame(&storage, "Car").unwrap();

    let mut fresh = KnowledgeBase::new();
    let calls = crate::integration::recorder(&mut fresh, "audit");
    assert_eq!(fresh.load_all(&storage).unwrap(), 2);
    assert_eq!(fresh.get_value("Car", "wheels").as_deref(), Some("4"));
    assert_eq!(*calls.lock(), vec!["Vehicle"]);
}

#[test]
fn test_frameset_store_skips_missing_members() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FrameStorage::new(temp_dir.path()).unwrap();

    let mut kb = KnowledgeBase::new();
    assert!(kb.create_frameset("S"));
    assert!(kb.registry_mut().create("f1"));
    assert!(kb.include_in_frameset("S", "f1"));
    assert!(kb.registry_mut().remove("f1"));

    kb.store_frameset(&storage, "S").unwrap();
    assert_eq!(storage.list().unwrap(), vec!["S"]);

    let mut fresh = KnowledgeBase::new();
    fresh.load_frameset(&storage, "S").unwrap();
    assert_eq!(fresh.frameset_members("S"), vec!["f1"]);
    assert!(!fresh.registry().exists("f1"));
}

#[test]
fn test_text_encoding_survives_reload() {
    let kb = crate::integration::vehicles();
    let car = kb.registry().get("Car").unwrap();
    let text = encode_frame(car);
    assert!(text.contains("wheels,ref Vehicle"));
    assert_eq!(&decode_frame("Car", &text).unwrap(), car);
}

#[test]
fn test_path_like_names_are_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let storage = FrameStorage::new(temp_dir.path()).unwrap();
    let mut kb = KnowledgeBase::new();
    assert!(kb.registry_mut().create("../escape"));
    assert!(matches!(
        kb.store_frame(&storage, "../escape"),
        Err(FrameError::InvalidFrameName(_))
    ));
}
