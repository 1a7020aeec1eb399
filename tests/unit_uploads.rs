use cohort::config::UploadConfig;
use std::path::PathBuf;

fn temp_upload_config() -> UploadConfig {
    let dir = std::env::temp_dir().join(format!("cohort-uploads-{}", uuid::Uuid::new_v4()));
    UploadConfig {
        upload_dir: dir,
        ..UploadConfig::new()
    }
}

#[test]
fn test_constraints() {
    let uploads = UploadConfig::new();

    assert_eq!(uploads.max_content_length, 5 * 1024 * 1024);
    assert_eq!(uploads.allowed_extensions, vec![".jpg", ".png", ".gif"]);
    assert_eq!(uploads.upload_dir, PathBuf::from("instance/uploads"));
}

#[test]
fn test_ensure_upload_dir_creates_and_is_idempotent() {
    let uploads = temp_upload_config();
    assert!(!uploads.upload_dir.exists());

    uploads.ensure_upload_dir().unwrap();
    assert!(uploads.upload_dir.is_dir());

    // Second call must succeed on the existing directory
    uploads.ensure_upload_dir().unwrap();
    assert!(uploads.upload_dir.is_dir());

    std::fs::remove_dir_all(&uploads.upload_dir).unwrap();
}

#[test]
fn test_allowed_extensions() {
    let uploads = UploadConfig::new();

    assert!(uploads.is_allowed("avatar.jpg"));
    assert!(uploads.is_allowed("banner.png"));
    assert!(uploads.is_allowed("animation.gif"));
    assert!(uploads.is_allowed("SHOUTY.PNG"));
    assert!(uploads.is_allowed("archive.tar.gif"));

    assert!(!uploads.is_allowed("notes.txt"));
    assert!(!uploads.is_allowed("script.sh"));
    assert!(!uploads.is_allowed("photo.jpeg"));
    assert!(!uploads.is_allowed("no_extension"));
    assert!(!uploads.is_allowed(""));
}
