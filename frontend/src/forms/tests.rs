use super::*;

// =========================================================
// ImagePhase 状态机
// =========================================================

#[test]
fn test_first_upload_happy_path() {
    let phase = ImagePhase::Unset.begin();
    assert!(phase.is_uploading());
    assert_eq!(phase.value(), None);

    let phase = phase.complete("/uploads/a.png".to_string());
    assert_eq!(phase.value(), Some("/uploads/a.png"));
    assert_eq!(phase.require().unwrap(), "/uploads/a.png");
}

#[test]
fn test_failed_upload_keeps_prior_value() {
    // 已有图片，重新上传失败：挂起值保持原样
    let phase = ImagePhase::Uploaded("/uploads/old.png".to_string())
        .begin()
        .fail();
    assert_eq!(phase, ImagePhase::Failed {
        prior: Some("/uploads/old.png".to_string())
    });
    assert_eq!(phase.value(), Some("/uploads/old.png"));
    // 仍可提交
    assert!(phase.require().is_ok());
}

#[test]
fn test_failed_first_upload_blocks_submission() {
    let phase = ImagePhase::Unset.begin().fail();
    assert_eq!(phase.value(), None);
    assert_eq!(phase.require(), Err("Please upload an image first."));
}

#[test]
fn test_reupload_after_failure_recovers() {
    let phase = ImagePhase::Unset
        .begin()
        .fail()
        .begin()
        .complete("/uploads/b.png".to_string());
    assert_eq!(phase.value(), Some("/uploads/b.png"));
}

#[test]
fn test_from_existing() {
    assert_eq!(ImagePhase::from_existing(String::new()), ImagePhase::Unset);
    assert_eq!(
        ImagePhase::from_existing("/uploads/x.png".to_string()),
        ImagePhase::Uploaded("/uploads/x.png".to_string())
    );
}

// =========================================================
// FormPhase
// =========================================================

#[test]
fn test_busy_phases() {
    assert!(FormPhase::Loading.is_busy());
    assert!(FormPhase::Submitting.is_busy());
    assert!(!FormPhase::Ready.is_busy());
    assert!(!FormPhase::Success("ok".to_string()).is_busy());
    assert!(!FormPhase::Failed("no".to_string()).is_busy());
}

// =========================================================
// 必填校验
// =========================================================

#[test]
fn test_require_text() {
    assert!(require_text("Algebra", "missing").is_ok());
    assert_eq!(require_text("", "missing"), Err("missing"));
    assert_eq!(require_text("   ", "missing"), Err("missing"));
}
