use super::*;

fn ready_fields() -> BlogFields {
    BlogFields {
        title: "Welcome to Qafzah".to_string(),
        content: "We are live.".to_string(),
    }
}

#[test]
fn test_payload_carries_title_content_and_image() {
    let image = ImagePhase::Uploaded("/uploads/hero.png".to_string());
    let payload = ready_fields().payload(&image).unwrap();
    assert_eq!(payload.title, "Welcome to Qafzah");
    assert_eq!(payload.content, "We are live.");
    assert_eq!(payload.image_url, "/uploads/hero.png");
}

#[test]
fn test_empty_image_value_is_rejected_client_side() {
    // 三个字段齐备但图片缺失：拒绝，不发出请求
    assert!(ready_fields().payload(&ImagePhase::Unset).is_err());
    // 上传失败且无先前值时同样拒绝
    let failed = ImagePhase::Unset.begin().fail();
    assert!(ready_fields().payload(&failed).is_err());
}

#[test]
fn test_missing_title_or_content_is_rejected() {
    let image = ImagePhase::Uploaded("/uploads/hero.png".to_string());
    let no_title = BlogFields {
        title: String::new(),
        ..ready_fields()
    };
    assert!(no_title.payload(&image).is_err());

    let no_content = BlogFields {
        content: String::new(),
        ..ready_fields()
    };
    assert!(no_content.payload(&image).is_err());
}

#[test]
fn test_excerpt_truncates_long_content() {
    let short = "short body";
    assert_eq!(excerpt(short), "short body");

    let long = "x".repeat(300);
    let shown = excerpt(&long);
    assert!(shown.chars().count() <= 121);
    assert!(shown.ends_with('…'));
}
