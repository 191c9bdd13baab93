use super::*;

fn ready_fields() -> CategoryFields {
    CategoryFields {
        name: "Mathematics".to_string(),
        description: "Numbers and proofs".to_string(),
    }
}

#[test]
fn test_payload_includes_all_fields() {
    let image = ImagePhase::Uploaded("/uploads/math.png".to_string());
    let payload = ready_fields().payload(&image).unwrap();
    assert_eq!(payload.name, "Mathematics");
    assert_eq!(payload.description, "Numbers and proofs");
    assert_eq!(payload.image_url, "/uploads/math.png");
}

#[test]
fn test_missing_image_is_rejected_before_any_request() {
    let err = ready_fields().payload(&ImagePhase::Unset).unwrap_err();
    assert_eq!(err, "Please upload an image first.");
}

#[test]
fn test_missing_name_is_rejected() {
    let fields = CategoryFields {
        name: "  ".to_string(),
        ..ready_fields()
    };
    let image = ImagePhase::Uploaded("/uploads/math.png".to_string());
    assert!(fields.payload(&image).is_err());
}
