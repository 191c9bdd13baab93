use super::*;

fn ready_fields() -> TeacherFields {
    TeacherFields {
        email: "aisha@qafzah.com".to_string(),
        fname: "Aisha".to_string(),
        lname: "Karim".to_string(),
        password: "s3cret".to_string(),
        bio: "Teaches algebra.".to_string(),
        title: "Senior Instructor".to_string(),
    }
}

fn image() -> ImagePhase {
    ImagePhase::Uploaded("/uploads/aisha.png".to_string())
}

#[test]
fn test_create_payload_includes_password() {
    let payload = ready_fields().payload(&image(), true).unwrap();
    assert_eq!(payload.password.as_deref(), Some("s3cret"));
    assert_eq!(payload.image_url, "/uploads/aisha.png");
}

#[test]
fn test_create_requires_password() {
    let fields = TeacherFields {
        password: String::new(),
        ..ready_fields()
    };
    assert!(fields.payload(&image(), true).is_err());
}

#[test]
fn test_edit_with_blank_password_keeps_current() {
    let fields = TeacherFields {
        password: String::new(),
        ..ready_fields()
    };
    let payload = fields.payload(&image(), false).unwrap();
    assert_eq!(payload.password, None);
}

#[test]
fn test_image_gate_applies_to_teachers_too() {
    assert!(ready_fields().payload(&ImagePhase::Unset, true).is_err());
}
