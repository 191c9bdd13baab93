use super::*;
use crate::{LoginResponse, UploadResponse};

// =========================================================
// 线上字段拼写
// =========================================================

#[test]
fn test_category_uses_uppercase_image_url() {
    let json = r#"{"id":3,"name":"Math","description":"Numbers","imageURL":"/uploads/math.png"}"#;
    let category: Category = serde_json::from_str(json).unwrap();
    assert_eq!(category.image_url, "/uploads/math.png");

    let payload = CategoryPayload {
        name: "Math".to_string(),
        description: "Numbers".to_string(),
        image_url: "/uploads/math.png".to_string(),
    };
    let out = serde_json::to_value(&payload).unwrap();
    assert!(out.get("imageURL").is_some());
    assert!(out.get("image_url").is_none());
}

#[test]
fn test_course_uses_camel_case_image_url() {
    let json = r#"{
        "id": 7,
        "title": "Algebra",
        "description": "",
        "teacherId": 2,
        "cost": 120.0,
        "type": "In-person",
        "categories": ["Math"],
        "imageUrl": "/uploads/algebra.png",
        "startDate": "2026-09-01",
        "hours": 24
    }"#;
    let course: Course = serde_json::from_str(json).unwrap();
    assert_eq!(course.teacher_id, 2);
    assert_eq!(course.kind, CourseType::InPerson);
    assert_eq!(course.image_url, "/uploads/algebra.png");
    assert_eq!(
        course.start_date,
        Some(NaiveDate::from_ymd_opt(2026, 9, 1).unwrap())
    );
}

#[test]
fn test_course_payload_serializes_type_field() {
    let payload = CoursePayload {
        title: "Algebra".to_string(),
        description: String::new(),
        teacher_id: 2,
        cost: None,
        kind: CourseType::Hybrid,
        image_url: "/uploads/a.png".to_string(),
        categories: vec![1, 4],
        start_date: NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
        hours: 24,
    };
    let out = serde_json::to_value(&payload).unwrap();
    assert_eq!(out["type"], "Hybrid");
    assert_eq!(out["teacherId"], 2);
    assert_eq!(out["startDate"], "2026-09-01");
    // cost 为空时不应出现在载荷中
    assert!(out.get("cost").is_none());
}

#[test]
fn test_course_type_round_trip() {
    for kind in CourseType::ALL {
        assert_eq!(CourseType::parse(kind.as_str()), Some(kind));
    }
    assert_eq!(CourseType::parse("Remote"), None);
}

#[test]
fn test_teacher_payload_omits_empty_password() {
    let payload = TeacherPayload {
        email: "t@qafzah.com".to_string(),
        fname: "Aisha".to_string(),
        lname: "Karim".to_string(),
        password: None,
        bio: String::new(),
        title: "Instructor".to_string(),
        image_url: "/uploads/t.png".to_string(),
    };
    let out = serde_json::to_value(&payload).unwrap();
    assert!(out.get("password").is_none());
}

#[test]
fn test_upload_response_file_path_field() {
    let res: UploadResponse = serde_json::from_str(r#"{"filePath":"/uploads/x.png"}"#).unwrap();
    assert_eq!(res.file_path, "/uploads/x.png");
}

// =========================================================
// 身份
// =========================================================

#[test]
fn test_login_response_and_admin_check() {
    let json = r#"{
        "user": {"id":1,"email":"admin@qafzah.com","fname":"Admin","lname":"User","role":"Admin"},
        "token": "jwt-token"
    }"#;
    let res: LoginResponse = serde_json::from_str(json).unwrap();
    assert!(res.user.is_admin());
    assert_eq!(res.user.full_name(), "Admin User");

    let json = r#"{"user":{"id":2,"email":"s@qafzah.com","role":"Student"},"token":"jwt"}"#;
    let res: LoginResponse = serde_json::from_str(json).unwrap();
    assert!(!res.user.is_admin());
}

#[test]
fn test_consultation_tolerates_missing_optionals() {
    let json = r#"{"id":9,"name":"Omar","email":"omar@example.com","message":"Call me"}"#;
    let cons: Consultation = serde_json::from_str(json).unwrap();
    assert_eq!(cons.phone, None);
    assert!(cons.created_at.is_none());
}
