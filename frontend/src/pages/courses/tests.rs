use super::*;

fn ready_fields() -> CourseFields {
    CourseFields {
        title: "Algebra I".to_string(),
        description: "Linear equations".to_string(),
        teacher_id: Some(2),
        cost: "120.5".to_string(),
        kind: CourseType::Hybrid,
        categories: BTreeSet::from([1, 4]),
        start_date: "2026-09-01".to_string(),
        hours: "24".to_string(),
    }
}

fn image() -> ImagePhase {
    ImagePhase::Uploaded("/uploads/algebra.png".to_string())
}

#[test]
fn test_payload_parses_numeric_fields() {
    let payload = ready_fields().payload(&image()).unwrap();
    assert_eq!(payload.teacher_id, 2);
    assert_eq!(payload.cost, Some(120.5));
    assert_eq!(payload.hours, 24);
    assert_eq!(payload.categories, vec![1, 4]);
    assert_eq!(
        payload.start_date,
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    );
}

#[test]
fn test_empty_cost_and_hours_have_defaults() {
    let fields = CourseFields {
        cost: String::new(),
        hours: String::new(),
        ..ready_fields()
    };
    let payload = fields.payload(&image()).unwrap();
    assert_eq!(payload.cost, None);
    assert_eq!(payload.hours, 0);
}

#[test]
fn test_invalid_numbers_are_rejected() {
    let bad_cost = CourseFields {
        cost: "abc".to_string(),
        ..ready_fields()
    };
    assert!(bad_cost.payload(&image()).is_err());

    let bad_hours = CourseFields {
        hours: "-3".to_string(),
        ..ready_fields()
    };
    assert!(bad_hours.payload(&image()).is_err());
}

#[test]
fn test_teacher_and_date_are_required() {
    let no_teacher = CourseFields {
        teacher_id: None,
        ..ready_fields()
    };
    assert!(no_teacher.payload(&image()).is_err());

    let no_date = CourseFields {
        start_date: String::new(),
        ..ready_fields()
    };
    assert!(no_date.payload(&image()).is_err());
}

#[test]
fn test_toggle_category() {
    let mut fields = ready_fields();
    fields.toggle_category(9);
    assert!(fields.categories.contains(&9));
    fields.toggle_category(9);
    assert!(!fields.categories.contains(&9));
}

#[test]
fn test_category_ids_by_name_maps_read_model_to_payload_ids() {
    let categories = vec![
        Category {
            id: 1,
            name: "Math".to_string(),
            description: String::new(),
            image_url: String::new(),
        },
        Category {
            id: 4,
            name: "Science".to_string(),
            description: String::new(),
            image_url: String::new(),
        },
    ];
    let names = vec!["Science".to_string(), "History".to_string()];
    assert_eq!(category_ids_by_name(&names, &categories), BTreeSet::from([4]));
}
