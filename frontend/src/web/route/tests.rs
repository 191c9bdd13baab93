use super::*;

// =========================================================
// 解析
// =========================================================

#[test]
fn test_root_and_login_paths_map_to_login() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path(""), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
}

#[test]
fn test_entity_triples_parse() {
    assert_eq!(AppRoute::from_path("/categories"), AppRoute::Categories);
    assert_eq!(AppRoute::from_path("/categories/add"), AppRoute::CategoryAdd);
    assert_eq!(
        AppRoute::from_path("/categories/edit/12"),
        AppRoute::CategoryEdit(12)
    );
    assert_eq!(AppRoute::from_path("/teachers/edit/3"), AppRoute::TeacherEdit(3));
    assert_eq!(AppRoute::from_path("/courses/edit/7"), AppRoute::CourseEdit(7));
    assert_eq!(AppRoute::from_path("/blogs/edit/1"), AppRoute::BlogEdit(1));
}

#[test]
fn test_trailing_slash_is_tolerated() {
    assert_eq!(AppRoute::from_path("/teachers/"), AppRoute::Teachers);
    assert_eq!(AppRoute::from_path("/profile/"), AppRoute::ProfileDetails);
}

#[test]
fn test_bad_edit_ids_fall_through_to_not_found() {
    assert_eq!(AppRoute::from_path("/teachers/edit/abc"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/teachers/edit"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/unknown/edit/3"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/whatever"), AppRoute::NotFound);
}

#[test]
fn test_to_path_round_trips() {
    let routes = [
        AppRoute::Blogs,
        AppRoute::BlogAdd,
        AppRoute::BlogEdit(42),
        AppRoute::Teachers,
        AppRoute::TeacherEdit(5),
        AppRoute::Courses,
        AppRoute::CourseAdd,
        AppRoute::Categories,
        AppRoute::CategoryEdit(9),
        AppRoute::Consultations,
        AppRoute::Students,
        AppRoute::ProfileDetails,
        AppRoute::ProfileSettings,
        AppRoute::Status404,
        AppRoute::Status500,
    ];
    for route in routes {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

// =========================================================
// 守卫
// =========================================================

#[test]
fn test_management_routes_require_auth() {
    assert!(AppRoute::Blogs.requires_auth());
    assert!(AppRoute::CategoryEdit(1).requires_auth());
    assert!(AppRoute::Consultations.requires_auth());
    assert!(AppRoute::Students.requires_auth());
    assert!(AppRoute::ProfileSettings.requires_auth());
}

#[test]
fn test_public_routes_do_not_require_auth() {
    assert!(!AppRoute::Login.requires_auth());
    assert!(!AppRoute::Status404.requires_auth());
    assert!(!AppRoute::Status500.requires_auth());
    assert!(!AppRoute::NotFound.requires_auth());
}

#[test]
fn test_redirect_targets() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Blogs.should_redirect_when_authenticated());
    assert_eq!(AppRoute::auth_failure_redirect(), AppRoute::Login);
    assert_eq!(AppRoute::auth_success_redirect(), AppRoute::Blogs);
}
