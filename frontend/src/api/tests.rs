use super::*;

#[test]
fn test_base_url_trailing_slash_is_trimmed() {
    let api = QafzahApi::new("http://localhost:3001/", None);
    assert_eq!(api.url("/teachers"), "http://localhost:3001/teachers");
}

#[test]
fn test_url_join_handles_missing_leading_slash() {
    let api = QafzahApi::new(DEFAULT_BASE_URL, None);
    assert_eq!(api.url("categories"), "http://localhost:3001/categories");
    assert_eq!(api.url("/categories"), "http://localhost:3001/categories");
}

#[test]
fn test_asset_url_is_plain_concatenation() {
    let api = QafzahApi::new(DEFAULT_BASE_URL, Some("jwt".to_string()));
    assert_eq!(
        api.asset_url("/uploads/math.png"),
        "http://localhost:3001/uploads/math.png"
    );
    // 空路径不做任何保护，按原样拼接
    assert_eq!(api.asset_url(""), "http://localhost:3001");
}
