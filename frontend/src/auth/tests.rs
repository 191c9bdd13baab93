use super::*;
use qafzah_shared::LoginResponse;

fn login_response(role: &str) -> LoginResponse {
    LoginResponse {
        user: UserIdentity {
            id: 1,
            email: "someone@qafzah.com".to_string(),
            fname: "Some".to_string(),
            lname: "One".to_string(),
            role: role.to_string(),
        },
        token: "jwt-token".to_string(),
    }
}

#[test]
fn test_admit_accepts_admin() {
    let session = Session::admit(login_response("Admin")).unwrap();
    assert_eq!(session.token, "jwt-token");
    assert!(session.user.is_admin());
}

#[test]
fn test_admit_rejects_non_admin_even_on_successful_login() {
    // 请求本身成功，但身份不是管理员：不得产生会话
    assert!(Session::admit(login_response("Student")).is_none());
    assert!(Session::admit(login_response("Teacher")).is_none());
    // 角色名大小写敏感
    assert!(Session::admit(login_response("admin")).is_none());
}
