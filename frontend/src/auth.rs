//! 会话状态管理
//!
//! 管理当前凭据与登录身份，与路由系统解耦：
//! 路由服务通过注入的认证信号来检查认证状态。
//! 每次状态变更写穿 LocalStorage，刷新页面后无需重新登录。

use crate::api::{DEFAULT_BASE_URL, QafzahApi};
use crate::web::LocalStorage;
use leptos::prelude::*;
use qafzah_shared::{LoginResponse, UserIdentity};

/// 持久化凭据的存储键。
pub const STORAGE_TOKEN_KEY: &str = "token";
/// 持久化身份的存储键。
pub const STORAGE_USER_KEY: &str = "user";

// =========================================================
// 会话模型
// =========================================================

/// 一个已通过管理员门槛的会话。
///
/// 只能经由 [`Session::admit`] 构造，因此凭据存在即蕴含
/// 身份存在且角色为管理员。
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserIdentity,
}

impl Session {
    /// 准入规则：仅管理员身份换得会话，其余一律拒绝。
    pub fn admit(login: LoginResponse) -> Option<Session> {
        if login.user.is_admin() {
            Some(Session {
                token: login.token,
                user: login.user,
            })
        } else {
            None
        }
    }
}

/// 认证上下文
///
/// 包含读写信号，通过 Context 在组件间共享（显式注入，非全局单例）。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub session: ReadSignal<Option<Session>>,
    set_session: WriteSignal<Option<Session>>,
}

impl AuthContext {
    pub fn new() -> Self {
        let (session, set_session) = signal(None);
        Self {
            session,
            set_session,
        }
    }

    /// 认证状态信号（用于路由服务注入）
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let session = self.session;
        Signal::derive(move || session.get().is_some())
    }

    /// 构造携带当前凭据的 API 客户端；未登录时按匿名请求。
    pub fn api(&self) -> QafzahApi {
        let token = self
            .session
            .get_untracked()
            .map(|session| session.token);
        QafzahApi::new(DEFAULT_BASE_URL, token)
    }

    /// 更新内存状态并写穿存储。
    fn install(&self, session: Option<Session>) {
        match &session {
            Some(s) => {
                LocalStorage::set(STORAGE_TOKEN_KEY, &s.token);
                LocalStorage::set_json(STORAGE_USER_KEY, &s.user);
            }
            None => {
                LocalStorage::delete(STORAGE_TOKEN_KEY);
                LocalStorage::delete(STORAGE_USER_KEY);
            }
        }
        self.set_session.set(session);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 以当前会话构造 API 客户端的便捷入口
pub fn use_api() -> QafzahApi {
    use_auth().api()
}

// =========================================================
// 操作
// =========================================================

/// 进程启动时从 LocalStorage 恢复会话。
///
/// 残留的不完整状态（只有 token 或身份非管理员）直接清除。
/// 过期凭据在这里不做校验：它会一直"存在"，直到某个受保护
/// 请求失败或用户显式登出。
pub fn init_session(ctx: &AuthContext) {
    let token = LocalStorage::get(STORAGE_TOKEN_KEY);
    let user: Option<UserIdentity> = LocalStorage::get_json(STORAGE_USER_KEY);

    match (token, user) {
        (Some(token), Some(user)) if user.is_admin() => {
            ctx.set_session.set(Some(Session { token, user }));
        }
        (None, None) => {}
        _ => ctx.install(None),
    }
}

/// 登录。
///
/// 后端拒绝凭据或返回的身份不是管理员时，静默落回"无会话"，
/// 不持久化任何内容。返回值仅供页面展示一条笼统的失败提示。
pub async fn sign_in(ctx: AuthContext, email: String, password: String) -> bool {
    let api = ctx.api();
    match api.login(&email, &password).await {
        Ok(login) => match Session::admit(login) {
            Some(session) => {
                ctx.install(Some(session));
                true
            }
            None => {
                // 请求成功但角色不够：确保不留下任何持久化状态
                ctx.install(None);
                false
            }
        },
        Err(_) => false,
    }
}

/// 登出：同时清除内存与持久化状态。
///
/// 导航由路由服务监听认证信号自动完成。
pub fn sign_out(ctx: &AuthContext) {
    ctx.install(None);
}

#[cfg(test)]
mod tests;
