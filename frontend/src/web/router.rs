//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 实现了"监听 -> 验证 -> 处理 -> 加载"的导航流程。

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::route::AppRoute;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 通过注入认证检查信号实现与认证系统的解耦。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由（只读信号）
    current_route: ReadSignal<AppRoute>,
    /// 设置当前路由（写入信号）
    set_route: WriteSignal<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    fn new(is_authenticated: Signal<bool>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            is_authenticated,
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate_route(&self, route: AppRoute) {
        self.navigate_to_route(route, true);
    }

    /// 经过守卫后的目标路由：未认证访问受保护页面一律
    /// 重定向到登录页；已认证停留在登录页则送往管理首页。
    fn guard(&self, target: AppRoute) -> AppRoute {
        let is_auth = self.is_authenticated.get_untracked();

        if target.requires_auth() && !is_auth {
            web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
            return AppRoute::auth_failure_redirect();
        }
        if target.should_redirect_when_authenticated() && is_auth {
            return AppRoute::auth_success_redirect();
        }
        target
    }

    fn navigate_to_route(&self, target: AppRoute, use_push: bool) {
        let resolved = self.guard(target);
        let path = resolved.to_path();
        if use_push {
            push_history_state(&path);
        } else {
            replace_history_state(&path);
        }
        self.set_route.set(resolved);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let service = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target = AppRoute::from_path(&current_path());
            let resolved = service.guard(target);
            if resolved != target {
                // popstate 中的重定向不再追加历史记录
                replace_history_state(&resolved.to_path());
            }
            service.set_route.set(resolved);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 认证状态变化时的自动重定向：
    /// 登录成功离开登录页，登出后离开受保护页面。
    fn setup_auth_redirect(&self) {
        let service = *self;

        Effect::new(move |_| {
            let is_auth = service.is_authenticated.get();
            let route = service.current_route.get_untracked();

            if is_auth && route.should_redirect_when_authenticated() {
                web_sys::console::log_1(&"[Router] Signed in. Redirecting to console.".into());
                service.navigate_to_route(AppRoute::auth_success_redirect(), true);
            } else if !is_auth && route.requires_auth() {
                web_sys::console::log_1(&"[Router] Signed out. Redirecting to login.".into());
                service.navigate_to_route(AppRoute::auth_failure_redirect(), true);
            }
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(is_authenticated);

    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router(is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 应用内链接：拦截点击并走路由服务（守卫 + pushState）
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    /// 附加的 class
    #[prop(optional, into)]
    class: String,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();
    let href = to.to_path();

    let on_click = move |ev: leptos::web_sys::MouseEvent| {
        ev.prevent_default();
        router.navigate_route(to);
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
