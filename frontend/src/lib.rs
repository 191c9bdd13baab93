//! Qafzah 管理后台前端
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `web::route`: 路由定义（领域模型）
//! - `web::router`: 路由服务（核心引擎）
//! - `auth`: 会话状态管理（凭据 + 身份，写穿 LocalStorage）
//! - `api`: REST 客户端封装（统一端点 + Bearer 凭据）
//! - `listing` / `forms`: 列表与表单的纯状态核心
//! - `components` / `pages`: UI 组件层

mod api;
mod auth;
mod forms;
mod listing;

mod components {
    pub mod alert;
    pub mod confirm_dialog;
    pub(crate) mod icons;
    pub mod image_upload;
    pub mod layout;
    pub mod record_table;
}

mod pages {
    pub mod blogs;
    pub mod categories;
    pub mod consultations;
    pub mod courses;
    pub mod login;
    pub mod profile;
    pub mod status;
    pub mod students;
    pub mod teachers;
}

// 原生 Web API 封装模块
// 对浏览器原生 API 的轻量级封装，替代 gloo-* 系列 crate 以减小 WASM 体积。
pub(crate) mod web {
    pub mod route;
    pub mod router;
    mod storage;

    pub use storage::LocalStorage;
}

use leptos::prelude::*;

use crate::auth::{AuthContext, init_session};
use crate::components::layout::AdminLayout;
use crate::pages::blogs::{BlogFormPage, BlogsPage};
use crate::pages::categories::{CategoriesPage, CategoryFormPage};
use crate::pages::consultations::ConsultationsPage;
use crate::pages::courses::{CourseFormPage, CoursesPage};
use crate::pages::login::LoginPage;
use crate::pages::profile::{ProfileDetailsPage, ProfileSettingsPage};
use crate::pages::status::{Status404Page, Status500Page};
use crate::pages::students::StudentsPage;
use crate::pages::teachers::{TeacherFormPage, TeachersPage};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet};

/// 路由匹配函数
///
/// 管理页面统一包在 `AdminLayout` 中；登录与状态页使用裸布局。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Login => return view! { <LoginPage /> }.into_any(),
        AppRoute::Status404 | AppRoute::NotFound => return view! { <Status404Page /> }.into_any(),
        AppRoute::Status500 => return view! { <Status500Page /> }.into_any(),

        AppRoute::Blogs => view! { <BlogsPage /> }.into_any(),
        AppRoute::BlogAdd => view! { <BlogFormPage /> }.into_any(),
        AppRoute::BlogEdit(id) => view! { <BlogFormPage id=id /> }.into_any(),

        AppRoute::Teachers => view! { <TeachersPage /> }.into_any(),
        AppRoute::TeacherAdd => view! { <TeacherFormPage /> }.into_any(),
        AppRoute::TeacherEdit(id) => view! { <TeacherFormPage id=id /> }.into_any(),

        AppRoute::Courses => view! { <CoursesPage /> }.into_any(),
        AppRoute::CourseAdd => view! { <CourseFormPage /> }.into_any(),
        AppRoute::CourseEdit(id) => view! { <CourseFormPage id=id /> }.into_any(),

        AppRoute::Categories => view! { <CategoriesPage /> }.into_any(),
        AppRoute::CategoryAdd => view! { <CategoryFormPage /> }.into_any(),
        AppRoute::CategoryEdit(id) => view! { <CategoryFormPage id=id /> }.into_any(),

        AppRoute::Consultations => view! { <ConsultationsPage /> }.into_any(),
        AppRoute::Students => view! { <StudentsPage /> }.into_any(),
        AppRoute::ProfileDetails => view! { <ProfileDetailsPage /> }.into_any(),
        AppRoute::ProfileSettings => view! { <ProfileSettingsPage /> }.into_any(),
    };

    view! { <AdminLayout>{page}</AdminLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 创建会话上下文并从 LocalStorage 恢复
    let auth = AuthContext::new();
    provide_context(auth);
    init_session(&auth);

    // 2. 会话信号注入路由服务，实现守卫与自动重定向
    let is_authenticated = auth.is_authenticated_signal();

    view! {
        <Router is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
