//! 路由定义模块 - 领域模型
//!
//! 这是纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由及其属性。

use qafzah_shared::RecordId;
use std::fmt::Display;

/// 应用路由枚举
///
/// 每个可管理实体有 列表 / 新建 / 编辑 三条路由；
/// 咨询与学生仅有列表。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// 登录页面 (默认路由)
    #[default]
    Login,

    Blogs,
    BlogAdd,
    BlogEdit(RecordId),

    Teachers,
    TeacherAdd,
    TeacherEdit(RecordId),

    Courses,
    CourseAdd,
    CourseEdit(RecordId),

    Categories,
    CategoryAdd,
    CategoryEdit(RecordId),

    Consultations,
    Students,

    ProfileDetails,
    ProfileSettings,

    Status404,
    Status500,
    /// 页面未找到
    NotFound,
}

impl AppRoute {
    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" | "/login" => Self::Login,

            "/blogs" => Self::Blogs,
            "/blogs/add" => Self::BlogAdd,
            "/teachers" => Self::Teachers,
            "/teachers/add" => Self::TeacherAdd,
            "/courses" => Self::Courses,
            "/courses/add" => Self::CourseAdd,
            "/categories" => Self::Categories,
            "/categories/add" => Self::CategoryAdd,

            "/consultations" => Self::Consultations,
            "/students" => Self::Students,

            "/profile" | "/profile/details" => Self::ProfileDetails,
            "/profile/settings" => Self::ProfileSettings,

            "/status/404" => Self::Status404,
            "/status/500" => Self::Status500,

            other => Self::parse_edit(other).unwrap_or(Self::NotFound),
        }
    }

    /// 解析 `/<collection>/edit/<id>` 形式的编辑路由
    fn parse_edit(path: &str) -> Option<Self> {
        let (collection, id) = path
            .strip_prefix('/')?
            .split_once("/edit/")
            .and_then(|(c, rest)| rest.parse::<RecordId>().ok().map(|id| (c, id)))?;

        match collection {
            "blogs" => Some(Self::BlogEdit(id)),
            "teachers" => Some(Self::TeacherEdit(id)),
            "courses" => Some(Self::CourseEdit(id)),
            "categories" => Some(Self::CategoryEdit(id)),
            _ => None,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> String {
        match self {
            Self::Login => "/".to_string(),

            Self::Blogs => "/blogs".to_string(),
            Self::BlogAdd => "/blogs/add".to_string(),
            Self::BlogEdit(id) => format!("/blogs/edit/{}", id),

            Self::Teachers => "/teachers".to_string(),
            Self::TeacherAdd => "/teachers/add".to_string(),
            Self::TeacherEdit(id) => format!("/teachers/edit/{}", id),

            Self::Courses => "/courses".to_string(),
            Self::CourseAdd => "/courses/add".to_string(),
            Self::CourseEdit(id) => format!("/courses/edit/{}", id),

            Self::Categories => "/categories".to_string(),
            Self::CategoryAdd => "/categories/add".to_string(),
            Self::CategoryEdit(id) => format!("/categories/edit/{}", id),

            Self::Consultations => "/consultations".to_string(),
            Self::Students => "/students".to_string(),

            Self::ProfileDetails => "/profile/details".to_string(),
            Self::ProfileSettings => "/profile/settings".to_string(),

            Self::Status404 => "/status/404".to_string(),
            Self::Status500 => "/status/500".to_string(),
            Self::NotFound => "/status/404".to_string(),
        }
    }

    /// **核心守卫逻辑：定义该路由是否需要认证**
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Self::Login | Self::Status404 | Self::Status500 | Self::NotFound
        )
    }

    /// 定义已认证用户是否应该离开此路由（如登录页）
    pub fn should_redirect_when_authenticated(&self) -> bool {
        matches!(self, Self::Login)
    }

    /// 获取认证失败时的重定向目标
    pub fn auth_failure_redirect() -> Self {
        Self::Login
    }

    /// 获取认证成功时的重定向目标（落在博文列表）
    pub fn auth_success_redirect() -> Self {
        Self::Blogs
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

#[cfg(test)]
mod tests;
