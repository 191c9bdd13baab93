//! Qafzah 管理后台与 REST 后端之间交换的线上类型。
//!
//! 此 crate 不包含任何浏览器或 UI 依赖：
//! - `records`: 各业务实体记录及其创建/更新载荷
//! - `protocol`: 认证/上传 DTO 与 `Record` 集合端点约定

mod protocol;
mod records;

pub use protocol::{LoginRequest, LoginResponse, Record, RecordId, UploadResponse};
pub use records::{
    Blog, BlogPayload, Category, CategoryPayload, Consultation, Course, CoursePayload, CourseType,
    Student, Teacher, TeacherPayload,
};

use serde::{Deserialize, Serialize};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 后端允许进入管理后台的角色名。
pub const ROLE_ADMIN: &str = "Admin";

/// 文件上传接口的 multipart 字段名。
pub const UPLOAD_FIELD: &str = "file";

// =========================================================
// 认证身份 (Identity)
// =========================================================

/// 登录接口返回的用户资料。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    pub role: String,
}

impl UserIdentity {
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname).trim().to_string()
    }
}
