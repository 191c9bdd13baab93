//! 认证与上传 DTO，以及集合端点约定。

use crate::UserIdentity;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// 所有实体共用的记录标识符。
pub type RecordId = i64;

/// A trait binding a record type to its REST collection endpoint.
///
/// 每个实体记录实现一次，泛型客户端即可覆盖
/// list / get / create / update / delete 全部操作。
pub trait Record: Serialize + DeserializeOwned + Clone + PartialEq + 'static {
    /// Body accepted by the create (POST) and update (PATCH) endpoints.
    type Payload: Serialize;
    /// Collection path, e.g. `/categories`.
    const COLLECTION: &'static str;
    fn id(&self) -> RecordId;
}

// =========================================================
// Request / Response Definitions
// =========================================================

/// `POST /auth/login` 请求体。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// `POST /auth/login` 响应体。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserIdentity,
    pub token: String,
}

/// `POST /files/upload` 响应体：服务端相对路径。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    #[serde(rename = "filePath")]
    pub file_path: String,
}
