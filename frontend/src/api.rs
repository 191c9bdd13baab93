//! REST 客户端封装。
//!
//! 所有请求共用一个已配置的 API 基址；凭据存在时统一附加
//! `Authorization: Bearer` 头。401/403 与其他失败一样作为
//! [`ApiError::Status`] 交给调用方，不做自动登出或重试。

use gloo_net::http::{Request, RequestBuilder, Response};
use qafzah_shared::{LoginRequest, LoginResponse, Record, RecordId, UPLOAD_FIELD, UploadResponse};

/// 默认 API 基址。
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

/// 文件上传端点。
const UPLOAD_PATH: &str = "/files/upload";

// =========================================================
// 错误类型
// =========================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 请求构建失败
    Request(String),
    /// 网络请求失败
    Network(String),
    /// 服务端以非 2xx 状态拒绝
    Status(u16),
    /// 响应解析失败
    Decode(String),
}

impl core::fmt::Display for ApiError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ApiError::Request(msg) => write!(f, "failed to build request: {}", msg),
            ApiError::Network(msg) => write!(f, "network error: {}", msg),
            ApiError::Status(code) => write!(f, "server rejected request: {}", code),
            ApiError::Decode(msg) => write!(f, "failed to parse response: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

// =========================================================
// 客户端
// =========================================================

#[derive(Debug, Clone, PartialEq)]
pub struct QafzahApi {
    base_url: String,
    token: Option<String>,
}

impl QafzahApi {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, token }
    }

    fn url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base_url, path)
        } else {
            format!("{}/{}", self.base_url, path)
        }
    }

    /// 拼接图片等静态资源地址：基址 + 服务端相对路径，原样拼接。
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// 凭据存在时附加 Bearer 头，否则按匿名请求发送。
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => req.header("Authorization", &format!("Bearer {}", token)),
            None => req,
        }
    }

    fn expect_ok(res: Response) -> Result<Response, ApiError> {
        if res.ok() {
            Ok(res)
        } else {
            Err(ApiError::Status(res.status()))
        }
    }

    async fn send(req: RequestBuilder) -> Result<Response, ApiError> {
        let res = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(res)
    }

    async fn send_json<B: serde::Serialize>(
        req: RequestBuilder,
        body: &B,
    ) -> Result<Response, ApiError> {
        let res = req
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(res)
    }

    // =========================================================
    // 集合端点上的泛型操作
    // =========================================================

    /// 一次性拉取整个集合（不带分页/过滤参数）。
    pub async fn fetch_all<R: Record>(&self) -> Result<Vec<R>, ApiError> {
        let req = self.authorize(Request::get(&self.url(R::COLLECTION)));
        Self::send(req)
            .await?
            .json::<Vec<R>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn fetch_one<R: Record>(&self, id: RecordId) -> Result<R, ApiError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        let req = self.authorize(Request::get(&self.url(&path)));
        Self::send(req)
            .await?
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn create<R: Record>(&self, payload: &R::Payload) -> Result<(), ApiError> {
        let req = self.authorize(Request::post(&self.url(R::COLLECTION)));
        Self::send_json(req, payload).await.map(|_| ())
    }

    /// 更新统一使用 PATCH。
    pub async fn update<R: Record>(&self, id: RecordId, payload: &R::Payload) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        let req = self.authorize(Request::patch(&self.url(&path)));
        Self::send_json(req, payload).await.map(|_| ())
    }

    pub async fn delete<R: Record>(&self, id: RecordId) -> Result<(), ApiError> {
        let path = format!("{}/{}", R::COLLECTION, id);
        let req = self.authorize(Request::delete(&self.url(&path)));
        Self::send(req).await.map(|_| ())
    }

    // =========================================================
    // 专用端点
    // =========================================================

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let req = self.authorize(Request::post(&self.url("/auth/login")));
        Self::send_json(req, &body)
            .await?
            .json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// 单文件 multipart 上传，返回服务端相对路径。
    pub async fn upload(&self, file: web_sys::File) -> Result<UploadResponse, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;
        form.append_with_blob(UPLOAD_FIELD, &file)
            .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

        let req = self.authorize(Request::post(&self.url(UPLOAD_PATH)));
        let res = req
            .body(form)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Self::expect_ok(res)?
            .json::<UploadResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests;
