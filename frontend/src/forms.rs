//! 表单视图核心：提交状态机 + 图片两阶段上传
//!
//! 纯状态层。每个表单页持有一个普通字段结构体（单一不可变值，
//! 经由显式变换更新）外加这里的两个状态机。

use std::time::Duration;

/// 提交/删除成功后跳转回列表页的延迟。
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

// =========================================================
// 表单生命周期
// =========================================================

/// `Empty -> Loading -> Ready -> Submitting -> (Success | Failed)`
///
/// 纯新建表单跳过预填充，直接从 `Ready` 开始；
/// `Failed` 在下一次用户操作时重新进入 `Submitting`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Empty,
    /// 编辑模式：正在拉取待编辑记录
    Loading,
    Ready,
    Submitting,
    Success(String),
    Failed(String),
}

impl FormPhase {
    /// 是否应展示加载指示（建议性的，不硬性阻止重复提交）
    pub fn is_busy(&self) -> bool {
        matches!(self, FormPhase::Loading | FormPhase::Submitting)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FormPhase::Loading)
    }
}

// =========================================================
// 图片上传状态机
// =========================================================

/// 两阶段上传流程：选择文件立即上传，成功后的相对路径
/// 作为记录的图片字段随表单一并提交。
///
/// 上传失败时挂起值回落到先前状态，而不是清空。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImagePhase {
    #[default]
    Unset,
    Uploading {
        prior: Option<String>,
    },
    Uploaded(String),
    Failed {
        prior: Option<String>,
    },
}

impl ImagePhase {
    /// 编辑模式预填充：已有路径则视为已上传。
    pub fn from_existing(path: String) -> Self {
        if path.is_empty() {
            ImagePhase::Unset
        } else {
            ImagePhase::Uploaded(path)
        }
    }

    /// 开始一次新上传，暂存当前值以备失败回落。
    pub fn begin(self) -> Self {
        let prior = self.into_value();
        ImagePhase::Uploading { prior }
    }

    /// 上传成功：服务端相对路径成为挂起值。
    pub fn complete(self, path: String) -> Self {
        ImagePhase::Uploaded(path)
    }

    /// 上传失败：保留先前的挂起值。
    pub fn fail(self) -> Self {
        match self {
            ImagePhase::Uploading { prior } => ImagePhase::Failed { prior },
            other => other,
        }
    }

    /// 当前挂起的图片值。
    pub fn value(&self) -> Option<&str> {
        match self {
            ImagePhase::Uploaded(path) => Some(path),
            ImagePhase::Uploading { prior } | ImagePhase::Failed { prior } => prior.as_deref(),
            ImagePhase::Unset => None,
        }
    }

    fn into_value(self) -> Option<String> {
        match self {
            ImagePhase::Uploaded(path) => Some(path),
            ImagePhase::Uploading { prior } | ImagePhase::Failed { prior } => prior,
            ImagePhase::Unset => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self, ImagePhase::Uploading { .. })
    }

    /// 提交门槛：非空图片值。缺失时返回页面可直接展示的提示。
    pub fn require(&self) -> Result<String, &'static str> {
        match self.value() {
            Some(path) if !path.is_empty() => Ok(path.to_string()),
            _ => Err("Please upload an image first."),
        }
    }
}

/// 必填文本校验：裁剪后非空。
pub fn require_text<'a>(
    value: &'a str,
    message: &'static str,
) -> Result<&'a str, &'static str> {
    if value.trim().is_empty() {
        Err(message)
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests;
