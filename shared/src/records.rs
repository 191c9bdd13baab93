//! 业务实体记录。
//!
//! 字段名按后端 JSON 拼写做 serde 重命名。注意拼写并不统一：
//! 课程使用 `imageUrl`，其余实体使用 `imageURL`。

use crate::protocol::{Record, RecordId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// =========================================================
// Category
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    pub description: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Record for Category {
    type Payload = CategoryPayload;
    const COLLECTION: &'static str = "/categories";
    fn id(&self) -> RecordId {
        self.id
    }
}

// =========================================================
// Teacher
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub title: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeacherPayload {
    pub email: String,
    pub fname: String,
    pub lname: String,
    // 编辑时留空则不重置密码
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub bio: String,
    pub title: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Record for Teacher {
    type Payload = TeacherPayload;
    const COLLECTION: &'static str = "/teachers";
    fn id(&self) -> RecordId {
        self.id
    }
}

// =========================================================
// Blog
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Blog {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(rename = "imageURL", default)]
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPayload {
    pub title: String,
    pub content: String,
    #[serde(rename = "imageURL")]
    pub image_url: String,
}

impl Record for Blog {
    type Payload = BlogPayload;
    const COLLECTION: &'static str = "/blogs";
    fn id(&self) -> RecordId {
        self.id
    }
}

// =========================================================
// Course
// =========================================================

/// 授课形式。线上拼写为 `Online` / `In-person` / `Hybrid`。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CourseType {
    Online,
    #[serde(rename = "In-person")]
    InPerson,
    Hybrid,
}

impl Default for CourseType {
    fn default() -> Self {
        CourseType::Online
    }
}

impl CourseType {
    pub const ALL: [CourseType; 3] = [CourseType::Online, CourseType::InPerson, CourseType::Hybrid];

    /// 线上拼写，同时用作表单下拉选项的值。
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseType::Online => "Online",
            CourseType::InPerson => "In-person",
            CourseType::Hybrid => "Hybrid",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub teacher_id: RecordId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(default)]
    pub cost: f64,
    #[serde(rename = "type", default)]
    pub kind: CourseType,
    /// 读取模型携带分类名称；载荷提交分类 id。
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub hours: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoursePayload {
    pub title: String,
    pub description: String,
    pub teacher_id: RecordId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
    #[serde(rename = "type")]
    pub kind: CourseType,
    pub image_url: String,
    pub categories: Vec<RecordId>,
    pub start_date: NaiveDate,
    pub hours: u32,
}

impl Record for Course {
    type Payload = CoursePayload;
    const COLLECTION: &'static str = "/courses";
    fn id(&self) -> RecordId {
        self.id
    }
}

// =========================================================
// Consultation (只读 + 删除)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Consultation {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Record for Consultation {
    type Payload = ();
    const COLLECTION: &'static str = "/consultations";
    fn id(&self) -> RecordId {
        self.id
    }
}

// =========================================================
// Student (只读)
// =========================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: RecordId,
    pub email: String,
    #[serde(default)]
    pub fname: String,
    #[serde(default)]
    pub lname: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.fname, self.lname).trim().to_string()
    }
}

impl Record for Student {
    type Payload = ();
    const COLLECTION: &'static str = "/students";
    fn id(&self) -> RecordId {
        self.id
    }
}

#[cfg(test)]
mod tests;
