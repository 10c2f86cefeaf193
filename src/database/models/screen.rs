use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

/// Allowed widths for the main content container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "container_width", rename_all = "lowercase")]
pub enum ContainerWidth {
    Narrow,
    Medium,
    Wide,
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "content_style", rename_all = "lowercase")]
pub enum ContentStyle {
    Focal,
    Nonfocal,
}

/// Identity block embedded in every screen. `ID` is the lookup key used by
/// the `/api/screens/:id` routes; it is not the row's primary key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenMetadata {
    pub version: String,
    #[serde(rename = "ID")]
    pub id: String,
}

/// A stored page layout, serialized in the camelCase wire format the portal
/// frontend expects.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub id: Uuid,
    pub metadata: Json<ScreenMetadata>,
    pub header: Json<Vec<Value>>,
    pub element_fields: Json<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark_data: Option<String>,
    pub content: Json<Vec<Value>>,
    pub region_content: Json<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_container_width: Option<ContainerWidth>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_style: Option<ContentStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_background_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_background_image: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_text_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_back_to_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_to_top_background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub back_to_top_text_color: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create payload. Only the metadata block is required; layout sections
/// default to empty and cosmetic fields to null.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewScreen {
    pub metadata: ScreenMetadata,
    #[serde(default)]
    pub header: Vec<Value>,
    #[serde(default)]
    pub element_fields: Map<String, Value>,
    pub bookmark_data: Option<String>,
    #[serde(default)]
    pub content: Vec<Value>,
    #[serde(default)]
    pub region_content: Vec<Value>,
    pub content_container_width: Option<ContainerWidth>,
    pub content_style: Option<ContentStyle>,
    pub content_background_image: Option<Value>,
    pub content_background_color: Option<String>,
    pub body_background_image: Option<Value>,
    pub body_background_color: Option<String>,
    pub footer_text_color: Option<String>,
    pub hide_back_to_top: Option<bool>,
    pub back_to_top_background_color: Option<String>,
    pub back_to_top_text_color: Option<String>,
}

/// Update payload for PUT. Every field is optional; absent fields leave the
/// stored value untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenPatch {
    pub metadata: Option<ScreenMetadata>,
    pub header: Option<Vec<Value>>,
    pub element_fields: Option<Map<String, Value>>,
    pub bookmark_data: Option<String>,
    pub content: Option<Vec<Value>>,
    pub region_content: Option<Vec<Value>>,
    pub content_container_width: Option<ContainerWidth>,
    pub content_style: Option<ContentStyle>,
    pub content_background_image: Option<Value>,
    pub content_background_color: Option<String>,
    pub body_background_image: Option<Value>,
    pub body_background_color: Option<String>,
    pub footer_text_color: Option<String>,
    pub hide_back_to_top: Option<bool>,
    pub back_to_top_background_color: Option<String>,
    pub back_to_top_text_color: Option<String>,
}

impl ScreenPatch {
    /// Overlay the supplied fields onto an existing screen.
    pub fn apply(self, screen: &mut Screen) {
        if let Some(metadata) = self.metadata {
            screen.metadata = Json(metadata);
        }
        if let Some(header) = self.header {
            screen.header = Json(header);
        }
        if let Some(element_fields) = self.element_fields {
            screen.element_fields = Json(element_fields);
        }
        if let Some(bookmark_data) = self.bookmark_data {
            screen.bookmark_data = Some(bookmark_data);
        }
        if let Some(content) = self.content {
            screen.content = Json(content);
        }
        if let Some(region_content) = self.region_content {
            screen.region_content = Json(region_content);
        }
        if let Some(width) = self.content_container_width {
            screen.content_container_width = Some(width);
        }
        if let Some(style) = self.content_style {
            screen.content_style = Some(style);
        }
        if let Some(image) = self.content_background_image {
            screen.content_background_image = Some(image);
        }
        if let Some(color) = self.content_background_color {
            screen.content_background_color = Some(color);
        }
        if let Some(image) = self.body_background_image {
            screen.body_background_image = Some(image);
        }
        if let Some(color) = self.body_background_color {
            screen.body_background_color = Some(color);
        }
        if let Some(color) = self.footer_text_color {
            screen.footer_text_color = Some(color);
        }
        if let Some(hide) = self.hide_back_to_top {
            screen.hide_back_to_top = Some(hide);
        }
        if let Some(color) = self.back_to_top_background_color {
            screen.back_to_top_background_color = Some(color);
        }
        if let Some(color) = self.back_to_top_text_color {
            screen.back_to_top_text_color = Some(color);
        }
    }
}
