use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_DOCUMENT_KEY: &str = "about_us";
pub const DEFAULT_MAX_TREE_DEPTH: usize = 32;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// JSON database file; `None` means `<app dir>/db.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    #[serde(default = "default_document_key")]
    pub document_key: String,
    #[serde(default = "default_max_tree_depth")]
    pub max_tree_depth: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    #[serde(default)]
    pub theme: ThemeSettings,
}

fn default_document_key() -> String {
    DEFAULT_DOCUMENT_KEY.to_string()
}

fn default_max_tree_depth() -> usize {
    DEFAULT_MAX_TREE_DEPTH
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_active_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tab_inactive_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_selected_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_selected_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette_muted_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("cyan".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("cyan".to_string()),
            tab_active_bg: Some("dark_gray".to_string()),
            tab_active_fg: Some("white".to_string()),
            tab_inactive_fg: Some("dark_gray".to_string()),
            palette_border: Some("cyan".to_string()),
            palette_bg: None,
            palette_fg: Some("white".to_string()),
            palette_selected_bg: Some("dark_gray".to_string()),
            palette_selected_fg: Some("white".to_string()),
            palette_muted_fg: Some("dark_gray".to_string()),
            error_fg: Some("red".to_string()),
            connector_fg: Some("dark_gray".to_string()),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            store_path: None,
            document_key: default_document_key(),
            max_tree_depth: default_max_tree_depth(),
            identity: None,
            theme: ThemeSettings::default(),
        }
    }
}
