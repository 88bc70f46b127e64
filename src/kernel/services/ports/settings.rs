use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub keybindings: Vec<KeybindingRule>,
    #[serde(default)]
    pub theme: ThemeSettings,
    /// 收款码图片所在目录；命令行 `--assets` 优先
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeybindingRule {
    pub key: String,
    pub command: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inactive_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_border: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_bg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_fg: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted_fg: Option<String>,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            focus_border: Some("light_blue".to_string()),
            inactive_border: Some("dark_gray".to_string()),
            separator: Some("dark_gray".to_string()),
            accent_fg: Some("yellow".to_string()),
            header_fg: Some("white".to_string()),
            price_fg: Some("light_blue".to_string()),
            banner_bg: Some("#764ba2".to_string()),
            banner_fg: Some("white".to_string()),
            dialog_border: Some("light_blue".to_string()),
            dialog_bg: None,
            dialog_fg: Some("white".to_string()),
            muted_fg: Some("dark_gray".to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/ports/settings.rs"]
mod tests;
