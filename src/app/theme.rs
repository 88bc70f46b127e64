//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub focus_border: Color,
    pub inactive_border: Color,
    pub separator: Color,
    pub accent_fg: Color,
    pub header_fg: Color,
    pub price_fg: Color,
    pub banner_bg: Color,
    pub banner_fg: Color,
    pub dialog_border: Color,
    pub dialog_bg: Color,
    pub dialog_fg: Color,
    pub muted_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            focus_border: Color::Indexed(12),   // LightBlue
            inactive_border: Color::Indexed(8), // DarkGray
            separator: Color::Indexed(8),       // DarkGray
            accent_fg: Color::Indexed(3),       // Yellow
            header_fg: Color::Indexed(15),      // White
            price_fg: Color::Indexed(12),       // LightBlue
            banner_bg: Color::Rgb(0x76, 0x4B, 0xA2),
            banner_fg: Color::Indexed(15),
            dialog_border: Color::Indexed(12),
            dialog_bg: Color::Reset,
            dialog_fg: Color::Indexed(15),
            muted_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// 无法解析的颜色保持原值
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 12] = [
            (&settings.focus_border, &mut self.focus_border),
            (&settings.inactive_border, &mut self.inactive_border),
            (&settings.separator, &mut self.separator),
            (&settings.accent_fg, &mut self.accent_fg),
            (&settings.header_fg, &mut self.header_fg),
            (&settings.price_fg, &mut self.price_fg),
            (&settings.banner_bg, &mut self.banner_bg),
            (&settings.banner_fg, &mut self.banner_fg),
            (&settings.dialog_border, &mut self.dialog_border),
            (&settings.dialog_bg, &mut self.dialog_bg),
            (&settings.dialog_fg, &mut self.dialog_fg),
            (&settings.muted_fg, &mut self.muted_fg),
        ];
        for (value, slot) in slots {
            let Some(value) = value else {
                continue;
            };
            match parse_color(value) {
                Some(color) => *slot = color,
                None => tracing::warn!(value = %value, "ignoring unknown theme color"),
            }
        }
    }
}

pub fn parse_color(value: &str) -> Option<Color> {
    let v = value.trim();
    if v.is_empty() {
        return None;
    }

    if let Some(hex) = v.strip_prefix('#') {
        // 按字节切片前先确认全是 ASCII 十六进制位
        if hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()) {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }

    let v = v.to_ascii_lowercase();
    let c = match v.as_str() {
        "reset" => Color::Reset,
        "black" => Color::Indexed(0),
        "red" => Color::Indexed(1),
        "green" => Color::Indexed(2),
        "yellow" => Color::Indexed(3),
        "blue" => Color::Indexed(4),
        "magenta" => Color::Indexed(5),
        "cyan" => Color::Indexed(6),
        "gray" | "grey" => Color::Indexed(7),
        "dark_gray" | "darkgrey" => Color::Indexed(8),
        "light_red" => Color::Indexed(9),
        "light_green" => Color::Indexed(10),
        "light_yellow" => Color::Indexed(11),
        "light_blue" => Color::Indexed(12),
        "light_magenta" => Color::Indexed(13),
        "light_cyan" => Color::Indexed(14),
        "white" => Color::Indexed(15),
        _ => return None,
    };

    Some(c)
}

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
