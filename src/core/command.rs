//! 命令系统：语义命令定义
//!
//! Command 只描述意图，不关心具体按键；按键到命令的映射由 KeybindingService 负责。

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    // ==================== 卡片导航 ====================
    FocusNext,
    FocusPrev,
    Activate,

    // ==================== 弹窗 ====================
    CloseDialog,

    // ==================== 系统操作 ====================
    Quit,

    Custom(String),
}

impl Command {
    pub fn name(&self) -> &str {
        match self {
            Command::FocusNext => "focusNext",
            Command::FocusPrev => "focusPrev",
            Command::Activate => "activate",
            Command::CloseDialog => "closeDialog",
            Command::Quit => "quit",
            Command::Custom(name) => name,
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.trim() {
            "focusNext" => Command::FocusNext,
            "focusPrev" => Command::FocusPrev,
            "activate" => Command::Activate,
            "closeDialog" => Command::CloseDialog,
            "quit" => Command::Quit,
            other => Command::Custom(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/command.rs"]
mod tests;
