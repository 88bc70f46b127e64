//! 快捷键：按键 → 命令（支持上下文）

use crate::core::event::Key;
use crate::core::Command;
use crate::kernel::services::ports::KeybindingRule;
use crossterm::event::KeyCode;
use rustc_hash::FxHashMap;

use super::settings::parse_keybinding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    /// 档位卡片页
    Page,
    /// 收款码弹窗
    Dialog,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "page" | "cards" => Some(Self::Page),
            "dialog" | "modal" => Some(Self::Dialog),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    page: FxHashMap<Key, Command>,
    dialog: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            page: default_page_keybindings(),
            dialog: default_dialog_keybindings(),
        }
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Page => self.page.get(key).or_else(|| self.global.get(key)),
            KeybindingContext::Dialog => self.dialog.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    /// 应用用户配置；无法解析的规则会被跳过并记录日志
    pub fn apply_rules(&mut self, rules: &[KeybindingRule]) {
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "skipping keybinding with unparsable key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(value) => match KeybindingContext::parse(value) {
                    Some(context) => context,
                    None => {
                        tracing::warn!(context = %value, "skipping keybinding with unknown context");
                        continue;
                    }
                },
            };
            // 空命令名表示解除绑定
            if rule.command.trim().is_empty() {
                self.unbind(context, &key);
                continue;
            }
            self.bind(context, key, Command::from_name(&rule.command));
        }
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Page => &mut self.page,
            KeybindingContext::Dialog => &mut self.dialog,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::ctrl(KeyCode::Char('c')), Command::Quit);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Quit);
    bindings
}

fn default_page_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(12);

    bindings.insert(Key::simple(KeyCode::Right), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::Char('l')), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::Tab), Command::FocusNext);
    bindings.insert(Key::simple(KeyCode::Left), Command::FocusPrev);
    bindings.insert(Key::simple(KeyCode::Char('h')), Command::FocusPrev);
    bindings.insert(Key::simple(KeyCode::BackTab), Command::FocusPrev);

    bindings.insert(Key::simple(KeyCode::Enter), Command::Activate);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::Activate);

    bindings.insert(Key::simple(KeyCode::Char('q')), Command::Quit);

    bindings
}

fn default_dialog_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.insert(Key::simple(KeyCode::Esc), Command::CloseDialog);
    bindings.insert(Key::simple(KeyCode::Enter), Command::CloseDialog);
    bindings.insert(Key::simple(KeyCode::Char(' ')), Command::CloseDialog);
    bindings.insert(Key::simple(KeyCode::Char('q')), Command::CloseDialog);
    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
