use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::SponsorPage;
use crate::core::event::{InputEvent, Key, MousePosition};
use crate::core::Command;
use crate::kernel::services::adapters::KeybindingContext;
use crate::kernel::Action;
use crate::tui::EventResult;

impl SponsorPage {
    pub(super) fn handle_input_event(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(_) => match event.as_key_press() {
                Some(key) => self.handle_key(Key::from(*key)),
                None => EventResult::Ignored,
            },
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(..) => EventResult::Consumed,
            InputEvent::FocusGained | InputEvent::FocusLost | InputEvent::Paste(_) => {
                EventResult::Ignored
            }
        }
    }

    fn keybinding_context(&self) -> KeybindingContext {
        if self.store.current_view().dialog_visible {
            KeybindingContext::Dialog
        } else {
            KeybindingContext::Page
        }
    }

    fn handle_key(&mut self, key: Key) -> EventResult {
        let context = self.keybinding_context();
        match self.keybindings.resolve(context, &key).cloned() {
            Some(command) => self.run_command(command),
            None => EventResult::Ignored,
        }
    }

    pub fn run_command(&mut self, command: Command) -> EventResult {
        let action = match command {
            Command::FocusNext => Action::MoveFocus { delta: 1 },
            Command::FocusPrev => Action::MoveFocus { delta: -1 },
            Command::Activate => Action::ActivateFocused,
            Command::CloseDialog => Action::DialogDismissed,
            Command::Quit => Action::Quit,
            Command::Custom(name) => {
                tracing::debug!(command = %name, "unhandled custom command");
                return EventResult::Ignored;
            }
        };
        self.dispatch(action)
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }
        let pos = MousePosition::from_event(mouse);

        if self.store.current_view().dialog_visible {
            // 点击遮罩或关闭按钮都会关闭弹窗；弹窗内其它位置不响应
            let dismiss = self.layout.on_close_button(pos.x, pos.y)
                || !self.layout.in_dialog(pos.x, pos.y);
            return if dismiss {
                self.dispatch(Action::DialogDismissed)
            } else {
                EventResult::Ignored
            };
        }

        let Some(index) = self.layout.card_at(pos.x, pos.y) else {
            return EventResult::Ignored;
        };
        let catalog = &self.store.state().catalog;
        let Some(option) = catalog.id_at(index).and_then(|id| catalog.get(id)).cloned() else {
            return EventResult::Ignored;
        };
        self.dispatch(Action::OptionActivated(option))
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/input.rs"]
mod tests;
