use super::catalog::SponsorOption;
use super::state::SelectionView;
use super::{Action, AppState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn unchanged() -> Self {
        Self {
            effects: Vec::new(),
            state_changed: false,
        }
    }

    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn current_view(&self) -> SelectionView<'_> {
        self.state.view()
    }

    pub fn select(&mut self, option: &SponsorOption) -> DispatchResult {
        let Some(id) = self.state.catalog.position_of(option) else {
            tracing::warn!(label = %option.label, "ignoring sponsor option outside the catalog");
            return DispatchResult::unchanged();
        };

        let focus_changed = self.state.ui.focused != id.index();
        self.state.ui.focused = id.index();

        if !self.state.selection.open(id) {
            return DispatchResult::changed(focus_changed);
        }

        tracing::debug!(label = %option.label, "sponsor option selected");
        DispatchResult {
            effects: vec![Effect::LoadPaymentCode {
                image_ref: option.image_ref.clone(),
            }],
            state_changed: true,
        }
    }

    pub fn close(&mut self) -> DispatchResult {
        let changed = self.state.selection.close();
        if changed {
            tracing::debug!("payment dialog closed");
        }
        DispatchResult::changed(changed)
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::OptionActivated(option) => self.select(&option),
            Action::DialogDismissed => self.close(),
            Action::MoveFocus { delta } => {
                if self.state.selection.dialog_visible() {
                    return DispatchResult::unchanged();
                }
                let len = self.state.catalog.len() as isize;
                if len == 0 {
                    return DispatchResult::unchanged();
                }
                let prev = self.state.ui.focused;
                let next = (prev as isize + delta).rem_euclid(len) as usize;
                self.state.ui.focused = next;
                DispatchResult::changed(next != prev)
            }
            Action::ActivateFocused => {
                let focused = self.state.ui.focused;
                let Some(option) = self
                    .state
                    .catalog
                    .id_at(focused)
                    .and_then(|id| self.state.catalog.get(id))
                    .cloned()
                else {
                    return DispatchResult::unchanged();
                };
                self.select(&option)
            }
            Action::Quit => {
                let prev = self.state.ui.should_quit;
                self.state.ui.should_quit = true;
                DispatchResult::changed(!prev)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/store.rs"]
mod tests;
