//! 赞助页：把终端输入翻译成 Action，并渲染 Store 的只读投影。

mod input;
mod layout;
mod render;

use ratatui::layout::Rect;
use ratatui::Frame;

use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::kernel::services::adapters::{AssetService, KeybindingService};
use crate::kernel::services::ports::Settings;
use crate::kernel::{Action, AppState, Catalog, Effect, Store};
use crate::tui::{EventResult, View};

pub use layout::{card_rects, centered_rect, PageLayout};

pub struct SponsorPage {
    store: Store,
    theme: UiTheme,
    keybindings: KeybindingService,
    assets: AssetService,
    /// 上一帧的命中区域，鼠标事件据此定位
    layout: PageLayout,
}

impl SponsorPage {
    pub fn new(catalog: Catalog, settings: &Settings, assets: AssetService) -> Self {
        let mut keybindings = KeybindingService::new();
        keybindings.apply_rules(&settings.keybindings);

        tracing::info!(
            options = catalog.len(),
            benefits = catalog.benefits().len(),
            assets = %assets.root().display(),
            "sponsor page mounted"
        );

        Self {
            store: Store::new(AppState::new(catalog)),
            theme: UiTheme::from_settings(&settings.theme),
            keybindings,
            assets,
            layout: PageLayout::default(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn assets(&self) -> &AssetService {
        &self.assets
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn should_quit(&self) -> bool {
        self.store.state().ui.should_quit
    }

    pub fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        self.run_effects(result.effects);

        if self.should_quit() {
            EventResult::Quit
        } else if result.state_changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadPaymentCode { image_ref } => {
                    self.assets.load(&image_ref);
                }
            }
        }
    }
}

impl View for SponsorPage {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        self.handle_input_event(event)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.render_page(frame, area);
    }
}
