use super::catalog::{Catalog, OptionId, SponsorOption};

/// 当前选中的档位与弹窗可见性。
///
/// 弹窗可见时一定有选中档位；关闭弹窗不会清空选中项。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<OptionId>,
    dialog_visible: bool,
}

impl SelectionState {
    pub fn selected(&self) -> Option<OptionId> {
        self.selected
    }

    pub fn dialog_visible(&self) -> bool {
        self.dialog_visible
    }

    /// 返回状态是否变化
    pub(super) fn open(&mut self, id: OptionId) -> bool {
        let prev = *self;
        self.selected = Some(id);
        self.dialog_visible = true;
        *self != prev
    }

    pub(super) fn close(&mut self) -> bool {
        let prev = self.dialog_visible;
        self.dialog_visible = false;
        prev
    }
}

/// 渲染层读取的只读投影
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionView<'a> {
    pub selected: Option<&'a SponsorOption>,
    pub dialog_visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// 键盘焦点所在的卡片下标
    pub focused: usize,
    pub should_quit: bool,
}

#[derive(Debug)]
pub struct AppState {
    pub catalog: Catalog,
    pub selection: SelectionState,
    pub ui: UiState,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::default(),
            ui: UiState::default(),
        }
    }

    pub fn view(&self) -> SelectionView<'_> {
        SelectionView {
            selected: self
                .selection
                .selected()
                .and_then(|id| self.catalog.get(id)),
            dialog_visible: self.selection.dialog_visible(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}
