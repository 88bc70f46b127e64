use super::catalog::SponsorOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 用户点选了某个档位卡片
    OptionActivated(SponsorOption),
    /// 用户关闭了收款码弹窗
    DialogDismissed,
    MoveFocus {
        delta: isize,
    },
    ActivateFocused,
    Quit,
}
