//! 应用层：赞助页与主题

pub mod page;
pub mod theme;

pub use page::SponsorPage;
pub use theme::UiTheme;
