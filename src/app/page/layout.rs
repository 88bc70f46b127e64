use ratatui::layout::{Position, Rect};

pub const CARD_WIDTH: u16 = 14;
pub const CARD_HEIGHT: u16 = 4;
pub const CARD_GAP: u16 = 2;
const MIN_CARD_WIDTH: u16 = 8;

pub const DIALOG_WIDTH: u16 = 52;
/// 除图片外弹窗固定占用的行数（含边框）
pub const DIALOG_CHROME_ROWS: u16 = 10;
pub const CLOSE_BUTTON: &str = "[ 关闭 ]";
pub const CLOSE_BUTTON_WIDTH: u16 = 8;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLayout {
    pub cards: Vec<Rect>,
    pub dialog: Option<Rect>,
    pub close_button: Option<Rect>,
}

impl PageLayout {
    pub fn card_at(&self, x: u16, y: u16) -> Option<usize> {
        let pos = Position::new(x, y);
        self.cards.iter().position(|rect| rect.contains(pos))
    }

    pub fn in_dialog(&self, x: u16, y: u16) -> bool {
        self.dialog
            .is_some_and(|rect| rect.contains(Position::new(x, y)))
    }

    pub fn on_close_button(&self, x: u16, y: u16) -> bool {
        self.close_button
            .is_some_and(|rect| rect.contains(Position::new(x, y)))
    }
}

/// 一行居中排布的卡片；宽度不够时等比收窄，仍放不下的卡片不返回。
pub fn card_rects(row: Rect, count: usize) -> Vec<Rect> {
    if count == 0 || row.width == 0 || row.height == 0 {
        return Vec::new();
    }

    let count_u16 = count.min(u16::MAX as usize) as u16;
    let gaps = CARD_GAP.saturating_mul(count_u16.saturating_sub(1));
    let natural = CARD_WIDTH.saturating_mul(count_u16).saturating_add(gaps);
    let card_width = if natural <= row.width {
        CARD_WIDTH
    } else {
        (row.width.saturating_sub(gaps) / count_u16).max(MIN_CARD_WIDTH)
    };

    let total = card_width
        .saturating_mul(count_u16)
        .saturating_add(gaps);
    let start = row.x + row.width.saturating_sub(total) / 2;
    let height = CARD_HEIGHT.min(row.height);

    (0..count_u16)
        .map(|i| Rect::new(start + i * (card_width + CARD_GAP), row.y, card_width, height))
        .take_while(|rect| rect.right() <= row.right())
        .collect()
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn dialog_rect(area: Rect, image_rows: u16) -> Rect {
    let width = DIALOG_WIDTH.min(area.width.saturating_sub(2));
    let height = DIALOG_CHROME_ROWS
        .saturating_add(image_rows)
        .min(area.height);
    centered_rect(area, width, height)
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/layout.rs"]
mod tests;
