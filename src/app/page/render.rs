use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::layout::{card_rects, dialog_rect, CLOSE_BUTTON, CLOSE_BUTTON_WIDTH};
use super::{PageLayout, SponsorPage};
use crate::kernel::services::adapters::{PaymentCode, PixelImage};
use crate::kernel::SponsorOption;

const PAGE_TITLE: &str = "赞助 MuMuAINovel";
const PAGE_TAGLINE: &str = "SUPPORT AI NOVEL CREATION";
const BANNER_TITLE: &str = "📚 MuMuAINovel - 基于 AI 的智能小说创作助手";
const BANNER_BODY: &str = "支持多AI模型、智能向导、角色管理、章节编辑等强大功能";
const BENEFITS_TITLE: &str = "✔ 赞助专属权益";
const OPTIONS_TITLE: &str = "♥ 选择金额";
const THANKS_TITLE: &str = "💖 感谢您对 MuMuAINovel 项目的支持";
const THANKS_BODY: &str = "您的赞助将帮助我们持续改进产品，提供更好的AI小说创作体验";
const THANKS_STARS: &str = "★ ★ ★ ★ ★";

const DIALOG_SUBTITLE: &str = "请使用微信扫码支付";
const DIALOG_SCAN_HINT: &str = "扫描二维码完成支付";
const DIALOG_CONTACT_HINT: &str = "支付后可添加微信/QQ联系我们获取权益";

const PAGE_HINT: &str = "←/→ 选择档位   Enter 查看收款码   q 退出";
const DIALOG_HINT: &str = "Esc / Enter 关闭";
const FOCUS_PREFIX: &str = "当前：";
const HIDDEN_FOCUS_HINT: &str = "←/→ 切换";

impl SponsorPage {
    pub(super) fn render_page(&mut self, frame: &mut Frame, area: Rect) {
        let mut layout = PageLayout::default();

        let [header, banner, _, benefits_title, benefits, _, options_title, cards, divider, thanks, _, hint] =
            Layout::vertical([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .areas(area);

        self.render_header(frame, header, banner);
        self.render_benefits(frame, benefits_title, benefits);
        layout.cards = self.render_cards(frame, options_title, cards);
        frame.render_widget(
            Paragraph::new("─".repeat(divider.width as usize))
                .style(Style::default().fg(self.theme.separator)),
            divider,
        );
        self.render_thanks(frame, thanks);

        let dialog_open = self.store.current_view().dialog_visible;
        let hint_text = if dialog_open {
            DIALOG_HINT.to_string()
        } else {
            self.page_hint(layout.cards.len())
        };
        frame.render_widget(
            Paragraph::new(hint_text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(self.theme.muted_fg)),
            hint,
        );

        if dialog_open {
            self.render_dialog(frame, area, &mut layout);
        }

        self.layout = layout;
    }

    /// 焦点卡片放不下时，提示行改为显示它的标题
    fn page_hint(&self, visible_cards: usize) -> String {
        let state = self.store.state();
        if state.ui.focused < visible_cards {
            return PAGE_HINT.to_string();
        }
        match state.catalog.options().get(state.ui.focused) {
            Some(option) => format!(
                "{FOCUS_PREFIX}{}  {HIDDEN_FOCUS_HINT}",
                option.dialog_title()
            ),
            None => PAGE_HINT.to_string(),
        }
    }

    fn render_header(&self, frame: &mut Frame, header: Rect, banner: Rect) {
        let title = Line::from(Span::styled(
            PAGE_TITLE,
            Style::default()
                .fg(self.theme.header_fg)
                .add_modifier(Modifier::BOLD),
        ));
        let tagline = Line::from(Span::styled(
            PAGE_TAGLINE,
            Style::default().fg(self.theme.muted_fg),
        ));
        frame.render_widget(
            Paragraph::new(vec![title, tagline]).alignment(Alignment::Center),
            header,
        );

        let banner_style = Style::default()
            .bg(self.theme.banner_bg)
            .fg(self.theme.banner_fg);
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(Span::styled(
                    BANNER_TITLE,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(BANNER_BODY),
            ])
            .alignment(Alignment::Center)
            .style(banner_style),
            banner,
        );
    }

    fn render_benefits(&self, frame: &mut Frame, title: Rect, row: Rect) {
        frame.render_widget(section_title(BENEFITS_TITLE, self.theme.accent_fg), title);

        let benefits = self.store.state().catalog.benefits();
        if benefits.is_empty() {
            return;
        }

        let n = benefits.len() as u32;
        let columns = Layout::horizontal((0..n).map(|_| Constraint::Ratio(1, n))).split(row);
        for (benefit, column) in benefits.iter().zip(columns.iter()) {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(self.theme.inactive_border));
            let body = Paragraph::new(vec![
                Line::from(Span::styled(
                    benefit.title.as_str(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    benefit.description.as_str(),
                    Style::default().fg(self.theme.muted_fg),
                )),
            ])
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
            frame.render_widget(body, *column);
        }
    }

    fn render_cards(&self, frame: &mut Frame, title: Rect, row: Rect) -> Vec<Rect> {
        frame.render_widget(section_title(OPTIONS_TITLE, self.theme.accent_fg), title);

        let state = self.store.state();
        let rects = card_rects(row, state.catalog.len());
        for ((id, option), rect) in state.catalog.iter().zip(rects.iter()) {
            let focused = state.ui.focused == id.index();
            frame.render_widget(self.option_card(option, focused), *rect);
        }
        rects
    }

    fn option_card<'a>(&self, option: &'a SponsorOption, focused: bool) -> Paragraph<'a> {
        let border_style = if focused {
            Style::default()
                .fg(self.theme.focus_border)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.theme.inactive_border)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if focused {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(border_style);

        Paragraph::new(vec![
            Line::from(Span::styled(
                option.display_text.as_str(),
                Style::default()
                    .fg(self.theme.price_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                option.label.as_str(),
                Style::default().fg(self.theme.muted_fg),
            )),
        ])
        .alignment(Alignment::Center)
        .block(block)
    }

    fn render_thanks(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                THANKS_TITLE,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                THANKS_BODY,
                Style::default().fg(self.theme.muted_fg),
            )),
            Line::from(Span::styled(
                THANKS_STARS,
                Style::default().fg(self.theme.accent_fg),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
    }

    fn render_dialog(&self, frame: &mut Frame, area: Rect, layout: &mut PageLayout) {
        let Some(option) = self.store.current_view().selected else {
            return;
        };
        let code = self.assets.get(&option.image_ref);
        let image_rows = match code {
            Some(PaymentCode::Ready(image)) => image.cell_rows(),
            _ => 1,
        };

        let dialog_area = dialog_rect(area, image_rows);
        if dialog_area.width < CLOSE_BUTTON_WIDTH + 2 || dialog_area.height < 3 {
            return;
        }
        layout.dialog = Some(dialog_area);

        frame.render_widget(Clear, dialog_area);
        let base_style = Style::default()
            .bg(self.theme.dialog_bg)
            .fg(self.theme.dialog_fg);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(self.theme.dialog_border))
            .style(base_style);
        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let muted = Style::default().fg(self.theme.muted_fg);
        let mut lines = vec![
            Line::from(Span::styled(
                option.dialog_title(),
                Style::default()
                    .fg(self.theme.header_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(DIALOG_SUBTITLE, muted)),
            Line::raw(""),
        ];
        match code {
            Some(PaymentCode::Ready(image)) => {
                lines.extend(half_block_lines(image, self.theme.dialog_bg));
            }
            Some(PaymentCode::Missing) => lines.push(Line::from(Span::styled(
                format!("收款码图片缺失：{}", option.image_ref),
                Style::default().fg(self.theme.accent_fg),
            ))),
            Some(PaymentCode::DecodeFailed) => lines.push(Line::from(Span::styled(
                format!("收款码图片无法解码：{}", option.image_ref),
                Style::default().fg(self.theme.accent_fg),
            ))),
            None => lines.push(Line::from(Span::styled("加载中…", muted))),
        }
        lines.push(Line::raw(""));
        lines.push(Line::from(DIALOG_SCAN_HINT));
        lines.push(Line::from(Span::styled(DIALOG_CONTACT_HINT, muted)));
        lines.push(Line::raw(""));

        let button_row = lines.len() as u16;
        lines.push(Line::from(Span::styled(
            CLOSE_BUTTON,
            Style::default()
                .fg(self.theme.focus_border)
                .add_modifier(Modifier::BOLD),
        )));

        frame.render_widget(
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(base_style),
            inner,
        );

        if button_row < inner.height {
            let width = CLOSE_BUTTON_WIDTH.min(inner.width);
            layout.close_button = Some(Rect::new(
                inner.x + (inner.width - width) / 2,
                inner.y + button_row,
                width,
                1,
            ));
        }
    }
}

fn section_title(text: &str, accent: Color) -> Paragraph<'_> {
    Paragraph::new(Line::from(Span::styled(
        text,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
}

/// 每个字符单元画上下两个像素：前景色是上半，背景色是下半
fn half_block_lines(image: &PixelImage, fill: Color) -> Vec<Line<'static>> {
    (0..image.cell_rows() as u32)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..image.width)
                .map(|x| {
                    let top = image.pixel(x, row * 2).map(rgb).unwrap_or(fill);
                    let bottom = image.pixel(x, row * 2 + 1).map(rgb).unwrap_or(fill);
                    Span::styled("▀", Style::default().fg(top).bg(bottom))
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn rgb([r, g, b]: [u8; 3]) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
#[path = "../../../tests/unit/app/page/render.rs"]
mod tests;
