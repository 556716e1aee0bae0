//! QuoteCard Widget
//!
//! The bordered card in the middle of the screen: a title, a quote-mark
//! ornament, and the revealed text wrapped and centered below it. The
//! card renders whatever prefix the reveal has produced so far, so the
//! typewriter effect falls out of redrawing every frame.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, BorderType, Borders, Widget};
use textwrap::wrap;

use crate::theme;

/// Ornament row above the quote text.
const QUOTE_MARK: &str = "\u{201C} \u{201D}";

/// A bordered card showing the (partially) revealed quote.
pub struct QuoteCard<'a> {
    title: &'a str,
    subtitle: &'a str,
    text: &'a str,
    sentinel: bool,
}

impl<'a> QuoteCard<'a> {
    /// Build a card for the given revealed text.
    pub fn new(title: &'a str, subtitle: &'a str, text: &'a str) -> Self {
        Self {
            title,
            subtitle,
            text,
            sentinel: false,
        }
    }

    /// Style the text as a fallback message rather than a real quote.
    pub fn sentinel(mut self, sentinel: bool) -> Self {
        self.sentinel = sentinel;
        self
    }
}

impl Widget for QuoteCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::CARD_BORDER))
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(Style::default().fg(theme::BOARD_ACCENT));

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 8 || inner.height < 4 {
            return;
        }

        // Subtitle just under the top border.
        let sub_x = inner.x + (inner.width.saturating_sub(self.subtitle.len() as u16)) / 2;
        buf.set_string(
            sub_x,
            inner.y,
            self.subtitle,
            Style::default().fg(theme::DIM_GRAY),
        );

        // Ornament row.
        let mark_x = inner.x + (inner.width.saturating_sub(QUOTE_MARK.chars().count() as u16)) / 2;
        buf.set_string(
            mark_x,
            inner.y + 2,
            QUOTE_MARK,
            Style::default().fg(theme::DIM_GRAY),
        );

        // Wrapped, centered quote text.
        let text_width = inner.width.saturating_sub(4) as usize;
        let text_top = inner.y + 4;
        let text_height = (inner.y + inner.height).saturating_sub(text_top) as usize;

        let style = if self.sentinel {
            Style::default().fg(theme::ERROR_RED)
        } else {
            Style::default().fg(theme::BOARD_ACCENT)
        };

        for (i, line) in wrap(self.text, text_width.max(1))
            .iter()
            .take(text_height)
            .enumerate()
        {
            let line_width = line.chars().count() as u16;
            let x = inner.x + 2 + (text_width as u16).saturating_sub(line_width) / 2;
            buf.set_string(x, text_top + i as u16, line.as_ref(), style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_buffer(card: QuoteCard, width: u16, height: u16) -> Buffer {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        card.render(area, &mut buf);
        buf
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in 0..area.height {
            for x in 0..area.width {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn renders_title_and_quote() {
        let card = QuoteCard::new("Kanye West Quotes", "Wisdom from Ye", "I am a creative");
        let text = buffer_text(&render_to_buffer(card, 50, 12));
        assert!(text.contains("Kanye West Quotes"));
        assert!(text.contains("Wisdom from Ye"));
        assert!(text.contains("I am a creative"));
    }

    #[test]
    fn long_quotes_wrap_instead_of_clipping() {
        let long = "word ".repeat(30);
        let card = QuoteCard::new("T", "S", &long);
        let text = buffer_text(&render_to_buffer(card, 30, 16));
        // Every wrapped line fits inside the card.
        assert!(text.lines().all(|l| l.chars().count() <= 30));
        assert!(text.contains("word"));
    }

    #[test]
    fn tiny_areas_render_only_the_frame() {
        let card = QuoteCard::new("T", "S", "quote");
        // Must not panic on degenerate sizes.
        let _ = render_to_buffer(card, 6, 3);
    }
}
