//! # FileView Component
//!
//! The right pane: the visible window of the selected file, one row per
//! line with the number gutter rendered in its own style. An empty
//! [`PageView`] (directory selected, unreadable file) leaves the pane
//! blank.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::pager::PageView;
use crate::tui::component::Component;

/// Gutter style, distinct from body text.
const GUTTER_COLOR: Color = Color::DarkGray;

pub struct FileView<'a> {
    pub page: &'a PageView,
}

impl Component for FileView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .page
            .lines
            .iter()
            .map(|(number, text)| {
                Line::from(vec![
                    Span::styled(self.page.gutter(*number), Style::default().fg(GUTTER_COLOR)),
                    Span::raw(text.as_str()),
                ])
            })
            .collect();

        let paragraph = Paragraph::new(lines).block(Block::bordered());
        frame.render_widget(paragraph, area);
    }
}
