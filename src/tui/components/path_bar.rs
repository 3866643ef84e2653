//! # PathBar Component
//!
//! The header pane: a single bordered line showing the absolute browsing
//! directory. Purely presentational.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};
use std::path::Path;

use crate::tui::component::Component;

pub struct PathBar<'a> {
    pub cwd: &'a Path,
}

impl Component for PathBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph =
            Paragraph::new(self.cwd.display().to_string()).block(Block::bordered());
        frame.render_widget(paragraph, area);
    }
}
