//! # EntryList Component
//!
//! The left pane: one row per directory entry. The row under the cursor is
//! rendered reversed; directory entries get the accent color, and the two
//! styles combine on a selected directory. Rows are never wrapped; clipping
//! at the pane edge is ratatui's concern.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, List, ListItem, ListState};

use crate::core::fs::{Entry, EntryKind};
use crate::tui::component::Component;

/// Accent color for directory entries.
const DIR_COLOR: Color = Color::Cyan;

pub struct EntryList<'a> {
    pub entries: &'a [Entry],
    pub selected: usize,
}

impl Component for EntryList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let style = if entry.kind == EntryKind::Directory {
                    Style::default().fg(DIR_COLOR)
                } else {
                    Style::default()
                };
                ListItem::new(entry.name.as_str()).style(style)
            })
            .collect();

        // Fresh state each frame keeps the render a pure function of the
        // props; List scrolls just enough to keep the cursor visible.
        let mut state = ListState::default();
        state.select(Some(self.selected));

        let list = List::new(items)
            .block(Block::bordered())
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        frame.render_stateful_widget(list, area, &mut state);
    }
}
