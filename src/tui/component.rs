use ratatui::Frame;
use ratatui::layout::Rect;

/// A reusable UI component.
///
/// Components receive their data as props (struct fields) and render into a
/// `Frame` within a given `Rect`. `render` takes `&mut self` to line up
/// with Ratatui's `StatefulWidget` pattern, even for components that keep
/// no internal state.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
