//! Prompt line widget.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// The whole overlay: prompt plus query on the first row, startup error (if
/// any) from the second row down.
pub struct PromptView<'a> {
    prompt: &'a str,
    query: &'a str,
    cursor_column: usize,
    marked: bool,
    show_prompt: bool,
    error: Option<String>,
}

impl<'a> PromptView<'a> {
    /// Prompt glyph, query, and cursor column within the query.
    pub fn new(prompt: &'a str, query: &'a str, cursor_column: usize) -> Self {
        Self {
            prompt,
            query,
            cursor_column,
            marked: false,
            show_prompt: true,
            error: None,
        }
    }

    /// Draw the query as a selection (restored, not yet edited).
    pub fn marked(mut self, marked: bool) -> Self {
        self.marked = marked;
        self
    }

    /// Hide the prompt row (no target windows).
    pub fn show_prompt(mut self, show: bool) -> Self {
        self.show_prompt = show;
        self
    }

    /// Startup error shown below the prompt row.
    pub fn error(mut self, error: Option<String>) -> Self {
        self.error = error;
        self
    }

    /// Terminal cursor position inside `area`, if the prompt is shown.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        if !self.show_prompt || area.width == 0 || area.height == 0 {
            return None;
        }
        let column = self.prompt.width() + self.cursor_column;
        let max_x = area.width.saturating_sub(1) as usize;
        Some(Position::new(area.x + column.min(max_x) as u16, area.y))
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.show_prompt {
            let query_style = if self.marked {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(vec![
                Span::raw(self.prompt),
                Span::styled(self.query, query_style),
            ]));
        } else {
            lines.push(Line::default());
        }

        if let Some(error) = &self.error {
            lines.extend(error.lines().map(|l| Line::from(l.to_string())));
        }

        lines
    }
}

impl Widget for PromptView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines()).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn buffer_to_string(buffer: &Buffer) -> String {
        let area = buffer.area();
        let mut lines = Vec::new();

        for y in area.top()..area.bottom() {
            let mut line = String::new();
            for x in area.left()..area.right() {
                line.push_str(buffer[(x, y)].symbol());
            }
            let trimmed = line.trim_end();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }

        lines.join("\n")
    }

    fn render(view: PromptView<'_>, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| frame.render_widget(view, frame.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn renders_text_prompt_and_query() {
        let buffer = render(PromptView::new("=> ", "Hello", 5), 20, 1);
        insta::assert_snapshot!(buffer_to_string(&buffer), @"=> Hello");
    }

    #[test]
    fn renders_regex_prompt() {
        let buffer = render(PromptView::new("~> ", "fo+", 3), 20, 1);
        insta::assert_snapshot!(buffer_to_string(&buffer), @"~> fo+");
    }

    #[test]
    fn marked_query_is_reversed() {
        let buffer = render(PromptView::new("=> ", "old", 3).marked(true), 20, 1);
        assert!(buffer[(3, 0)].modifier.contains(Modifier::REVERSED));
        assert!(!buffer[(0, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn unmarked_query_is_plain() {
        let buffer = render(PromptView::new("=> ", "new", 3), 20, 1);
        assert!(!buffer[(3, 0)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn error_only_hides_prompt_and_shows_error_below() {
        let view = PromptView::new("=> ", "", 0)
            .show_prompt(false)
            .error(Some(
                "Error: Could not find the window id provided.".to_string(),
            ));
        let buffer = render(view, 60, 3);

        assert_eq!(buffer[(0, 0)].symbol(), " ");
        insta::assert_snapshot!(
            buffer_to_string(&buffer),
            @"Error: Could not find the window id provided."
        );
    }

    #[test]
    fn cursor_follows_query_cursor() {
        let view = PromptView::new("=> ", "abc", 2);
        assert_eq!(
            view.cursor_position(Rect::new(0, 0, 20, 1)),
            Some(Position::new(5, 0))
        );
    }

    #[test]
    fn cursor_is_clamped_to_area() {
        let view = PromptView::new("=> ", "abcdefgh", 8);
        assert_eq!(
            view.cursor_position(Rect::new(0, 0, 6, 1)),
            Some(Position::new(5, 0))
        );
    }

    #[test]
    fn no_cursor_without_prompt() {
        let view = PromptView::new("=> ", "", 0).show_prompt(false);
        assert_eq!(view.cursor_position(Rect::new(0, 0, 20, 1)), None);
    }
}
