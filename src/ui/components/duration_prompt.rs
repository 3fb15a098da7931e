use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::ui::line_input::LineInput;
use crate::ui::theme::Theme;

/// Popup for entering a custom test duration.
pub struct DurationPrompt<'a> {
    input: &'a LineInput,
    error: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> DurationPrompt<'a> {
    pub fn new(input: &'a LineInput, error: Option<&'a str>, theme: &'a Theme) -> Self {
        Self {
            input,
            error,
            theme,
        }
    }
}

impl Widget for DurationPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Custom duration ")
            .border_style(Style::default().fg(colors.border_focused))
            .style(Style::default().bg(colors.bg));

        let value = self.input.value();
        let split = value
            .char_indices()
            .nth(self.input.cursor())
            .map_or(value.len(), |(i, _)| i);
        let (before, after) = value.split_at(split);
        let mut after_chars = after.chars();
        let cursor_ch = after_chars.next().unwrap_or(' ');

        let mut lines = vec![
            Line::from(vec![
                Span::styled(" Seconds: ", Style::default().fg(colors.text_pending)),
                Span::styled(before.to_string(), Style::default().fg(colors.fg)),
                Span::styled(
                    cursor_ch.to_string(),
                    Style::default()
                        .fg(colors.text_cursor_fg)
                        .bg(colors.text_cursor_bg),
                ),
                Span::styled(after_chars.as_str().to_string(), Style::default().fg(colors.fg)),
            ]),
            Line::from(""),
        ];
        match self.error {
            Some(err) => lines.push(Line::from(Span::styled(
                format!(" {err}"),
                Style::default().fg(colors.error).add_modifier(Modifier::BOLD),
            ))),
            None => lines.push(Line::from(Span::styled(
                " [Enter] Apply  [Esc] Cancel",
                Style::default().fg(colors.accent),
            ))),
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
