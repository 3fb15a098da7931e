use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

use crate::session::diff::{CharStatus, Diff};
use crate::ui::theme::{Theme, ThemeColors};

/// The passage, coloured by how each position compares to what was typed.
pub struct TypingArea<'a> {
    diff: &'a Diff,
    show_cursor: bool,
    theme: &'a Theme,
}

impl<'a> TypingArea<'a> {
    pub fn new(diff: &'a Diff, show_cursor: bool, theme: &'a Theme) -> Self {
        Self {
            diff,
            show_cursor,
            theme,
        }
    }
}

fn incorrect_style(colors: &ThemeColors) -> Style {
    Style::default()
        .fg(colors.text_incorrect)
        .bg(colors.text_incorrect_bg)
        .add_modifier(Modifier::UNDERLINED)
}

/// One span per passage character, then one per overflow character.
fn styled_chars(diff: &Diff, show_cursor: bool, colors: &ThemeColors) -> Vec<Span<'static>> {
    let cursor = diff.scored_len();
    let mut spans: Vec<Span<'static>> = diff
        .chars
        .iter()
        .enumerate()
        .map(|(idx, dc)| {
            let style = match dc.status {
                CharStatus::Correct => Style::default().fg(colors.text_correct),
                CharStatus::Incorrect => incorrect_style(colors),
                CharStatus::Untyped if show_cursor && idx == cursor => Style::default()
                    .fg(colors.text_cursor_fg)
                    .bg(colors.text_cursor_bg),
                CharStatus::Untyped => Style::default().fg(colors.text_pending),
            };
            Span::styled(dc.expected.to_string(), style)
        })
        .collect();

    spans.extend(
        diff.overflow
            .iter()
            .map(|ch| Span::styled(ch.to_string(), incorrect_style(colors))),
    );
    spans
}

impl Widget for TypingArea<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let spans = styled_chars(self.diff, self.show_cursor, colors);

        let block = Block::bordered()
            .title(" Passage ")
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg));

        Paragraph::new(Line::from(spans))
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::diff::diff;

    fn build(passage: &str, typed: &str, show_cursor: bool) -> (Vec<Span<'static>>, ThemeColors) {
        let p: Vec<char> = passage.chars().collect();
        let t: Vec<char> = typed.chars().collect();
        let colors = ThemeColors::default();
        (styled_chars(&diff(&p, &t), show_cursor, &colors), colors)
    }

    #[test]
    fn test_spans_follow_classification() {
        let (spans, colors) = build("cat", "cx", true);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].style.fg, Some(colors.text_correct));
        assert_eq!(spans[1].style.fg, Some(colors.text_incorrect));
        // Incorrect positions still show the expected character
        assert_eq!(spans[1].content, "a");
        assert_eq!(spans[2].style.bg, Some(colors.text_cursor_bg));
    }

    #[test]
    fn test_no_cursor_when_hidden() {
        let (spans, colors) = build("cat", "", false);
        assert!(spans.iter().all(|s| s.style.fg == Some(colors.text_pending)));
    }

    #[test]
    fn test_overflow_is_appended_as_errors() {
        let (spans, colors) = build("hi", "hi!!", true);
        assert_eq!(spans.len(), 4);
        assert_eq!(spans[2].content, "!");
        assert_eq!(spans[3].style.fg, Some(colors.text_incorrect));
    }

    #[test]
    fn test_render_draws_passage_text() {
        let p: Vec<char> = "hello".chars().collect();
        let d = diff(&p, &[]);
        let theme = Theme::default();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        TypingArea::new(&d, true, &theme).render(area, &mut buf);

        let row: String = (1..6).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "hello");
    }
}
