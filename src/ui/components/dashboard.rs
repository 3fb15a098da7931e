use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::session::metrics::Metrics;
use crate::ui::theme::Theme;

/// Results of the test that just finished.
pub struct Dashboard<'a> {
    metrics: Metrics,
    duration_secs: u32,
    is_personal_best: bool,
    theme: &'a Theme,
}

impl<'a> Dashboard<'a> {
    pub fn new(
        metrics: Metrics,
        duration_secs: u32,
        is_personal_best: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            metrics,
            duration_secs,
            is_personal_best,
            theme,
        }
    }
}

impl Widget for Dashboard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        Clear.render(area, buf);

        let block = Block::bordered()
            .title(" Test Complete ")
            .border_style(Style::default().fg(colors.accent))
            .style(Style::default().bg(colors.bg));
        let inner = block.inner(area);
        block.render(area, buf);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(inner);

        let mut title_spans = vec![Span::styled(
            "Results",
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        )];
        if self.is_personal_best {
            title_spans.push(Span::styled(
                "  New personal best!",
                Style::default().fg(colors.success).add_modifier(Modifier::BOLD),
            ));
        }
        Paragraph::new(Line::from(title_spans))
            .alignment(Alignment::Center)
            .render(layout[0], buf);

        let label = Style::default().fg(colors.fg);
        let detail = Style::default().fg(colors.text_pending);
        let m = &self.metrics;

        let rows = [
            Line::from(vec![
                Span::styled("  Speed:      ", label),
                Span::styled(
                    format!("{} WPM", m.wpm),
                    Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  ({}s test)", self.duration_secs), detail),
            ]),
            Line::from(vec![
                Span::styled("  Accuracy:   ", label),
                Span::styled(
                    format!("{}%", m.accuracy),
                    Style::default()
                        .fg(self.theme.accuracy_color(m.accuracy))
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("  Keystrokes: ", label),
                Span::styled(m.total_keystrokes.to_string(), label),
                Span::styled(format!("  ({} correct)", m.correct_keystrokes), detail),
            ]),
            Line::from(vec![
                Span::styled("  Errors:     ", label),
                Span::styled(
                    m.errors.to_string(),
                    Style::default().fg(if m.errors == 0 {
                        colors.success
                    } else {
                        colors.error
                    }),
                ),
            ]),
        ];
        for (row, slot) in rows.into_iter().zip(&layout[1..5]) {
            Paragraph::new(row).render(*slot, buf);
        }

        Paragraph::new(Line::from(vec![
            Span::styled("  [Esc] Restart  ", Style::default().fg(colors.accent)),
            Span::styled("[Tab] Duration  ", Style::default().fg(colors.accent)),
            Span::styled("[Ctrl+Q] Quit", Style::default().fg(colors.accent)),
        ]))
        .render(layout[6], buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered_text(dashboard: Dashboard<'_>) -> String {
        let area = Rect::new(0, 0, 50, 12);
        let mut buf = Buffer::empty(area);
        dashboard.render(area, &mut buf);
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
    fn test_shows_result_details() {
        let theme = Theme::default();
        let metrics = Metrics {
            wpm: 64,
            accuracy: 93,
            errors: 7,
            correct_keystrokes: 320,
            total_keystrokes: 327,
        };
        let text = rendered_text(Dashboard::new(metrics, 60, true, &theme));
        assert!(text.contains("64 WPM"));
        assert!(text.contains("93%"));
        assert!(text.contains("327"));
        assert!(text.contains("(320 correct)"));
        assert!(text.contains("New personal best!"));
    }

    #[test]
    fn test_no_best_banner_otherwise() {
        let theme = Theme::default();
        let text = rendered_text(Dashboard::new(Metrics::default(), 30, false, &theme));
        assert!(!text.contains("personal best"));
    }
}
