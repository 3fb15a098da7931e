use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::metrics::Metrics;
use crate::session::state::SessionPhase;
use crate::ui::theme::Theme;

/// Header line with the countdown and live metrics.
pub struct StatsBar<'a> {
    phase: SessionPhase,
    time_remaining: u32,
    duration_secs: u32,
    metrics: Metrics,
    theme: &'a Theme,
}

impl<'a> StatsBar<'a> {
    pub fn new(
        phase: SessionPhase,
        time_remaining: u32,
        duration_secs: u32,
        metrics: Metrics,
        theme: &'a Theme,
    ) -> Self {
        Self {
            phase,
            time_remaining,
            duration_secs,
            metrics,
            theme,
        }
    }
}

fn phase_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Idle => "start typing",
        SessionPhase::Running => "running",
        SessionPhase::Finished => "finished",
    }
}

impl Widget for StatsBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let label = Style::default().fg(colors.text_pending);
        let value = Style::default().fg(colors.fg).add_modifier(Modifier::BOLD);

        let time_style = if self.phase == SessionPhase::Running && self.time_remaining <= 5 {
            Style::default().fg(colors.warning).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
        };

        let line = Line::from(vec![
            Span::styled(" Time ", label),
            Span::styled(format!("{}s", self.time_remaining), time_style),
            Span::styled(format!(" / {}s", self.duration_secs), label),
            Span::styled("   WPM ", label),
            Span::styled(self.metrics.wpm.to_string(), value),
            Span::styled("   Accuracy ", label),
            Span::styled(
                format!("{}%", self.metrics.accuracy),
                Style::default()
                    .fg(self.theme.accuracy_color(self.metrics.accuracy))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("   Errors ", label),
            Span::styled(self.metrics.errors.to_string(), value),
        ]);

        let block = Block::bordered()
            .title(" typemaster ")
            .title_bottom(Line::from(format!(" {} ", phase_label(self.phase))).right_aligned())
            .border_style(Style::default().fg(colors.border))
            .style(Style::default().bg(colors.bg));

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(bar: StatsBar<'_>, width: u16) -> String {
        let area = Rect::new(0, 0, width, 3);
        let mut buf = Buffer::empty(area);
        bar.render(area, &mut buf);
        (0..width).map(|x| buf[(x, 1)].symbol().to_string()).collect()
    }

    #[test]
    fn test_shows_time_and_metrics() {
        let theme = Theme::default();
        let metrics = Metrics {
            wpm: 42,
            accuracy: 97,
            errors: 3,
            correct_keystrokes: 100,
            total_keystrokes: 103,
        };
        let text = render_to_string(
            StatsBar::new(SessionPhase::Running, 12, 30, metrics, &theme),
            80,
        );
        assert!(text.contains("12s / 30s"));
        assert!(text.contains("WPM 42"));
        assert!(text.contains("Accuracy 97%"));
        assert!(text.contains("Errors 3"));
    }
}
