use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::session::result::ResultRecord;
use crate::store::summary;
use crate::ui::theme::Theme;

const TOP_RESULTS: usize = 5;

/// All-time best result followed by the top few.
pub struct PersonalBest<'a> {
    history: &'a [ResultRecord],
    theme: &'a Theme,
}

impl<'a> PersonalBest<'a> {
    pub fn new(history: &'a [ResultRecord], theme: &'a Theme) -> Self {
        Self { history, theme }
    }
}

impl Widget for PersonalBest<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(" Personal Best ")
            .border_style(Style::default().fg(colors.border));

        let Some(best) = summary::personal_best(self.history) else {
            Paragraph::new(" No completed tests yet")
                .style(Style::default().fg(colors.text_pending))
                .block(block)
                .render(area, buf);
            return;
        };

        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} WPM", best.wpm),
                    Style::default().fg(colors.success).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", best.date.format("%Y-%m-%d %H:%M")),
                    Style::default().fg(colors.text_pending),
                ),
            ]),
            Line::from(Span::styled(
                format!(" {} tests recorded", self.history.len()),
                Style::default().fg(colors.text_pending),
            )),
            Line::from(""),
        ];

        for (rank, record) in summary::top(self.history, TOP_RESULTS).iter().enumerate() {
            lines.push(Line::from(vec![
                Span::styled(format!(" {}. ", rank + 1), Style::default().fg(colors.accent)),
                Span::styled(format!("{:>3} WPM", record.wpm), Style::default().fg(colors.fg)),
                Span::styled(
                    format!("  {}", record.date.format("%Y-%m-%d")),
                    Style::default().fg(colors.text_pending),
                ),
            ]));
        }

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_renders_best_first() {
        let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        let history = vec![ResultRecord::new(date, 40), ResultRecord::new(date, 75)];
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 10);
        let mut buf = Buffer::empty(area);
        PersonalBest::new(&history, &theme).render(area, &mut buf);

        let row = |y: u16| -> String { (0..40).map(|x| buf[(x, y)].symbol().to_string()).collect() };
        assert!(row(1).contains("75 WPM"));
        assert!(row(1).contains("2024-06-01 09:30"));
        assert!(row(2).contains("2 tests recorded"));
        assert!(row(4).contains("1.  75 WPM"));
        assert!(row(5).contains("2.  40 WPM"));
    }
}
