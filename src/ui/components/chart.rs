use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Line;
use ratatui::widgets::{Axis, Block, Chart, Dataset, GraphType, Paragraph, Widget};

use crate::session::result::ResultRecord;
use crate::store::summary;
use crate::ui::theme::Theme;

/// WPM of every recorded test in order, with the running average as a flat line.
pub struct WpmChart<'a> {
    history: &'a [ResultRecord],
    theme: &'a Theme,
}

impl<'a> WpmChart<'a> {
    pub fn new(history: &'a [ResultRecord], theme: &'a Theme) -> Self {
        Self { history, theme }
    }
}

fn points(history: &[ResultRecord]) -> Vec<(f64, f64)> {
    history
        .iter()
        .enumerate()
        .map(|(i, r)| ((i + 1) as f64, f64::from(r.wpm)))
        .collect()
}

impl Widget for WpmChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let average = summary::average_wpm(self.history);
        let best = summary::best_wpm(self.history);

        let block = Block::bordered()
            .title(" Progress ")
            .title_bottom(Line::from(format!(" avg {average}  best {best} ")).right_aligned())
            .border_style(Style::default().fg(colors.border));

        if self.history.is_empty() {
            Paragraph::new(" No completed tests yet")
                .style(Style::default().fg(colors.text_pending))
                .block(block)
                .render(area, buf);
            return;
        }

        let data = points(self.history);
        let max_x = (data.len() as f64).max(2.0);
        let max_y = f64::from(best).max(10.0);
        let avg_line = [(1.0, f64::from(average)), (max_x, f64::from(average))];

        let datasets = vec![
            Dataset::default()
                .name("wpm")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.accent))
                .data(&data),
            Dataset::default()
                .name("avg")
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(colors.text_pending))
                .data(&avg_line),
        ];

        Chart::new(datasets)
            .block(block)
            .x_axis(
                Axis::default()
                    .title("Test #")
                    .style(Style::default().fg(colors.text_pending))
                    .bounds([1.0, max_x]),
            )
            .y_axis(
                Axis::default()
                    .title("WPM")
                    .style(Style::default().fg(colors.text_pending))
                    .bounds([0.0, max_y * 1.1])
                    .labels(["0".to_string(), format!("{:.0}", max_y * 1.1)]),
            )
            .render(area, buf);
    }
}
