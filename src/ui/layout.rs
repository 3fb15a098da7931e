use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals at least this wide put the history panels beside the passage.
const SIDE_PANEL_MIN_WIDTH: u16 = 100;

pub struct AppLayout {
    pub header: Rect,
    pub main: Rect,
    pub panels: Option<Rect>,
    pub footer: Rect,
}

impl AppLayout {
    pub fn new(area: Rect, footer_height: u16, show_panels: bool) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(6),
                Constraint::Length(footer_height),
            ])
            .split(area);

        let (main, panels) = if !show_panels {
            (vertical[1], None)
        } else if area.width >= SIDE_PANEL_MIN_WIDTH {
            let horizontal = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(vertical[1]);
            (horizontal[0], Some(horizontal[1]))
        } else {
            let stacked = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(6), Constraint::Percentage(50)])
                .split(vertical[1]);
            (stacked[0], Some(stacked[1]))
        };

        Self {
            header: vertical[0],
            main,
            panels,
            footer: vertical[2],
        }
    }
}

/// Greedily pack key hints into as few lines as fit `width`.
pub fn pack_hint_lines(hints: &[&str], width: usize) -> Vec<String> {
    if width == 0 || hints.is_empty() {
        return Vec::new();
    }

    let mut out: Vec<String> = Vec::new();
    let mut current = String::new();

    for hint in hints.iter().filter(|h| !h.is_empty()) {
        if current.is_empty() {
            current = format!(" {hint}");
            continue;
        }
        if current.chars().count() + 2 + hint.chars().count() <= width {
            current.push_str("  ");
            current.push_str(hint);
        } else {
            out.push(std::mem::take(&mut current));
            current = format!(" {hint}");
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    out
}

/// A `width` x `height` rect centred in `area`, shrunk to fit.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let left = area.x.saturating_add((area.width - w) / 2);
    let top = area.y.saturating_add((area.height - h) / 2);
    Rect::new(left, top, w, h)
}
