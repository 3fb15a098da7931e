use ratatui::style::Color;

/// Fixed colour palette shared by every widget.
#[derive(Clone, Copy, Debug)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub text_correct: Color,
    pub text_incorrect: Color,
    pub text_incorrect_bg: Color,
    pub text_pending: Color,
    pub text_cursor_bg: Color,
    pub text_cursor_fg: Color,
    pub accent: Color,
    pub border: Color,
    pub border_focused: Color,
    pub error: Color,
    pub warning: Color,
    pub success: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: Color::Rgb(0x1e, 0x1e, 0x2e),
            fg: Color::Rgb(0xcd, 0xd6, 0xf4),
            text_correct: Color::Rgb(0xa6, 0xe3, 0xa1),
            text_incorrect: Color::Rgb(0xf3, 0x8b, 0xa8),
            text_incorrect_bg: Color::Rgb(0x45, 0x27, 0x3a),
            text_pending: Color::Rgb(0x6c, 0x70, 0x86),
            text_cursor_bg: Color::Rgb(0xf5, 0xe0, 0xdc),
            text_cursor_fg: Color::Rgb(0x1e, 0x1e, 0x2e),
            accent: Color::Rgb(0x89, 0xb4, 0xfa),
            border: Color::Rgb(0x45, 0x47, 0x5a),
            border_focused: Color::Rgb(0x89, 0xb4, 0xfa),
            error: Color::Rgb(0xf3, 0x8b, 0xa8),
            warning: Color::Rgb(0xf9, 0xe2, 0xaf),
            success: Color::Rgb(0xa6, 0xe3, 0xa1),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Theme {
    pub colors: ThemeColors,
}

impl Theme {
    /// Colour for an accuracy percentage.
    pub fn accuracy_color(&self, accuracy: u32) -> Color {
        if accuracy >= 95 {
            self.colors.success
        } else if accuracy >= 85 {
            self.colors.warning
        } else {
            self.colors.error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_color_bands() {
        let theme = Theme::default();
        assert_eq!(theme.accuracy_color(100), theme.colors.success);
        assert_eq!(theme.accuracy_color(90), theme.colors.warning);
        assert_eq!(theme.accuracy_color(57), theme.colors.error);
    }
}
