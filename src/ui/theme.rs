//! Visual theme and color palette

use ratatui::style::{Color, Modifier, Style};

/// Dark handset palette, matching the prop's original styling.
pub struct Theme {
    // Accent colors
    pub phone_blue: Color,
    pub phone_green: Color,

    // Surfaces
    pub bg: Color,
    pub surface: Color,
    pub bubble_received: Color,

    // Status colors
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // UI element colors
    pub border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub selection: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            phone_blue: Color::Rgb(30, 136, 229),  // #1E88E5
            phone_green: Color::Rgb(0, 168, 132),  // #00A884
            bg: Color::Rgb(18, 18, 18),            // #121212
            surface: Color::Rgb(30, 30, 30),       // #1E1E1E
            bubble_received: Color::Rgb(45, 45, 45), // #2D2D2D

            success: Color::Rgb(76, 175, 80),  // #4CAF50
            warning: Color::Rgb(255, 152, 0),  // #FF9800
            danger: Color::Rgb(244, 67, 54),   // #F44336

            border: Color::Rgb(55, 55, 55),          // #373737
            text_primary: Color::Rgb(250, 250, 250), // #FAFAFA
            text_secondary: Color::Rgb(189, 189, 189), // #BDBDBD
            text_muted: Color::Rgb(117, 117, 117),   // #757575
            selection: Color::Rgb(40, 55, 71),       // #283747
        }
    }
}

impl Theme {
    /// Get default text style
    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Get secondary text style
    pub fn text_secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Get muted text style
    pub fn text_muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Get screen title style
    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.phone_blue)
            .add_modifier(Modifier::BOLD)
    }

    /// Large clock style for the lock and home screens
    pub fn clock(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get success style
    pub fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Get warning style
    pub fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    /// Get danger style
    pub fn danger(&self) -> Style {
        Style::default()
            .fg(self.danger)
            .add_modifier(Modifier::BOLD)
    }

    /// Get border style
    pub fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    /// Get focused border style
    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.phone_blue)
    }

    /// Get list/grid item style
    pub fn menu_item(&self, selected: bool) -> Style {
        if selected {
            Style::default()
                .bg(self.selection)
                .fg(self.text_primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text_primary)
        }
    }

    /// Unread indicator style
    pub fn unread(&self) -> Style {
        Style::default().fg(self.phone_blue)
    }

    /// Get PIN dot style
    pub fn pin_dot(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get PIN placeholder style
    pub fn pin_placeholder(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    /// Keypad cap style
    pub fn keycap(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.surface)
    }

    /// Outgoing message bubble
    pub fn bubble_sent(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.phone_blue)
    }

    /// Incoming message bubble
    pub fn bubble_incoming(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .bg(self.bubble_received)
    }
}
