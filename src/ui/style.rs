//! Theming and color definitions.
//!
//! `Auto` keeps the terminal's own foreground and background and only uses
//! named ANSI colors, so it follows whatever palette the user has set.

use ratatui::style::{Color, Modifier, Style};

use crate::config::ThemeMode;

/// Styles consumed by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub card_title: Style,
    pub card_description: Style,
    pub card_border: Style,
    pub card_border_selected: Style,
    pub button: Style,
    pub button_selected: Style,
    pub image_placeholder: Style,
    pub search_text: Style,
    pub search_placeholder: Style,
    pub search_icon: Style,
    pub search_border: Style,
    pub search_border_focused: Style,
    pub dialog: Style,
    pub dialog_title: Style,
    pub status_bar: Style,
    pub section: Style,
    pub dim: Style,
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::auto(),
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }

    fn auto() -> Self {
        Self {
            card_title: Style::default().add_modifier(Modifier::BOLD),
            card_description: Style::default(),
            card_border: Style::default().fg(Color::DarkGray),
            card_border_selected: Style::default().fg(Color::Yellow),
            button: Style::default().bg(Color::Blue).fg(Color::White),
            button_selected: Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            image_placeholder: Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            search_text: Style::default(),
            search_placeholder: Style::default().fg(Color::DarkGray),
            search_icon: Style::default().fg(Color::Gray),
            search_border: Style::default().fg(Color::Gray),
            search_border_focused: Style::default().fg(Color::Yellow),
            dialog: Style::default().bg(Color::Black).fg(Color::White),
            dialog_title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            section: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Indexed(245)),
        }
    }

    fn dark() -> Self {
        Self {
            card_title: Style::default()
                .fg(Color::Indexed(117))
                .add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(Color::Indexed(252)),
            card_border: Style::default().fg(Color::Indexed(240)),
            button: Style::default().bg(Color::Indexed(25)).fg(Color::White),
            dialog: Style::default().bg(Color::Indexed(235)).fg(Color::Indexed(252)),
            ..Self::auto()
        }
    }

    fn light() -> Self {
        Self {
            card_title: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            card_description: Style::default().fg(Color::Indexed(238)),
            card_border: Style::default().fg(Color::Indexed(250)),
            card_border_selected: Style::default().fg(Color::Indexed(130)),
            button: Style::default().bg(Color::Indexed(31)).fg(Color::White),
            button_selected: Style::default()
                .bg(Color::Indexed(24))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            image_placeholder: Style::default()
                .fg(Color::Indexed(245))
                .add_modifier(Modifier::ITALIC),
            search_placeholder: Style::default().fg(Color::Indexed(245)),
            search_icon: Style::default().fg(Color::Indexed(242)),
            search_border: Style::default().fg(Color::Indexed(245)),
            search_border_focused: Style::default().fg(Color::Indexed(130)),
            dialog: Style::default().bg(Color::Indexed(255)).fg(Color::Indexed(235)),
            dialog_title: Style::default()
                .fg(Color::Indexed(24))
                .add_modifier(Modifier::BOLD),
            status_bar: Style::default().bg(Color::Indexed(252)).fg(Color::Indexed(235)),
            section: Style::default()
                .fg(Color::Indexed(130))
                .add_modifier(Modifier::BOLD),
            dim: Style::default().fg(Color::Indexed(243)),
            ..Self::auto()
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::auto()
    }
}
