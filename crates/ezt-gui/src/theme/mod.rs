//! Theme module for Eszip Studio.
//!
//! Spacing constants and the handful of custom widget styles the viewer
//! needs. Everything derives from the theme's extended palette so the
//! styles hold up if the base palette changes.

use iced::theme::Palette;
use iced::widget::{button, container, text_input};
use iced::{Border, Color, Shadow, Theme, Vector};

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, icon margins
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - section padding, major gaps
pub const SPACING_LG: f32 = 24.0;

/// Extra large spacing - page margins, large separations
pub const SPACING_XL: f32 = 32.0;

// =============================================================================
// BORDER RADIUS
// =============================================================================

/// Small radius - buttons, inputs, list rows
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - cards, the drop zone
pub const BORDER_RADIUS_MD: f32 = 6.0;

// =============================================================================
// COMPONENT SIZES
// =============================================================================

/// Width of the module list panel in the viewer.
pub const LIST_PANEL_WIDTH: f32 = 300.0;

/// Height of the header bar.
pub const HEADER_HEIGHT: f32 = 56.0;

// =============================================================================
// THEME
// =============================================================================

/// Build the application theme.
pub fn studio_theme() -> Theme {
    Theme::custom(
        "Eszip Studio".to_string(),
        Palette {
            primary: Color::from_rgb8(0x09, 0x69, 0xda),
            ..Palette::LIGHT
        },
    )
}

// =============================================================================
// CONTAINER STYLES
// =============================================================================

/// Header bar style - elevated with a bottom border.
pub fn header_bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Drop zone style; `active` renders the drag-hover/download highlight.
pub fn drop_zone(theme: &Theme, active: bool) -> container::Style {
    let palette = theme.extended_palette();
    let background = if active {
        palette.background.weak.color
    } else {
        palette.background.base.color
    };
    container::Style {
        background: Some(background.into()),
        border: Border {
            color: if active {
                palette.primary.base.color
            } else {
                palette.background.strong.color
            },
            width: 1.0,
            radius: BORDER_RADIUS_MD.into(),
        },
        ..Default::default()
    }
}

/// Module list panel style - right border separating it from the source pane.
pub fn list_panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(palette.background.base.color.into()),
        border: Border {
            color: palette.background.strong.color,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

// =============================================================================
// BUTTON STYLES
// =============================================================================

/// Primary button style - main actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered => palette.primary.strong.color,
        button::Status::Pressed => palette.primary.weak.color,
        _ => palette.primary.base.color,
    };

    button::Style {
        background: Some(background.into()),
        text_color: palette.primary.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color::from_rgba8(0, 0, 0, 0.15),
            offset: Vector::new(0.0, 1.0),
            blur_radius: 2.0,
        },
        ..Default::default()
    }
}

/// List row style - transparent, highlighted on hover and when selected.
pub fn list_row(theme: &Theme, status: button::Status, selected: bool) -> button::Style {
    let palette = theme.extended_palette();

    let background = if selected {
        Some(palette.primary.weak.color.into())
    } else {
        match status {
            button::Status::Hovered => Some(palette.background.weak.color.into()),
            _ => None,
        }
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

/// Ghost button style - borderless, for the search clear button.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            Some(palette.background.weak.color.into())
        }
        _ => None,
    };

    button::Style {
        background,
        text_color: palette.background.base.text,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

// =============================================================================
// TEXT INPUT STYLES
// =============================================================================

/// Default text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let palette = theme.extended_palette();

    let border_color = match status {
        text_input::Status::Focused { .. } => palette.primary.base.color,
        text_input::Status::Hovered => palette.background.strong.color,
        _ => palette.background.weak.color,
    };

    text_input::Style {
        background: palette.background.base.color.into(),
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            width: 1.0,
            color: border_color,
        },
        icon: palette.background.strong.color,
        placeholder: palette.background.strong.color,
        value: palette.background.base.text,
        selection: palette.primary.weak.color,
    }
}

/// Muted text color for secondary labels.
pub fn text_muted(theme: &Theme) -> Color {
    theme.extended_palette().secondary.base.color
}
