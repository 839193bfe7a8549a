use iced::widget::{button, container, text, text_input};
use iced::{Border, Color, Font, Shadow, Theme};

/// Window background (#101820)
pub const BACKGROUND: Color = Color {
    r: 0.063,
    g: 0.094,
    b: 0.125,
    a: 1.0,
};

/// Input field surface (#1E2A38)
const SURFACE: Color = Color {
    r: 0.118,
    g: 0.165,
    b: 0.220,
    a: 1.0,
};

/// Light blue accent (#64B5F6)
pub const ACCENT: Color = Color {
    r: 0.392,
    g: 0.710,
    b: 0.965,
    a: 1.0,
};

/// Text color (#E0E0E0)
pub const TEXT_PRIMARY: Color = Color {
    r: 0.878,
    g: 0.878,
    b: 0.878,
    a: 1.0,
};

const TEXT_SECONDARY: Color = Color {
    r: 0.5,
    g: 0.5,
    b: 0.5,
    a: 1.0,
};

pub const SERIF: Font = Font {
    family: iced::font::Family::Serif,
    ..Font::DEFAULT
};

pub const BOLD_SERIF: Font = Font {
    family: iced::font::Family::Serif,
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

pub const BOLD: Font = Font {
    weight: iced::font::Weight::Bold,
    ..Font::DEFAULT
};

/// Style for the full-window container
pub fn main_container(theme: &Theme) -> container::Style {
    let _ = theme;
    container::Style {
        background: Some(BACKGROUND.into()),
        text_color: Some(TEXT_PRIMARY),
        ..container::Style::default()
    }
}

/// Style for the query input
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let _ = theme;
    let focused = matches!(status, text_input::Status::Focused { .. });
    text_input::Style {
        background: SURFACE.into(),
        border: Border {
            color: if focused { ACCENT } else { TEXT_SECONDARY },
            width: 1.0,
            radius: 8.0.into(),
        },
        icon: TEXT_SECONDARY,
        placeholder: TEXT_SECONDARY,
        value: TEXT_PRIMARY,
        selection: Color {
            r: ACCENT.r,
            g: ACCENT.g,
            b: ACCENT.b,
            a: 0.3,
        },
    }
}

/// Style for the search button; dimmed while disabled
pub fn search_button(theme: &Theme, status: button::Status) -> button::Style {
    let _ = theme;
    let background = match status {
        button::Status::Disabled => Color {
            r: ACCENT.r,
            g: ACCENT.g,
            b: ACCENT.b,
            a: 0.35,
        },
        button::Status::Hovered | button::Status::Pressed => Color {
            r: ACCENT.r * 0.9,
            g: ACCENT.g * 0.9,
            b: ACCENT.b * 0.9,
            a: 1.0,
        },
        button::Status::Active => ACCENT,
    };
    button::Style {
        background: Some(background.into()),
        text_color: Color::BLACK,
        border: Border {
            color: Color::TRANSPARENT,
            width: 0.0,
            radius: 20.0.into(),
        },
        shadow: Shadow::default(),
        ..button::Style::default()
    }
}

/// Accent-colored text (heading, movie title, loading indicator)
pub fn accent_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ACCENT),
    }
}

/// Regular body text
pub fn body_text(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(TEXT_PRIMARY),
    }
}
