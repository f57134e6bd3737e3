use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }

    pub fn from_dark_mode(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                correct: Color::Green,
                wrong: Color::Red,
                untyped: Color::DarkGray,
                accent: Color::Magenta,
            },
            Theme::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                correct: Color::Rgb(0, 128, 0),
                wrong: Color::Rgb(200, 0, 0),
                untyped: Color::Gray,
                accent: Color::Blue,
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub correct: Color,
    pub wrong: Color,
    pub untyped: Color,
    pub accent: Color,
}

/// Terminal color scheme as advertised through `COLORFGBG`
pub fn ambient_theme() -> Option<Theme> {
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| theme_from_colorfgbg(&v))
}

/// Parses `fg;bg` (or `fg;default;bg`). The last field is the background
/// palette index: 0-6 and 8 are dark, 7 and 9-15 light.
pub fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.rsplit(';').next()?.trim().parse::<u8>().ok()?;
    match bg {
        0..=6 | 8 => Some(Theme::Dark),
        7 | 9..=15 => Some(Theme::Light),
        _ => None,
    }
}
