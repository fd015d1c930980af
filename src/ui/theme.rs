use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,
    pub banner: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub warning: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_debug: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

/// Names of the built-in themes, in cycling order.
///
const THEME_NAMES: [&str; 4] = ["tokyo-night", "rose-pine", "dracula", "catppuccin-latte"];

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(122, 162, 247),       // Blue
            secondary: ColorSpec::rgb(158, 206, 106),     // Green
            accent: ColorSpec::rgb(187, 154, 247),        // Magenta
            banner: ColorSpec::rgb(125, 207, 255),        // Cyan
            text: ColorSpec::rgb(192, 202, 245),          // Foreground
            text_muted: ColorSpec::rgb(86, 95, 137),      // Comment
            warning: ColorSpec::rgb(224, 175, 104),       // Yellow
            info: ColorSpec::rgb(125, 207, 255),          // Cyan
            border_active: ColorSpec::rgb(122, 162, 247), // Blue
            border_normal: ColorSpec::rgb(65, 72, 104),   // Terminal black
            highlight_bg: ColorSpec::rgb(41, 46, 66),     // Selection
            highlight_fg: ColorSpec::rgb(192, 202, 245),  // Foreground
            footer_debug: ColorSpec::rgb(158, 206, 106),  // Green
            footer_normal: ColorSpec::rgb(26, 27, 38),    // Background
        }
    }

    /// Rose Pine theme.
    ///
    pub fn rose_pine() -> Self {
        Theme {
            name: "rose-pine".to_string(),
            primary: ColorSpec::rgb(196, 167, 231),       // Iris
            secondary: ColorSpec::rgb(156, 207, 216),     // Foam
            accent: ColorSpec::rgb(235, 188, 186),        // Rose
            banner: ColorSpec::rgb(235, 111, 146),        // Love
            text: ColorSpec::rgb(224, 222, 244),          // Text
            text_muted: ColorSpec::rgb(110, 106, 134),    // Muted
            warning: ColorSpec::rgb(246, 193, 119),       // Gold
            info: ColorSpec::rgb(49, 116, 143),           // Pine
            border_active: ColorSpec::rgb(196, 167, 231), // Iris
            border_normal: ColorSpec::rgb(64, 61, 82),    // Highlight high
            highlight_bg: ColorSpec::rgb(38, 35, 58),     // Overlay
            highlight_fg: ColorSpec::rgb(224, 222, 244),  // Text
            footer_debug: ColorSpec::rgb(156, 207, 216),  // Foam
            footer_normal: ColorSpec::rgb(25, 23, 36),    // Base
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),       // Purple
            secondary: ColorSpec::rgb(80, 250, 123),      // Green
            accent: ColorSpec::rgb(255, 121, 198),        // Pink
            banner: ColorSpec::rgb(255, 121, 198),        // Pink
            text: ColorSpec::rgb(248, 248, 242),          // Foreground
            text_muted: ColorSpec::rgb(98, 114, 164),     // Comment
            warning: ColorSpec::rgb(241, 250, 140),       // Yellow
            info: ColorSpec::rgb(139, 233, 253),          // Cyan
            border_active: ColorSpec::rgb(189, 147, 249), // Purple
            border_normal: ColorSpec::rgb(68, 71, 90),    // Current line
            highlight_bg: ColorSpec::rgb(68, 71, 90),     // Current line
            highlight_fg: ColorSpec::rgb(248, 248, 242),  // Foreground
            footer_debug: ColorSpec::rgb(80, 250, 123),   // Green
            footer_normal: ColorSpec::rgb(40, 42, 54),    // Background
        }
    }

    /// Catppuccin Latte theme.
    ///
    pub fn catppuccin_latte() -> Self {
        Theme {
            name: "catppuccin-latte".to_string(),
            primary: ColorSpec::rgb(136, 57, 239),        // Mauve
            secondary: ColorSpec::rgb(64, 160, 43),       // Green
            accent: ColorSpec::rgb(234, 118, 203),        // Pink
            banner: ColorSpec::rgb(30, 102, 245),         // Blue
            text: ColorSpec::rgb(76, 79, 105),            // Text
            text_muted: ColorSpec::rgb(140, 143, 161),    // Overlay 1
            warning: ColorSpec::rgb(223, 142, 29),        // Yellow
            info: ColorSpec::rgb(4, 165, 229),            // Sky
            border_active: ColorSpec::rgb(136, 57, 239),  // Mauve
            border_normal: ColorSpec::rgb(188, 192, 204), // Surface 1
            highlight_bg: ColorSpec::rgb(204, 208, 218),  // Surface 0
            highlight_fg: ColorSpec::rgb(76, 79, 105),    // Text
            footer_debug: ColorSpec::rgb(64, 160, 43),    // Green
            footer_normal: ColorSpec::rgb(239, 241, 245), // Base
        }
    }

    /// Get theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine" => Some(Self::rose_pine()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-latte" => Some(Self::catppuccin_latte()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        THEME_NAMES.iter().map(|name| name.to_string()).collect()
    }

    /// Return the theme following this one in cycling order.
    ///
    pub fn next(&self) -> Self {
        let position = THEME_NAMES.iter().position(|name| *name == self.name);
        let next = position.map_or(0, |i| (i + 1) % THEME_NAMES.len());
        Self::from_name(THEME_NAMES[next]).unwrap_or_default()
    }
}
