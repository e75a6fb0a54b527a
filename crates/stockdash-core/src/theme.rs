//! Light and dark palettes for the dashboard.
//!
//! A [`Theme`] is a pure function of the dark-mode flag; nothing else feeds into it.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// From a `0xrrggbb` literal.
    pub const fn hex(code: u32) -> Self {
        Rgb((code >> 16) as u8, (code >> 8) as u8, code as u8)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

const WHITE: Rgb = Rgb::hex(0xffffff);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dark: bool,

    // page
    pub background: Rgb,
    pub text: Rgb,

    // sidebar (watchlist)
    pub sidebar_bg: Rgb,
    pub sidebar_text: Rgb,
    pub toggle_bg: Rgb,

    // cards
    pub card_bg: Rgb,
    pub card_text: Rgb,

    // controls
    pub accent: Rgb,
    pub header_text: Rgb,
    pub add_button: Rgb,
    pub buy: Rgb,
    pub sell: Rgb,
    pub button_text: Rgb,
    pub chart_line: Rgb,
    pub error: Rgb,
}

impl Theme {
    pub fn light() -> Self {
        Theme {
            dark: false,
            background: Rgb::hex(0xf0f2f5),
            text: Rgb::hex(0x111827),
            sidebar_bg: Rgb::hex(0x1f2937),
            sidebar_text: WHITE,
            toggle_bg: Rgb::hex(0x4b5563),
            card_bg: WHITE,
            card_text: Rgb::hex(0x111827),
            accent: Rgb::hex(0x2563eb),
            header_text: WHITE,
            add_button: Rgb::hex(0x10b981),
            buy: Rgb::hex(0x34d399),
            sell: Rgb::hex(0xef4444),
            button_text: WHITE,
            chart_line: Rgb::hex(0x0000ff),
            error: Rgb::hex(0xff0000),
        }
    }

    /// The light palette with the page, sidebar and cards darkened.
    pub fn dark() -> Self {
        Theme {
            dark: true,
            background: Rgb::hex(0x1f2937),
            text: Rgb::hex(0xe5e7eb),
            sidebar_bg: Rgb::hex(0x111827),
            card_bg: Rgb::hex(0x374151),
            card_text: Rgb::hex(0xf9fafb),
            ..Theme::light()
        }
    }

    pub fn for_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Theme::dark()
        } else {
            Theme::light()
        }
    }

    /// Label of the button that switches to the other mode.
    pub fn toggle_label(&self) -> &'static str {
        if self.dark {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::light()
    }
}
