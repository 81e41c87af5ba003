//! Fixed option sets for article display preferences
//!
//! Every preference is picked from a closed list. Each option has a title shown
//! in pickers and a value the host applies to the article (font id, pixel size,
//! hex color). Parsing accepts either of the two, case-insensitively.

use crate::error::{ParamsError, ParamsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A value drawn from one of the fixed option lists
pub trait ParamOption: Copy + Eq + fmt::Display + 'static {
    /// Name used in error messages
    const FIELD: &'static str;

    /// Every option, in display order
    const ALL: &'static [Self];

    fn title(&self) -> &'static str;

    fn value(&self) -> &'static str;

    /// Look up an option by value or title, reporting failures against `field`
    fn parse_for(field: &'static str, raw: &str) -> ParamsResult<Self> {
        let needle = raw.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|option| {
                option.value().eq_ignore_ascii_case(needle)
                    || option.title().eq_ignore_ascii_case(needle)
            })
            .ok_or_else(|| ParamsError::unknown_option(field, raw))
    }
}

/// Article font family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    #[default]
    OpenSans,
    Ubuntu,
    CormorantGaramond,
    DaysOne,
    Merriweather,
}

impl FontFamily {
    /// Family name as registered with the font system
    pub fn family_name(&self) -> &'static str {
        self.title()
    }
}

impl ParamOption for FontFamily {
    const FIELD: &'static str = "font-family";
    const ALL: &'static [Self] = &[
        FontFamily::OpenSans,
        FontFamily::Ubuntu,
        FontFamily::CormorantGaramond,
        FontFamily::DaysOne,
        FontFamily::Merriweather,
    ];

    fn title(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "Open Sans",
            FontFamily::Ubuntu => "Ubuntu",
            FontFamily::CormorantGaramond => "Cormorant Garamond",
            FontFamily::DaysOne => "Days One",
            FontFamily::Merriweather => "Merriweather",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            FontFamily::OpenSans => "open-sans",
            FontFamily::Ubuntu => "ubuntu",
            FontFamily::CormorantGaramond => "cormorant-garamond",
            FontFamily::DaysOne => "days-one",
            FontFamily::Merriweather => "merriweather",
        }
    }
}

/// Article body font size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FontSize {
    #[default]
    #[serde(rename = "18px")]
    Small,
    #[serde(rename = "25px")]
    Medium,
    #[serde(rename = "38px")]
    Large,
}

impl FontSize {
    pub fn pixels(&self) -> u16 {
        match self {
            FontSize::Small => 18,
            FontSize::Medium => 25,
            FontSize::Large => 38,
        }
    }
}

impl ParamOption for FontSize {
    const FIELD: &'static str = "font-size";
    const ALL: &'static [Self] = &[FontSize::Small, FontSize::Medium, FontSize::Large];

    fn title(&self) -> &'static str {
        self.value()
    }

    fn value(&self) -> &'static str {
        match self {
            FontSize::Small => "18px",
            FontSize::Medium => "25px",
            FontSize::Large => "38px",
        }
    }
}

/// Color palette shared by the font color and background color pickers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Swatch {
    Black,
    White,
    Gray,
    Pink,
    HotPink,
    Orange,
    Yellow,
    Green,
    SkyBlue,
    Violet,
}

/// Font color choices; the first entry is the default
pub const FONT_COLORS: &[Swatch] = &[
    Swatch::Black,
    Swatch::White,
    Swatch::Gray,
    Swatch::Pink,
    Swatch::HotPink,
    Swatch::Orange,
    Swatch::Yellow,
    Swatch::Green,
    Swatch::SkyBlue,
    Swatch::Violet,
];

/// Background color choices; the first entry is the default
pub const BACKGROUND_COLORS: &[Swatch] = &[
    Swatch::White,
    Swatch::Black,
    Swatch::Gray,
    Swatch::Pink,
    Swatch::HotPink,
    Swatch::Orange,
    Swatch::Yellow,
    Swatch::Green,
    Swatch::SkyBlue,
    Swatch::Violet,
];

impl Swatch {
    /// 8-bit RGB channels
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            Swatch::Black => (0x00, 0x00, 0x00),
            Swatch::White => (0xFF, 0xFF, 0xFF),
            Swatch::Gray => (0xC4, 0xC4, 0xC4),
            Swatch::Pink => (0xFE, 0xAF, 0xE8),
            Swatch::HotPink => (0xFD, 0x24, 0xAF),
            Swatch::Orange => (0xFD, 0x4C, 0x24),
            Swatch::Yellow => (0xFF, 0xC8, 0x02),
            Swatch::Green => (0x80, 0xD9, 0x94),
            Swatch::SkyBlue => (0x6F, 0xC1, 0xFD),
            Swatch::Violet => (0x5F, 0x3F, 0xF6),
        }
    }
}

impl ParamOption for Swatch {
    const FIELD: &'static str = "color";
    const ALL: &'static [Self] = FONT_COLORS;

    fn title(&self) -> &'static str {
        match self {
            Swatch::Black => "Black",
            Swatch::White => "White",
            Swatch::Gray => "Gray",
            Swatch::Pink => "Pink",
            Swatch::HotPink => "Hot Pink",
            Swatch::Orange => "Orange",
            Swatch::Yellow => "Yellow",
            Swatch::Green => "Green",
            Swatch::SkyBlue => "Sky Blue",
            Swatch::Violet => "Violet",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            Swatch::Black => "#000000",
            Swatch::White => "#FFFFFF",
            Swatch::Gray => "#C4C4C4",
            Swatch::Pink => "#FEAFE8",
            Swatch::HotPink => "#FD24AF",
            Swatch::Orange => "#FD4C24",
            Swatch::Yellow => "#FFC802",
            Swatch::Green => "#80D994",
            Swatch::SkyBlue => "#6FC1FD",
            Swatch::Violet => "#5F3FF6",
        }
    }
}

/// Maximum width of the article column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContentWidth {
    #[default]
    Wide,
    Narrow,
}

impl ContentWidth {
    pub fn pixels(&self) -> u16 {
        match self {
            ContentWidth::Wide => 1394,
            ContentWidth::Narrow => 948,
        }
    }
}

impl ParamOption for ContentWidth {
    const FIELD: &'static str = "content-width";
    const ALL: &'static [Self] = &[ContentWidth::Wide, ContentWidth::Narrow];

    fn title(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "Wide",
            ContentWidth::Narrow => "Narrow",
        }
    }

    fn value(&self) -> &'static str {
        match self {
            ContentWidth::Wide => "1394px",
            ContentWidth::Narrow => "948px",
        }
    }
}

impl fmt::Display for FontFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl fmt::Display for ContentWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

impl FromStr for FontFamily {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for(Self::FIELD, s)
    }
}

impl FromStr for FontSize {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for(Self::FIELD, s)
    }
}

impl FromStr for Swatch {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for(Self::FIELD, s)
    }
}

impl FromStr for ContentWidth {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_for(Self::FIELD, s)
    }
}
