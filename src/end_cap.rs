//! Named end-cap colors

use core::fmt;

use crate::frame::EndCap;
use crate::intensity::MAX_INTENSITY;

const COLOR_NAME_BLACK: &str = "BLACK";
const COLOR_NAME_WHITE: &str = "WHITE";
const COLOR_NAME_RED: &str = "RED";
const COLOR_NAME_GREEN: &str = "GREEN";
const COLOR_NAME_YELLOW: &str = "YELLOW";
const COLOR_NAME_CYAN: &str = "CYAN";
const COLOR_NAME_MAGENTA: &str = "MAGENTA";

/// Colors the end-caps can show
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndCapColor {
    Black,
    White,
    Red,
    Green,
    Yellow,
    Cyan,
    Magenta,
}

/// Colors the idle animation cycles through on even frames
pub const IDLE_COLOR_CYCLE: [EndCapColor; 5] = [
    EndCapColor::Red,
    EndCapColor::Green,
    EndCapColor::Yellow,
    EndCapColor::Cyan,
    EndCapColor::Magenta,
];

/// Error returned for a color name outside the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedColor;

impl fmt::Display for UnsupportedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unsupported color")
    }
}

impl EndCapColor {
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            COLOR_NAME_BLACK => Some(Self::Black),
            COLOR_NAME_WHITE => Some(Self::White),
            COLOR_NAME_RED => Some(Self::Red),
            COLOR_NAME_GREEN => Some(Self::Green),
            COLOR_NAME_YELLOW => Some(Self::Yellow),
            COLOR_NAME_CYAN => Some(Self::Cyan),
            COLOR_NAME_MAGENTA => Some(Self::Magenta),
            _ => None,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Black => COLOR_NAME_BLACK,
            Self::White => COLOR_NAME_WHITE,
            Self::Red => COLOR_NAME_RED,
            Self::Green => COLOR_NAME_GREEN,
            Self::Yellow => COLOR_NAME_YELLOW,
            Self::Cyan => COLOR_NAME_CYAN,
            Self::Magenta => COLOR_NAME_MAGENTA,
        }
    }

    /// Channel values for this color; every component is either off or full
    pub const fn to_rgb(self) -> EndCap {
        const ON: u16 = MAX_INTENSITY;
        match self {
            Self::Black => EndCap::new(0, 0, 0),
            Self::White => EndCap::new(ON, ON, ON),
            Self::Red => EndCap::new(ON, 0, 0),
            Self::Green => EndCap::new(0, ON, 0),
            Self::Yellow => EndCap::new(ON, ON, 0),
            Self::Cyan => EndCap::new(0, ON, ON),
            Self::Magenta => EndCap::new(ON, 0, ON),
        }
    }
}
