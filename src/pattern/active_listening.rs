//! Active listening animation patterns
//!
//! A centered block that breathes between three and seven LEDs wide.

use super::{Family, Pattern, fill_middle};
use crate::frame::WhiteLeds;
use crate::intensity::MAX_INTENSITY;

const PATTERN_NAME_MIDDLE_SMALL: &str = "MIDDLE-SMALL";
const PATTERN_NAME_MIDDLE_LARGE: &str = "MIDDLE-LARGE";
const PATTERN_NAME_MIDDLE_XLARGE: &str = "MIDDLE-XLARGE";
const PATTERN_NAME_NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActiveListeningPattern {
    /// Three center LEDs
    MiddleSmall,
    /// Five center LEDs
    MiddleLarge,
    /// Seven center LEDs
    MiddleXLarge,
    None,
}

impl Pattern for ActiveListeningPattern {
    const FAMILY: Family = Family::ActiveListening;

    const SEQUENCE: &'static [Self] = &[
        Self::MiddleLarge,
        Self::MiddleSmall,
        Self::MiddleXLarge,
        Self::MiddleSmall,
        Self::MiddleXLarge,
        Self::MiddleXLarge,
        Self::MiddleXLarge,
        Self::None,
    ];

    fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_MIDDLE_SMALL => Some(Self::MiddleSmall),
            PATTERN_NAME_MIDDLE_LARGE => Some(Self::MiddleLarge),
            PATTERN_NAME_MIDDLE_XLARGE => Some(Self::MiddleXLarge),
            PATTERN_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::MiddleSmall => PATTERN_NAME_MIDDLE_SMALL,
            Self::MiddleLarge => PATTERN_NAME_MIDDLE_LARGE,
            Self::MiddleXLarge => PATTERN_NAME_MIDDLE_XLARGE,
            Self::None => PATTERN_NAME_NONE,
        }
    }

    fn apply(self, leds: &mut WhiteLeds) {
        match self {
            Self::MiddleSmall => fill_middle(leds, 1, MAX_INTENSITY),
            Self::MiddleLarge => fill_middle(leds, 2, MAX_INTENSITY),
            Self::MiddleXLarge => fill_middle(leds, 3, MAX_INTENSITY),
            Self::None => {}
        }
    }
}
