//! Thinking animation patterns
//!
//! A centered block growing from five LEDs to the whole bar, then dark.

use super::{Family, Pattern, fill_middle};
use crate::frame::WhiteLeds;
use crate::intensity::MAX_INTENSITY;

const PATTERN_NAME_MIDDLE_LARGE: &str = "MIDDLE-LARGE";
const PATTERN_NAME_MIDDLE_XLARGE: &str = "MIDDLE-XLARGE";
const PATTERN_NAME_MIDDLE_XXLARGE: &str = "MIDDLE-XXLARGE";
const PATTERN_NAME_MIDDLE_XXXLARGE: &str = "MIDDLE-XXXLARGE";
const PATTERN_NAME_MIDDLE_XXXXLARGE: &str = "MIDDLE-XXXXLARGE";
const PATTERN_NAME_ALL: &str = "ALL";
const PATTERN_NAME_NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThinkingPattern {
    MiddleLarge,
    MiddleXLarge,
    MiddleXXLarge,
    MiddleXXXLarge,
    MiddleXXXXLarge,
    All,
    None,
}

impl ThinkingPattern {
    /// Half width of the centered block, `None` for non-block patterns
    const fn radius(self) -> Option<usize> {
        match self {
            Self::MiddleLarge => Some(2),
            Self::MiddleXLarge => Some(3),
            Self::MiddleXXLarge => Some(4),
            Self::MiddleXXXLarge => Some(5),
            Self::MiddleXXXXLarge => Some(6),
            Self::All | Self::None => None,
        }
    }
}

impl Pattern for ThinkingPattern {
    const FAMILY: Family = Family::Thinking;

    const SEQUENCE: &'static [Self] = &[
        Self::MiddleLarge,
        Self::MiddleXLarge,
        Self::MiddleXXLarge,
        Self::MiddleXXXLarge,
        Self::MiddleXXXXLarge,
        Self::All,
        Self::None,
    ];

    fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_MIDDLE_LARGE => Some(Self::MiddleLarge),
            PATTERN_NAME_MIDDLE_XLARGE => Some(Self::MiddleXLarge),
            PATTERN_NAME_MIDDLE_XXLARGE => Some(Self::MiddleXXLarge),
            PATTERN_NAME_MIDDLE_XXXLARGE => Some(Self::MiddleXXXLarge),
            PATTERN_NAME_MIDDLE_XXXXLARGE => Some(Self::MiddleXXXXLarge),
            PATTERN_NAME_ALL => Some(Self::All),
            PATTERN_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::MiddleLarge => PATTERN_NAME_MIDDLE_LARGE,
            Self::MiddleXLarge => PATTERN_NAME_MIDDLE_XLARGE,
            Self::MiddleXXLarge => PATTERN_NAME_MIDDLE_XXLARGE,
            Self::MiddleXXXLarge => PATTERN_NAME_MIDDLE_XXXLARGE,
            Self::MiddleXXXXLarge => PATTERN_NAME_MIDDLE_XXXXLARGE,
            Self::All => PATTERN_NAME_ALL,
            Self::None => PATTERN_NAME_NONE,
        }
    }

    fn apply(self, leds: &mut WhiteLeds) {
        match (self, self.radius()) {
            (_, Some(radius)) => fill_middle(leds, radius, MAX_INTENSITY),
            (Self::All, None) => leds.fill(MAX_INTENSITY),
            _ => {}
        }
    }
}
