//! Listening animation patterns
//!
//! Two pairs of LEDs sweep in from the ends towards the middle and settle on
//! the three center LEDs.

use super::{Family, Pattern, fill_middle, fill_mirrored_pair};
use crate::frame::WhiteLeds;
use crate::intensity::MAX_INTENSITY;

const PATTERN_NAME_ENDS: &str = "ENDS";
const PATTERN_NAME_MIDDLE_1: &str = "MIDDLE1";
const PATTERN_NAME_MIDDLE_2: &str = "MIDDLE2";
const PATTERN_NAME_MIDDLE_3: &str = "MIDDLE3";
const PATTERN_NAME_MIDDLE_4: &str = "MIDDLE4";
const PATTERN_NAME_MIDDLE_LARGE: &str = "MIDDLE-LARGE";
const PATTERN_NAME_NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListeningPattern {
    Ends,
    Middle1,
    Middle2,
    Middle3,
    Middle4,
    MiddleLarge,
    None,
}

impl Pattern for ListeningPattern {
    const FAMILY: Family = Family::Listening;

    const SEQUENCE: &'static [Self] = &[
        Self::Ends,
        Self::Middle1,
        Self::Middle2,
        Self::Middle3,
        Self::Middle4,
        Self::MiddleLarge,
        Self::MiddleLarge,
        Self::MiddleLarge,
        Self::MiddleLarge,
        Self::MiddleLarge,
        Self::None,
    ];

    fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_ENDS => Some(Self::Ends),
            PATTERN_NAME_MIDDLE_1 => Some(Self::Middle1),
            PATTERN_NAME_MIDDLE_2 => Some(Self::Middle2),
            PATTERN_NAME_MIDDLE_3 => Some(Self::Middle3),
            PATTERN_NAME_MIDDLE_4 => Some(Self::Middle4),
            PATTERN_NAME_MIDDLE_LARGE => Some(Self::MiddleLarge),
            PATTERN_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Ends => PATTERN_NAME_ENDS,
            Self::Middle1 => PATTERN_NAME_MIDDLE_1,
            Self::Middle2 => PATTERN_NAME_MIDDLE_2,
            Self::Middle3 => PATTERN_NAME_MIDDLE_3,
            Self::Middle4 => PATTERN_NAME_MIDDLE_4,
            Self::MiddleLarge => PATTERN_NAME_MIDDLE_LARGE,
            Self::None => PATTERN_NAME_NONE,
        }
    }

    fn apply(self, leds: &mut WhiteLeds) {
        match self {
            Self::Ends => fill_mirrored_pair(leds, 0, MAX_INTENSITY),
            Self::Middle1 => fill_mirrored_pair(leds, 1, MAX_INTENSITY),
            Self::Middle2 => fill_mirrored_pair(leds, 2, MAX_INTENSITY),
            Self::Middle3 => fill_mirrored_pair(leds, 3, MAX_INTENSITY),
            Self::Middle4 => fill_mirrored_pair(leds, 4, MAX_INTENSITY),
            Self::MiddleLarge => fill_middle(leds, 1, MAX_INTENSITY),
            Self::None => {}
        }
    }
}
