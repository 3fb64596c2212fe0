//! Idle animation patterns
//!
//! Played while no voice session is active. The renderer additionally cycles
//! the end-cap colors for this family.

use super::{Family, Pattern, fill_middle};
use crate::frame::{LAST_WHITE, MIDDLE_WHITE, WhiteLeds};
use crate::intensity::MAX_INTENSITY;

const PATTERN_NAME_FULL: &str = "FULL";
const PATTERN_NAME_W: &str = "W";
const PATTERN_NAME_MIDDLE_LARGE: &str = "MIDDLE-LARGE";
const PATTERN_NAME_MIDDLE_SMALL: &str = "MIDDLE-SMALL";
const PATTERN_NAME_NONE: &str = "NONE";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdlePattern {
    /// Every white LED on
    Full,
    /// Both ends plus the two center-right LEDs
    W,
    /// Middle LED and its direct neighbours
    MiddleLarge,
    /// Middle LED and its right neighbour
    MiddleSmall,
    None,
}

impl Pattern for IdlePattern {
    const FAMILY: Family = Family::Idle;

    const SEQUENCE: &'static [Self] = &[
        Self::Full,
        Self::W,
        Self::MiddleLarge,
        Self::MiddleSmall,
        Self::None,
    ];

    fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_FULL => Some(Self::Full),
            PATTERN_NAME_W => Some(Self::W),
            PATTERN_NAME_MIDDLE_LARGE => Some(Self::MiddleLarge),
            PATTERN_NAME_MIDDLE_SMALL => Some(Self::MiddleSmall),
            PATTERN_NAME_NONE => Some(Self::None),
            _ => None,
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Full => PATTERN_NAME_FULL,
            Self::W => PATTERN_NAME_W,
            Self::MiddleLarge => PATTERN_NAME_MIDDLE_LARGE,
            Self::MiddleSmall => PATTERN_NAME_MIDDLE_SMALL,
            Self::None => PATTERN_NAME_NONE,
        }
    }

    fn apply(self, leds: &mut WhiteLeds) {
        match self {
            Self::Full => leds.fill(MAX_INTENSITY),
            Self::W => {
                leds[0] = MAX_INTENSITY;
                leds[LAST_WHITE] = MAX_INTENSITY;
                leds[MIDDLE_WHITE] = MAX_INTENSITY;
                leds[MIDDLE_WHITE + 1] = MAX_INTENSITY;
            }
            Self::MiddleLarge => fill_middle(leds, 1, MAX_INTENSITY),
            Self::MiddleSmall => {
                leds[MIDDLE_WHITE..=MIDDLE_WHITE + 1].fill(MAX_INTENSITY);
            }
            Self::None => {}
        }
    }
}
