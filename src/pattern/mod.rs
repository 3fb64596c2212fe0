//! Pattern library with compile-time known pattern vocabularies
//!
//! Every animation family owns a closed set of patterns. The same pattern name
//! can light different LEDs in different families, so each family has its own
//! enum and the tables are never shared. String names only enter through
//! [`PatternSlot::parse`] and [`render_pattern`].

mod active_listening;
mod idle;
mod listening;
mod speaking;
mod thinking;

pub use active_listening::ActiveListeningPattern;
pub use idle::IdlePattern;
pub use listening::ListeningPattern;
pub use speaking::SpeakingPattern;
pub use thinking::ThinkingPattern;

use crate::frame::{LAST_WHITE, MIDDLE_WHITE, WhiteLeds, dark_whites};
use crate::intensity::Intensity;

const FAMILY_NAME_IDLE: &str = "Idle";
const FAMILY_NAME_LISTENING: &str = "Alexa Listening";
const FAMILY_NAME_ACTIVE_LISTENING: &str = "Alexa Active Listening";
const FAMILY_NAME_THINKING: &str = "Alexa Thinking";
const FAMILY_NAME_SPEAKING: &str = "Alexa Speaking";

/// Animation families the light bar can play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Family {
    /// Idle cycling with colored end-caps
    #[default]
    Idle,
    Listening,
    ActiveListening,
    Thinking,
    Speaking,
}

impl Family {
    pub const COUNT: usize = 5;

    pub const ALL: [Family; Self::COUNT] = [
        Self::Idle,
        Self::Listening,
        Self::ActiveListening,
        Self::Thinking,
        Self::Speaking,
    ];

    /// Position of the family in [`Family::ALL`]
    pub const fn index(self) -> usize {
        match self {
            Self::Idle => 0,
            Self::Listening => 1,
            Self::ActiveListening => 2,
            Self::Thinking => 3,
            Self::Speaking => 4,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => FAMILY_NAME_IDLE,
            Self::Listening => FAMILY_NAME_LISTENING,
            Self::ActiveListening => FAMILY_NAME_ACTIVE_LISTENING,
            Self::Thinking => FAMILY_NAME_THINKING,
            Self::Speaking => FAMILY_NAME_SPEAKING,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            FAMILY_NAME_IDLE => Some(Self::Idle),
            FAMILY_NAME_LISTENING => Some(Self::Listening),
            FAMILY_NAME_ACTIVE_LISTENING => Some(Self::ActiveListening),
            FAMILY_NAME_THINKING => Some(Self::Thinking),
            FAMILY_NAME_SPEAKING => Some(Self::Speaking),
            _ => None,
        }
    }

    /// Number of steps in the family's animation sequence
    pub fn sequence_len(self) -> usize {
        match self {
            Self::Idle => IdlePattern::SEQUENCE.len(),
            Self::Listening => ListeningPattern::SEQUENCE.len(),
            Self::ActiveListening => ActiveListeningPattern::SEQUENCE.len(),
            Self::Thinking => ThinkingPattern::SEQUENCE.len(),
            Self::Speaking => SpeakingPattern::SEQUENCE.len(),
        }
    }
}

pub trait Pattern: Copy + 'static {
    /// Family that owns this vocabulary
    const FAMILY: Family;

    /// Order in which the animation plays the patterns
    const SEQUENCE: &'static [Self];

    fn parse_from_str(s: &str) -> Option<Self>;

    fn as_str(self) -> &'static str;

    /// Light the LEDs of this pattern on a dark vector
    fn apply(self, leds: &mut WhiteLeds);

    /// Render the pattern on a fresh dark vector
    fn render(self) -> WhiteLeds {
        let mut leds = dark_whites();
        self.apply(&mut leds);
        leds
    }
}

/// Pattern slot - one pattern of any family
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PatternSlot {
    Idle(IdlePattern),
    Listening(ListeningPattern),
    ActiveListening(ActiveListeningPattern),
    Thinking(ThinkingPattern),
    Speaking(SpeakingPattern),
}

impl PatternSlot {
    /// Look up `name` in the vocabulary of `family`
    pub fn parse(family: Family, name: &str) -> Option<Self> {
        match family {
            Family::Idle => IdlePattern::parse_from_str(name).map(Self::Idle),
            Family::Listening => ListeningPattern::parse_from_str(name).map(Self::Listening),
            Family::ActiveListening => {
                ActiveListeningPattern::parse_from_str(name).map(Self::ActiveListening)
            }
            Family::Thinking => ThinkingPattern::parse_from_str(name).map(Self::Thinking),
            Family::Speaking => SpeakingPattern::parse_from_str(name).map(Self::Speaking),
        }
    }

    pub fn family(self) -> Family {
        match self {
            Self::Idle(_) => IdlePattern::FAMILY,
            Self::Listening(_) => ListeningPattern::FAMILY,
            Self::ActiveListening(_) => ActiveListeningPattern::FAMILY,
            Self::Thinking(_) => ThinkingPattern::FAMILY,
            Self::Speaking(_) => SpeakingPattern::FAMILY,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle(pattern) => pattern.as_str(),
            Self::Listening(pattern) => pattern.as_str(),
            Self::ActiveListening(pattern) => pattern.as_str(),
            Self::Thinking(pattern) => pattern.as_str(),
            Self::Speaking(pattern) => pattern.as_str(),
        }
    }

    /// Render the pattern on a fresh dark vector
    pub fn render(self) -> WhiteLeds {
        match self {
            Self::Idle(pattern) => pattern.render(),
            Self::Listening(pattern) => pattern.render(),
            Self::ActiveListening(pattern) => pattern.render(),
            Self::Thinking(pattern) => pattern.render(),
            Self::Speaking(pattern) => pattern.render(),
        }
    }
}

/// Render a pattern given by name
///
/// Unknown names render a dark vector; the animation keeps running.
pub fn render_pattern(family: Family, name: &str) -> WhiteLeds {
    if let Some(pattern) = PatternSlot::parse(family, name) {
        return pattern.render();
    }
    warn!(
        "[Pattern.render] unsupported led pattern: {} ({})",
        name,
        family.as_str()
    );
    dark_whites()
}

/// Light `MIDDLE_WHITE - radius ..= MIDDLE_WHITE + radius`
fn fill_middle(leds: &mut WhiteLeds, radius: usize, level: Intensity) {
    leds[MIDDLE_WHITE - radius..=MIDDLE_WHITE + radius].fill(level);
}

/// Light two neighbouring LEDs `offset` positions in from each end
fn fill_mirrored_pair(leds: &mut WhiteLeds, offset: usize, level: Intensity) {
    leds[offset..=offset + 1].fill(level);
    leds[LAST_WHITE - offset - 1..=LAST_WHITE - offset].fill(level);
}
