//! Animation sequence table
//!
//! Each family plays its [`Pattern::SEQUENCE`] in a loop. The table keeps one
//! cursor per family, so switching animations and coming back later resumes
//! where the family left off.

use crate::pattern::{
    ActiveListeningPattern, Family, IdlePattern, ListeningPattern, Pattern, PatternSlot,
    SpeakingPattern, ThinkingPattern,
};

/// Per-family cursors into the animation sequences
#[derive(Debug, Clone, Default)]
pub struct SequenceTable {
    cursors: [usize; Family::COUNT],
}

impl SequenceTable {
    pub const fn new() -> Self {
        Self {
            cursors: [0; Family::COUNT],
        }
    }

    /// Return the pattern under the family's cursor and advance the cursor
    pub fn next_pattern(&mut self, family: Family) -> PatternSlot {
        match family {
            Family::Idle => PatternSlot::Idle(self.advance::<IdlePattern>()),
            Family::Listening => PatternSlot::Listening(self.advance::<ListeningPattern>()),
            Family::ActiveListening => {
                PatternSlot::ActiveListening(self.advance::<ActiveListeningPattern>())
            }
            Family::Thinking => PatternSlot::Thinking(self.advance::<ThinkingPattern>()),
            Family::Speaking => PatternSlot::Speaking(self.advance::<SpeakingPattern>()),
        }
    }

    /// Current position of the family's cursor
    pub fn cursor(&self, family: Family) -> usize {
        self.cursors[family.index()]
    }

    /// Rewind every family to the start of its sequence
    pub fn reset(&mut self) {
        self.cursors = [0; Family::COUNT];
    }

    fn advance<P: Pattern>(&mut self) -> P {
        let sequence = P::SEQUENCE;
        let cursor = &mut self.cursors[P::FAMILY.index()];
        let pattern = sequence[*cursor % sequence.len()];
        *cursor = (*cursor + 1) % sequence.len();
        pattern
    }
}
