mod tests {
    use lightbar_animator::pattern::{IdlePattern, ListeningPattern, ThinkingPattern};
    use lightbar_animator::{Family, Pattern, PatternSlot, SequenceTable};

    #[test]
    fn test_sequence_plays_in_order_and_wraps() {
        let mut table = SequenceTable::new();
        for expected in IdlePattern::SEQUENCE {
            assert_eq!(table.next_pattern(Family::Idle), PatternSlot::Idle(*expected));
        }
        assert_eq!(
            table.next_pattern(Family::Idle),
            PatternSlot::Idle(IdlePattern::Full)
        );
        assert_eq!(table.cursor(Family::Idle), 1);
    }

    #[test]
    fn test_every_family_wraps_after_its_length() {
        let mut table = SequenceTable::new();
        for family in Family::ALL {
            let first = table.next_pattern(family);
            for _ in 1..family.sequence_len() {
                table.next_pattern(family);
            }
            assert_eq!(table.cursor(family), 0);
            assert_eq!(table.next_pattern(family), first);
            assert_eq!(first.family(), family);
        }
    }

    #[test]
    fn test_cursors_are_independent() {
        let mut table = SequenceTable::new();
        for _ in 0..3 {
            table.next_pattern(Family::Thinking);
        }
        for _ in 0..2 {
            table.next_pattern(Family::Listening);
        }

        assert_eq!(table.cursor(Family::Thinking), 3);
        assert_eq!(table.cursor(Family::Listening), 2);
        assert_eq!(
            table.next_pattern(Family::Thinking),
            PatternSlot::Thinking(ThinkingPattern::MiddleXXXLarge)
        );
        assert_eq!(
            table.next_pattern(Family::Listening),
            PatternSlot::Listening(ListeningPattern::Middle2)
        );
        assert_eq!(table.cursor(Family::Idle), 0);
    }

    #[test]
    fn test_reset_rewinds_all_families() {
        let mut table = SequenceTable::new();
        table.next_pattern(Family::Speaking);
        table.next_pattern(Family::Idle);
        table.reset();
        for family in Family::ALL {
            assert_eq!(table.cursor(family), 0);
        }
    }
}
