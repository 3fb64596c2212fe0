mod tests {
    use lightbar_animator::intensity::{
        DIM_INTENSITY, LEVEL_1_INTENSITY, MAX_INTENSITY, MID_INTENSITY, is_named_level,
    };
    use lightbar_animator::pattern::{
        ActiveListeningPattern, IdlePattern, ListeningPattern, SpeakingPattern, ThinkingPattern,
    };
    use lightbar_animator::{Family, Pattern, PatternSlot, WhiteLeds, render_pattern};

    fn lit(leds: &WhiteLeds) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, value)| **value != 0)
            .map(|(index, _)| index)
            .collect()
    }

    fn assert_lit(family: Family, name: &str, expected: &[usize]) {
        let leds = render_pattern(family, name);
        assert_eq!(lit(&leds), expected, "{} {}", family.as_str(), name);
        for index in expected {
            assert_eq!(leds[*index], MAX_INTENSITY, "{} {}", family.as_str(), name);
        }
    }

    #[test]
    fn test_idle_patterns() {
        assert_lit(Family::Idle, "FULL", &(0..13).collect::<Vec<_>>());
        assert_lit(Family::Idle, "W", &[0, 6, 7, 12]);
        assert_lit(Family::Idle, "MIDDLE-LARGE", &[5, 6, 7]);
        assert_lit(Family::Idle, "MIDDLE-SMALL", &[6, 7]);
        assert_lit(Family::Idle, "NONE", &[]);
    }

    #[test]
    fn test_listening_patterns() {
        assert_lit(Family::Listening, "ENDS", &[0, 1, 11, 12]);
        assert_lit(Family::Listening, "MIDDLE1", &[1, 2, 10, 11]);
        assert_lit(Family::Listening, "MIDDLE2", &[2, 3, 9, 10]);
        assert_lit(Family::Listening, "MIDDLE3", &[3, 4, 8, 9]);
        assert_lit(Family::Listening, "MIDDLE4", &[4, 5, 7, 8]);
        assert_lit(Family::Listening, "MIDDLE-LARGE", &[5, 6, 7]);
        assert_lit(Family::Listening, "NONE", &[]);
    }

    #[test]
    fn test_active_listening_patterns() {
        assert_lit(Family::ActiveListening, "MIDDLE-SMALL", &[5, 6, 7]);
        assert_lit(Family::ActiveListening, "MIDDLE-LARGE", &[4, 5, 6, 7, 8]);
        assert_lit(
            Family::ActiveListening,
            "MIDDLE-XLARGE",
            &[3, 4, 5, 6, 7, 8, 9],
        );
    }

    #[test]
    fn test_thinking_patterns() {
        assert_lit(Family::Thinking, "MIDDLE-LARGE", &[4, 5, 6, 7, 8]);
        assert_lit(Family::Thinking, "MIDDLE-XLARGE", &[3, 4, 5, 6, 7, 8, 9]);
        assert_lit(Family::Thinking, "MIDDLE-XXLARGE", &(2..=10).collect::<Vec<_>>());
        assert_lit(Family::Thinking, "MIDDLE-XXXLARGE", &(1..=11).collect::<Vec<_>>());
        assert_lit(Family::Thinking, "MIDDLE-XXXXLARGE", &(0..=12).collect::<Vec<_>>());
        assert_lit(Family::Thinking, "ALL", &(0..=12).collect::<Vec<_>>());
        assert_lit(Family::Thinking, "NONE", &[]);
    }

    #[test]
    fn test_same_name_differs_between_families() {
        assert_ne!(
            render_pattern(Family::Idle, "MIDDLE-LARGE"),
            render_pattern(Family::Thinking, "MIDDLE-LARGE")
        );
    }

    #[test]
    fn test_speaking_levels() {
        assert_eq!(render_pattern(Family::Speaking, "ALL-DIM"), [DIM_INTENSITY; 13]);
        assert_eq!(
            render_pattern(Family::Speaking, "ALL-INTENSITY-1"),
            [LEVEL_1_INTENSITY; 13]
        );
        assert_eq!(render_pattern(Family::Speaking, "ALL-MID"), [MID_INTENSITY; 13]);
        assert_eq!(render_pattern(Family::Speaking, "ALL"), [MAX_INTENSITY; 13]);
        assert_eq!(render_pattern(Family::Speaking, "NONE"), [0; 13]);
        assert_eq!(SpeakingPattern::AllDim.level(), MAX_INTENSITY / 16);
    }

    #[test]
    fn test_unknown_pattern_is_dark() {
        for family in Family::ALL {
            assert_eq!(render_pattern(family, "FOO"), [0; 13]);
        }
        assert_eq!(PatternSlot::parse(Family::Idle, "ENDS"), None);
    }

    #[test]
    fn test_sequences_render_named_levels() {
        fn check<P: Pattern>() {
            for pattern in P::SEQUENCE {
                assert_eq!(P::parse_from_str(pattern.as_str()).map(|p| p.as_str()), Some(pattern.as_str()));
                assert!(pattern.render().iter().all(|value| is_named_level(*value)));
            }
        }
        check::<IdlePattern>();
        check::<ListeningPattern>();
        check::<ActiveListeningPattern>();
        check::<ThinkingPattern>();
        check::<SpeakingPattern>();
    }

    #[test]
    fn test_sequence_lengths() {
        assert_eq!(Family::Idle.sequence_len(), 5);
        assert_eq!(Family::Listening.sequence_len(), 11);
        assert_eq!(Family::ActiveListening.sequence_len(), 8);
        assert_eq!(Family::Thinking.sequence_len(), 7);
        assert_eq!(Family::Speaking.sequence_len(), 12);
    }

    #[test]
    fn test_family_names() {
        for family in Family::ALL {
            assert_eq!(Family::parse_from_str(family.as_str()), Some(family));
        }
        assert_eq!(
            Family::parse_from_str("Alexa Thinking"),
            Some(Family::Thinking)
        );
        assert_eq!(Family::parse_from_str("Alexa Dancing"), None);
    }
}
