mod common;

mod tests {
    use lightbar_animator::frame::STRIP_LEN;
    use lightbar_animator::intensity::MAX_INTENSITY;
    use lightbar_animator::transport::{WIRE_CAPACITY, strip_text};
    use lightbar_animator::{EndCapColor, FrameError, StripFrame, encode_frame};

    use crate::common::strip_values;

    #[test]
    fn test_dark_frame_wire_format() {
        let message = encode_frame(&StripFrame::dark()).unwrap();
        let expected = format!(
            "{{\"event\":\"cmd\",\"type\":\"led\",\"action\":\"set strip\",\"strip\":\"{}\"}}",
            "0-".repeat(STRIP_LEN)
        );
        assert_eq!(message.as_str(), expected);
    }

    #[test]
    fn test_strip_order() {
        let mut values = [0; STRIP_LEN];
        for (index, value) in values.iter_mut().enumerate() {
            *value = index as u16;
        }
        let frame = StripFrame::from_values(&values).unwrap();
        assert_eq!(frame.left.r, 0);
        assert_eq!(frame.whites[0], 3);
        assert_eq!(frame.right.b, 18);

        let message = encode_frame(&frame).unwrap();
        assert_eq!(strip_values(&message), values);
    }

    #[test]
    fn test_brightest_frame_fits() {
        let mut frame = StripFrame::dark();
        frame.whites = [MAX_INTENSITY; 13];
        frame.set_end_caps(EndCapColor::White.to_rgb());

        let text = strip_text(&frame).unwrap();
        assert_eq!(text.as_str(), "4095-".repeat(STRIP_LEN));
        let message = encode_frame(&frame).unwrap();
        assert!(message.len() <= WIRE_CAPACITY);
        assert_eq!(strip_values(&message), [MAX_INTENSITY; STRIP_LEN]);
    }

    #[test]
    fn test_frame_validation() {
        assert_eq!(
            StripFrame::from_values(&[0; 18]),
            Err(FrameError::WrongLength(18))
        );
        let mut values = [0; STRIP_LEN];
        values[7] = 4096;
        assert_eq!(
            StripFrame::from_values(&values),
            Err(FrameError::OutOfRange {
                index: 7,
                value: 4096
            })
        );
    }

    #[test]
    fn test_frame_parts_validation() {
        let mut frame = StripFrame::dark();
        assert_eq!(frame.validate(), Ok(()));

        frame.right.g = 4096;
        assert_eq!(
            frame.validate(),
            Err(FrameError::OutOfRange {
                index: 17,
                value: 4096
            })
        );
        assert_eq!(
            StripFrame::from_parts(frame.left, frame.whites, frame.right),
            Err(FrameError::OutOfRange {
                index: 17,
                value: 4096
            })
        );
    }
}
