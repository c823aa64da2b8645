    use super::*;

    #[test]
    fn edits_at_the_cursor() {
        let mut input = Input::with_text("cr");
        input.move_left();
        input.insert_char('a');
        assert_eq!(input.buf, "car");
        input.end();
        input.backspace();
        assert_eq!(input.buf, "ca");
        input.home();
        input.delete();
        assert_eq!(input.buf, "a");
    }

    #[test]
    fn cursor_counts_chars_not_bytes() {
        let mut input = Input::with_text("señor");
        assert_eq!(input.cursor, 5);
        input.move_left();
        input.move_left();
        input.backspace();
        assert_eq!(input.buf, "seor");
        input.insert_char('ñ');
        assert_eq!(input.buf, "señor");
    }

    #[test]
    fn masked_display_hides_text() {
        let input = Input::with_text("hunter2");
        assert_eq!(input.display(true), "*******");
        assert_eq!(input.display(false), "hunter2");
    }

    #[test]
    fn movement_stays_in_bounds() {
        let mut input = Input::default();
        input.move_left();
        input.move_right();
        input.backspace();
        input.delete();
        assert_eq!(input.cursor, 0);
        assert!(input.buf.is_empty());
    }
