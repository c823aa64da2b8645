    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::*;
    use crate::model::{Car, Page};

    fn car(id: i64, brand: &str) -> Car {
        Car {
            id,
            brand: Some(brand.to_string()),
            model: Some("Base".to_string()),
            year: Some(2021),
            color: None,
            engine: None,
            more_info: None,
            total_available_number: Some(1),
            number_of_cars_in_lease: Some(0),
            is_still_in_stock: Some(true),
            company: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_view() -> RecordsView<Car> {
        let mut view = RecordsView::<Car>::new(10);
        let ticket = view.list.request_page(1, 10).unwrap();
        view.list.apply_page(
            ticket,
            Ok(Page {
                records: vec![car(1, "Toyota"), car(2, "Kia"), car(3, "Tesla")],
                total_count: 23,
            }),
        );
        view.after_reload();
        view
    }

    fn type_text(view: &mut RecordsView<Car>, text: &str) {
        for c in text.chars() {
            assert!(view.handle_key(key(KeyCode::Char(c))).is_none());
        }
    }

    #[test]
    fn typing_filters_live() {
        let mut view = loaded_view();
        view.handle_key(key(KeyCode::Char('/')));
        assert!(view.captures_input());

        type_text(&mut view, "t");
        let ids: Vec<i64> = view.list.filtered().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);

        type_text(&mut view, "es");
        assert_eq!(view.list.search_term(), "tes");
        assert_eq!(view.list.filtered().len(), 1);

        view.handle_key(key(KeyCode::Enter));
        assert!(!view.captures_input());
        assert_eq!(view.list.search_term(), "tes");
    }

    #[test]
    fn esc_while_typing_restores_the_page() {
        let mut view = loaded_view();
        view.handle_key(key(KeyCode::Char('/')));
        type_text(&mut view, "kia");
        view.handle_key(key(KeyCode::Esc));

        assert!(!view.searching);
        assert_eq!(view.list.search_term(), "");
        assert_eq!(view.list.filtered().len(), 3);
    }

    #[test]
    fn cursor_stays_on_a_visible_row() {
        let mut view = loaded_view();
        for _ in 0..5 {
            view.handle_key(key(KeyCode::Down));
        }
        assert_eq!(view.cursor, 2);
        assert_eq!(view.selected_id(), Some(3));

        view.handle_key(key(KeyCode::Char('/')));
        type_text(&mut view, "toy");
        assert_eq!(view.cursor, 0);
        assert_eq!(view.selected_id(), Some(1));
    }

    #[test]
    fn space_marks_only_in_selection_mode() {
        let mut view = loaded_view();
        view.handle_key(key(KeyCode::Char(' ')));
        assert!(view.list.selected_ids().is_empty());

        view.handle_key(key(KeyCode::Char('v')));
        view.handle_key(key(KeyCode::Char(' ')));
        view.handle_key(key(KeyCode::Down));
        view.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(view.list.selected_ids(), vec![1, 2]);

        // Esc leaves selection mode and drops the marks.
        view.handle_key(key(KeyCode::Esc));
        assert!(!view.list.selection_mode());
        assert!(view.list.selected_ids().is_empty());
    }

    #[test]
    fn actions_need_a_row() {
        let mut view = RecordsView::<Car>::new(10);
        assert!(view.handle_key(key(KeyCode::Char('e'))).is_none());
        assert!(view.handle_key(key(KeyCode::Char('d'))).is_none());
        assert!(view.handle_key(key(KeyCode::Char('a'))).is_some());

        let mut view = loaded_view();
        assert!(view.handle_key(key(KeyCode::Char('e'))).is_some());
        assert!(view.handle_key(key(KeyCode::Char('d'))).is_some());
    }

    #[test]
    fn mark_returned_is_lease_only() {
        let mut view = loaded_view();
        assert!(view.handle_key(key(KeyCode::Char('m'))).is_none());
    }

    #[test]
    fn paging_keys_respect_bounds() {
        let mut view = loaded_view();
        assert!(view.handle_key(key(KeyCode::Left)).is_none());
        assert!(view.handle_key(key(KeyCode::Right)).is_some());
    }

    #[test]
    fn page_sizes_step_through_the_presets() {
        assert_eq!(keys::next_page_size(10, true), Some(20));
        assert_eq!(keys::next_page_size(10, false), Some(5));
        assert_eq!(keys::next_page_size(100, true), None);
        assert_eq!(keys::next_page_size(5, false), None);
        assert_eq!(keys::next_page_size(7, true), Some(10));
    }

    #[test]
    fn enter_fetches_only_when_idle() {
        let mut view = RecordsView::<Car>::new(10);
        assert!(view.on_enter().is_some());

        let mut view = loaded_view();
        assert!(view.on_enter().is_none());
        assert!(view.updated_at.is_some());
    }

    #[test]
    fn session_reset_forgets_the_page() {
        let mut view = loaded_view();
        view.session_reset();
        assert_eq!(*view.list.state(), ListState::Idle);
        assert!(view.list.records().is_empty());
        assert_eq!(view.list.page_size(), 10);
    }
