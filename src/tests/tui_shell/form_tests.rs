    use super::*;
    use crate::model::{Car, FieldKind};
    use crate::resource::Resource;

    const LOGIN: [FieldSpec; 2] = [
        FieldSpec::new("username", "Username", FieldKind::Text),
        FieldSpec::new("password", "Password", FieldKind::Text),
    ];

    #[test]
    fn tabbing_keeps_what_was_typed() {
        let mut form = FormState::new(&LOGIN, &FormValues::new());
        for c in "dana".chars() {
            form.input.insert_char(c);
        }
        form.focus_next();
        for c in "pw".chars() {
            form.input.insert_char(c);
        }
        form.focus_prev();
        assert_eq!(form.input.buf, "dana");

        let values = form.values();
        assert_eq!(values.get("username").map(String::as_str), Some("dana"));
        assert_eq!(values.get("password").map(String::as_str), Some("pw"));
    }

    #[test]
    fn password_fields_are_masked() {
        let form = FormState::new(&LOGIN, &FormValues::new());
        assert!(!form.is_masked(0));
        assert!(form.is_masked(1));
    }

    #[test]
    fn prefills_from_the_record() {
        let mut initial = FormValues::new();
        initial.insert("brand".to_string(), "Kia".to_string());
        let form = FormState::new(Car::form_fields(), &initial);
        assert_eq!(form.input.buf, "Kia");
        assert_eq!(form.values.len(), Car::form_fields().len());
    }

    #[test]
    fn validation_errors_use_field_labels() {
        let mut form = FormState::new(Car::form_fields(), &FormValues::new());
        let mut errs = FieldErrors::default();
        errs.0
            .insert("year".to_string(), vec!["A valid integer is required.".to_string()]);
        errs.0
            .insert(GENERAL_FIELD.to_string(), vec!["Not authorized".to_string()]);
        form.show_error(&ApiError::Validation(errs));
        assert!(form.errors.contains(&"Year: A valid integer is required.".to_string()));
        assert!(form.errors.contains(&"Not authorized".to_string()));
    }
