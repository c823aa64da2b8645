    use serde_json::json;

    use super::*;

    #[test]
    fn serializer_errors_keep_their_fields() {
        let errs = FieldErrors::from_body(&json!({
            "year": ["A valid integer is required."],
            "brand": ["This field is required."]
        }));
        assert_eq!(errs.get("year"), &["A valid integer is required.".to_string()]);
        assert_eq!(errs.get("brand").len(), 1);
        assert!(errs.get(GENERAL).is_empty());
    }

    #[test]
    fn single_message_bodies_go_to_general() {
        let errs = FieldErrors::from_body(&json!({"error": "Invalid credentials"}));
        assert_eq!(errs.to_string(), "Invalid credentials");

        let errs = FieldErrors::from_body(&json!({"detail": "Not authorized"}));
        assert_eq!(errs.get(GENERAL), &["Not authorized".to_string()]);
    }

    #[test]
    fn nested_form_errors_are_flattened() {
        let errs = FieldErrors::from_body(&json!({
            "errors": {"password2": ["The two password fields didn't match."]}
        }));
        assert_eq!(errs.get("password2").len(), 1);
    }

    #[test]
    fn unrecognised_bodies_still_produce_a_message() {
        assert_eq!(FieldErrors::from_body(&serde_json::Value::Null).to_string(), "request rejected");
        assert_eq!(FieldErrors::from_body(&json!("nope")).to_string(), "nope");
    }

    #[test]
    fn display_joins_fields() {
        let errs = FieldErrors::from_body(&json!({"a": ["x"], "b": ["y"]}));
        assert_eq!(errs.to_string(), "a: x; b: y");
    }

    #[test]
    fn kinds_follow_variants() {
        assert_eq!(ApiError::Unauthenticated(String::new()).kind(), ErrorKind::Unauthenticated);
        assert_eq!(ApiError::NotFound(String::new()).kind(), ErrorKind::NotFound);
        assert_eq!(
            ApiError::Validation(FieldErrors::default()).kind(),
            ErrorKind::ValidationError
        );
        assert_eq!(ApiError::network("down").kind(), ErrorKind::NetworkOrServerError);
        assert!(ApiError::Unauthenticated(String::new()).is_unauthenticated());
    }

    #[test]
    fn network_and_server_failures_read_differently() {
        assert_eq!(ApiError::network("refused").to_string(), "network error: refused");
        let e = ApiError::NetworkOrServer {
            status: Some(503),
            message: "maintenance".to_string(),
        };
        assert_eq!(e.to_string(), "server error (503): maintenance");
    }
