    use serde_json::json;

    use super::*;
    use crate::model::{Car, Customer};

    #[test]
    fn page_reads_collection_and_total() {
        let page: Page<Car> = parse_page(json!({
            "cars": [{"id": 1, "brand": "Toyota", "model": "Corolla", "year": 2020}],
            "total_count": 31
        }))
        .unwrap();
        assert_eq!(page.records.len(), 1);
        assert_eq!(page.total_count, 31);
    }

    #[test]
    fn missing_total_falls_back_to_length() {
        let page: Page<Customer> = parse_page(json!({
            "customers": [{"id": 1, "name": "A"}, {"id": 2, "name": "B"}]
        }))
        .unwrap();
        assert_eq!(page.total_count, 2);
    }

    #[test]
    fn message_only_body_is_an_empty_page() {
        let page: Page<Car> = parse_page(json!({"message": "No cars found!"})).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn wrong_collection_key_is_a_server_error() {
        let err = parse_page::<Car>(json!({"customers": []})).unwrap_err();
        assert_eq!(err.kind(), crate::remote::ErrorKind::NetworkOrServerError);
    }

    #[test]
    fn malformed_records_are_a_server_error() {
        let err = parse_page::<Car>(json!({"cars": [{"brand": "no id"}]})).unwrap_err();
        assert!(err.to_string().contains("parse cars"));
    }
