    use super::*;

    #[test]
    fn keeps_only_the_newest_entries() {
        let mut log = ActivityLog::default();
        for i in 0..(CAPACITY + 5) {
            log.push(EntryKind::Info, format!("entry {}", i));
        }
        assert_eq!(log.len(), CAPACITY);
        assert_eq!(log.last().map(|e| e.text.as_str()), Some("entry 204"));
        assert!(log.lines()[0].ends_with("entry 5"));
    }

    #[test]
    fn errors_are_tagged_in_the_viewer() {
        let mut log = ActivityLog::default();
        log.push(EntryKind::Error, "delete car 3: not found".to_string());
        assert!(log.lines()[0].contains("error: delete car 3"));
        assert_eq!(log.last().map(|e| e.kind), Some(EntryKind::Error));
    }
