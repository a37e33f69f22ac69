//! Library session integration tests

use smart_library::{
    config::LibraryConfig,
    models::{LoanOutcome, LoanRequest, NewBook, NewUser},
    AppError, Library,
};

fn config() -> LibraryConfig {
    LibraryConfig {
        root_category: "Root".to_string(),
        history_display: 20,
    }
}

/// Library with two books, two users and nothing else
fn seeded_library() -> Library {
    let mut lib = Library::with_config(&config());
    lib.add_book(NewBook::new("B1", "Author One", "isbn-1")).unwrap();
    lib.add_book(NewBook::new("B2", "Author Two", "isbn-2")).unwrap();
    lib.add_user(NewUser::new("u1", "Ada")).unwrap();
    lib.add_user(NewUser::new("u2", "Grace")).unwrap();
    lib
}

#[test]
fn test_remove_book_cascades_through_every_structure() {
    let mut lib = seeded_library();
    lib.relate_books("B1", "B2").unwrap();
    lib.request_loan("u1", "isbn-1").unwrap();
    lib.request_loan("u2", "isbn-2").unwrap();
    lib.request_loan("u2", "isbn-1").unwrap();
    lib.add_book_to_category(&["Root", "Fiction"], "isbn-1").unwrap();
    lib.add_book_to_category(&["Root", "Fiction"], "isbn-2").unwrap();

    let removed = lib.remove_book("isbn-1").unwrap();
    assert_eq!(removed.title, "B1");

    // Record list
    assert!(lib.find_book_by_isbn("isbn-1").is_none());
    // Relation graph
    assert!(!lib.related_books("B2").contains(&"B1".to_string()));
    assert!(!lib.relations().contains("B1"));
    assert!(lib.relations().is_symmetric());
    // Request queue, remaining order intact
    assert_eq!(lib.pending_requests(), vec![LoanRequest::new("u2", "isbn-2")]);
    // Category tree
    let fiction = lib.find_category(&["Root", "Fiction"]).unwrap();
    assert_eq!(fiction.books, vec!["B2".to_string()]);

    assert_eq!(lib.last_action().unwrap().action, "Book removed: B1");
}

#[test]
fn test_remove_book_filed_twice_leaves_no_category_entry() {
    let mut lib = seeded_library();
    lib.add_book_to_category(&["Root", "Fiction"], "isbn-1").unwrap();
    lib.add_book_to_category(&["Root", "Fiction"], "isbn-1").unwrap();
    assert_eq!(
        lib.find_category(&["Root", "Fiction"]).unwrap().books,
        vec!["B1".to_string()]
    );

    lib.remove_book("isbn-1").unwrap();

    assert!(!lib.categories().contains_book("B1"));
    assert!(lib.find_category(&["Root", "Fiction"]).unwrap().books.is_empty());
}

#[test]
fn test_failed_loan_is_consumed_then_queue_reports_empty() {
    let mut lib = seeded_library();
    lib.request_loan("u1", "isbn-1").unwrap();
    assert!(lib.process_next_loan().is_granted());

    lib.request_loan("u2", "isbn-1").unwrap();
    let outcome = lib.process_next_loan();
    assert_eq!(
        outcome,
        LoanOutcome::Refused {
            request: LoanRequest::new("u2", "isbn-1")
        }
    );
    assert_eq!(lib.process_next_loan(), LoanOutcome::NoPendingRequests);
}

#[test]
fn test_removing_book_drops_its_queued_requests() {
    let mut lib = seeded_library();
    lib.request_loan("u1", "isbn-2").unwrap();
    lib.request_loan("u1", "isbn-1").unwrap();

    // Removal drops the queued request for isbn-2 entirely
    lib.remove_book("isbn-2").unwrap();
    assert_eq!(lib.pending_requests(), vec![LoanRequest::new("u1", "isbn-1")]);
    assert!(lib.process_next_loan().is_granted());
}

#[test]
fn test_two_step_suggestions() {
    let mut lib = Library::with_config(&config());
    for (title, isbn) in [("A", "a"), ("B", "b"), ("C", "c")] {
        lib.add_book(NewBook::new(title, "X", isbn)).unwrap();
    }
    lib.relate_books("A", "B").unwrap();
    lib.relate_books("B", "C").unwrap();

    assert_eq!(lib.suggest_books("A"), vec!["C".to_string()]);
    assert!(lib.suggest_books("B").is_empty());
}

#[test]
fn test_category_path_is_created_on_demand() {
    let mut lib = seeded_library();
    lib.add_book_to_category(&["Root", "Science"], "isbn-2").unwrap();

    let science = lib.find_category(&["Root", "Science"]).unwrap();
    assert!(science.books.contains(&"B2".to_string()));

    let err = lib.add_category(&["Biblioteca", "Science"]).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_snapshot_round_trip_restores_all_structures() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("library.json");

    let mut lib = seeded_library();
    lib.relate_books("B1", "B2").unwrap();
    lib.add_book_to_category(&["Root", "Fiction", "Classics"], "isbn-1").unwrap();
    lib.request_loan("u1", "isbn-2").unwrap();
    lib.request_loan("u2", "isbn-1").unwrap();
    lib.process_next_loan();
    lib.request_loan("u2", "isbn-2").unwrap();
    lib.save(&path).unwrap();

    let restored = Library::load(&path, &config()).unwrap();

    assert_eq!(restored.list_books(), lib.list_books());
    assert!(!restored.find_book_by_isbn("isbn-2").unwrap().available);
    assert_eq!(restored.list_users(), lib.list_users());
    assert_eq!(restored.categories(), lib.categories());
    assert_eq!(restored.relations(), lib.relations());
    assert_eq!(restored.pending_requests(), lib.pending_requests());
    assert_eq!(restored.history_entries(), lib.history_entries());
    assert_eq!(restored.snapshot(), lib.snapshot());
}

#[test]
fn test_load_without_snapshot_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    let lib = Library::load(&dir.path().join("missing.json"), &config()).unwrap();

    assert_eq!(lib.book_count(), 0);
    assert_eq!(lib.user_count(), 0);
    assert!(lib.pending_requests().is_empty());
    assert!(lib.history_entries().is_empty());
    assert_eq!(lib.categories().name, "Root");
    assert!(lib.relations().is_empty());
}

#[test]
fn test_load_corrupt_snapshot_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("corrupt.json");
    std::fs::write(&path, "[1, 2").unwrap();

    let err = Library::load(&path, &config()).unwrap_err();
    assert!(matches!(err, AppError::Snapshot(_)));
}

#[test]
fn test_history_records_every_mutation() {
    let mut lib = seeded_library();
    lib.request_loan("u1", "isbn-1").unwrap();
    lib.process_next_loan();
    lib.return_book("isbn-1").unwrap();

    let actions: Vec<String> = lib
        .recent_history(3)
        .into_iter()
        .map(|e| e.action.clone())
        .collect();
    assert_eq!(
        actions,
        vec![
            "Book returned: isbn-1".to_string(),
            "Loan processed: u1 got isbn-1".to_string(),
            "Loan requested: u1 -> isbn-1".to_string(),
        ]
    );
    assert_eq!(lib.history_entries().len(), 7);
}
