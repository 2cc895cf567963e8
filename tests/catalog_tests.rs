//! Catalog and query behavior tests

use libram::config::StorageConfig;
use libram::models::Book;
use libram::repository::Repository;
use libram::services::Services;
use tempfile::TempDir;

/// Build services over backing files in a fresh temp directory
fn test_services() -> (TempDir, Services) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = StorageConfig {
        books_file: dir.path().join("books.txt"),
        borrowed_file: dir.path().join("borrowed.txt"),
    };
    let repository = Repository::open(&config).expect("Failed to open repository");
    (dir, Services::new(repository))
}

#[test]
fn test_add_then_inquire() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();

    let book = services.catalog.inquire("111").expect("book should exist");
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Herbert");
}

#[test]
fn test_inquire_missing_returns_none() {
    let (_dir, services) = test_services();
    assert!(services.catalog.inquire("999").is_none());
}

#[test]
fn test_duplicate_isbn_first_inserted_wins() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Not Dune", "Someone", "111"))
        .unwrap();

    let book = services.catalog.inquire("111").unwrap();
    assert_eq!(book.title, "Dune");
}

#[test]
fn test_delete_removes_all_matching() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Dune Again", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Emma", "Austen", "222"))
        .unwrap();

    let removed = services.catalog.delete_book("111").unwrap();
    assert_eq!(removed, 2);
    assert!(services.catalog.inquire("111").is_none());
    assert_eq!(services.catalog.available_count(), 1);
}

#[test]
fn test_delete_missing_removes_zero() {
    let (_dir, mut services) = test_services();
    assert_eq!(services.catalog.delete_book("999").unwrap(), 0);
}

#[test]
fn test_report_matches_any_field_exactly() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Emma", "Austen", "222"))
        .unwrap();

    assert_eq!(services.catalog.report("Dune").len(), 1);
    assert_eq!(services.catalog.report("Austen").len(), 1);
    assert_eq!(services.catalog.report("111").len(), 1);

    // Exact equality only, never substring
    assert!(services.catalog.report("Dun").is_empty());
    assert!(services.catalog.report("11").is_empty());
    assert!(services.catalog.report("nothing").is_empty());
}

#[test]
fn test_available_count_ignores_borrow_state() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Emma", "Austen", "222"))
        .unwrap();
    services.catalog.record_borrow("111", "Alice").unwrap();

    // Recording a borrow does not change the count: it is catalog size.
    assert_eq!(services.catalog.available_count(), 2);
}

#[test]
fn test_borrow_upsert_last_write_wins() {
    let (_dir, mut services) = test_services();

    services.catalog.record_borrow("111", "Alice").unwrap();
    services.catalog.record_borrow("111", "Bob").unwrap();

    assert_eq!(services.catalog.borrower_of("111").as_deref(), Some("Bob"));
}

#[test]
fn test_borrow_of_unknown_isbn_is_allowed() {
    let (_dir, mut services) = test_services();

    // No referential integrity: the ISBN need not exist in the catalog.
    services.catalog.record_borrow("404", "Alice").unwrap();
    assert_eq!(services.catalog.borrower_of("404").as_deref(), Some("Alice"));
    assert!(services.catalog.inquire("404").is_none());
}

#[test]
fn test_full_scenario() {
    let (_dir, mut services) = test_services();

    services
        .catalog
        .add_book(Book::new("Dune", "Herbert", "111"))
        .unwrap();
    services
        .catalog
        .add_book(Book::new("Dune", "Anonymous", "222"))
        .unwrap();

    assert_eq!(services.catalog.report("Dune").len(), 2);
    assert_eq!(services.catalog.inquire("111").unwrap().author, "Herbert");

    assert_eq!(services.catalog.delete_book("111").unwrap(), 1);
    assert!(services.catalog.inquire("111").is_none());
    assert_eq!(services.catalog.available_count(), 1);
}

#[test]
fn test_request_new_book_goes_straight_into_catalog() {
    let (_dir, mut services) = test_services();

    let Services { catalog, patrons } = &mut services;
    patrons
        .request_new_book(catalog, "Emma", "Austen", "222")
        .unwrap();

    assert_eq!(
        patrons.inquire(catalog, "222").unwrap(),
        Book::new("Emma", "Austen", "222")
    );
}

#[test]
fn test_complaint_is_formatted_not_stored() {
    let (_dir, services) = test_services();

    let line = services.patrons.complain("the catalog is out of date");
    assert_eq!(line, "User complaint: the catalog is out of date");
}
