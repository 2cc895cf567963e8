//! Libram - Library Catalog Manager
//!
//! Interactive console front-end: a role-selection menu (administrator or
//! user) over the catalog and borrow-registry services. All persistence is
//! owned by the repository layer; this loop only reads prompts and prints
//! results.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use libram::{
    config::AppConfig,
    repository::Repository,
    services::Services,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("libram={}", config.logging.level).into());

    if config.logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting Libram v{}", env!("CARGO_PKG_VERSION"));

    // Open the file-backed stores and build the services
    let repository = Repository::open(&config.storage)?;
    let mut services = Services::new(repository);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("Please select the user:\n1. Administrator\n2. User");
        let Some(role) = next_line(&mut lines)? else {
            break;
        };

        match role.as_str() {
            "1" => admin_menu(&mut services, &mut lines)?,
            "2" => user_menu(&mut services, &mut lines)?,
            _ => println!("Invalid user type."),
        }
    }

    Ok(())
}

/// Administrator menu: catalog mutations, lookups, and reporting
fn admin_menu(
    services: &mut Services,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    println!(
        "Administrator menu:\n\
         a) Add book\n\
         b) Add borrower\n\
         c) Delete book\n\
         d) Inquire\n\
         e) Check availability\n\
         f) Generate report"
    );
    let Some(choice) = next_line(lines)? else {
        return Ok(());
    };

    match choice.as_str() {
        "a" => {
            println!("Enter book title, author, and ISBN:");
            let (Some(title), Some(author), Some(isbn)) =
                (next_line(lines)?, next_line(lines)?, next_line(lines)?)
            else {
                return Ok(());
            };
            let book = libram::models::Book::new(title, author, isbn);
            if let Err(e) = services.catalog.add_book(book) {
                tracing::error!("Failed to save books: {}", e);
            }
        }
        "b" => {
            println!("Enter book ISBN and borrower name:");
            let (Some(isbn), Some(borrower)) = (next_line(lines)?, next_line(lines)?) else {
                return Ok(());
            };
            if let Err(e) = services.catalog.record_borrow(&isbn, &borrower) {
                tracing::error!("Failed to save borrowed books: {}", e);
            }
        }
        "c" => {
            println!("Enter book ISBN to delete:");
            let Some(isbn) = next_line(lines)? else {
                return Ok(());
            };
            if let Err(e) = services.catalog.delete_book(&isbn) {
                tracing::error!("Failed to save books: {}", e);
            }
        }
        "d" => {
            println!("Enter book ISBN to inquire:");
            let Some(isbn) = next_line(lines)? else {
                return Ok(());
            };
            match services.catalog.inquire(&isbn) {
                Some(book) => println!("Book Found: {}, {}", book.title, book.author),
                None => println!("Book not found."),
            }
        }
        "e" => {
            println!(
                "Number of available books: {}",
                services.catalog.available_count()
            );
        }
        "f" => {
            println!("Enter book title, author, or ISBN to generate report:");
            let Some(query) = next_line(lines)? else {
                return Ok(());
            };
            let report = services.catalog.report(&query);
            if report.is_empty() {
                println!("No books found for this input.");
            } else {
                for book in report {
                    println!("Report: {}, {}", book.title, book.author);
                }
            }
        }
        _ => println!("Invalid choice."),
    }

    Ok(())
}

/// User menu: inquiry, new-book requests, and complaints
fn user_menu(
    services: &mut Services,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<()> {
    println!(
        "User menu:\n\
         a) Inquire\n\
         b) Request new book\n\
         c) Complain"
    );
    let Some(choice) = next_line(lines)? else {
        return Ok(());
    };

    match choice.as_str() {
        "a" => {
            println!("Enter book ISBN to inquire:");
            let Some(isbn) = next_line(lines)? else {
                return Ok(());
            };
            match services.patrons.inquire(&services.catalog, &isbn) {
                Some(book) => println!("Book Found: {}, {}", book.title, book.author),
                None => println!("Book not found."),
            }
        }
        "b" => {
            println!("Enter book title, author, and ISBN for new book:");
            let (Some(title), Some(author), Some(isbn)) =
                (next_line(lines)?, next_line(lines)?, next_line(lines)?)
            else {
                return Ok(());
            };
            if let Err(e) =
                services
                    .patrons
                    .request_new_book(&mut services.catalog, &title, &author, &isbn)
            {
                tracing::error!("Failed to save books: {}", e);
            }
        }
        "c" => {
            println!("Enter your complaint:");
            let Some(complaint) = next_line(lines)? else {
                return Ok(());
            };
            println!("{}", services.patrons.complain(&complaint));
        }
        _ => println!("Invalid choice."),
    }

    Ok(())
}

/// Read the next trimmed input line; `None` means end of input
fn next_line(
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> anyhow::Result<Option<String>> {
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_string())),
        None => Ok(None),
    }
}
