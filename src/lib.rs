//! Libram Library Catalog Manager
//!
//! A small, single-user library catalog: an ordered list of books plus a
//! borrowed-book registry, both persisted to line-oriented flat text files.
//! The interactive console front-end lives in `main.rs`; everything it calls
//! into is exposed from this library.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
