//! Application service layer.
//!
//! Services orchestrate the import engine and the group repository. They
//! are the boundary the CLI (or any other host) talks to.

mod contact_book_service;

pub use contact_book_service::{ContactBookService, ContactBookServiceImpl};
