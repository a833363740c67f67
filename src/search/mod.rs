//! Contact search.
//!
//! Case-insensitive substring filtering over names and phone numbers.

pub mod filter;

pub use filter::{contact_matches, filter_groups, SearchQuery};
