//! Data models for imported contacts.
//!
//! `Contact` is the canonical record produced by the import engine;
//! `ContactGroup` is the named batch a single import is stored under.

pub mod contact;
pub mod group;

pub use contact::Contact;
pub use group::ContactGroup;
