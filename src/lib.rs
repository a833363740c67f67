//! VCF Contacts - a contact import engine and local contact book.
//!
//! The core is the import engine, which turns VCF and CSV files into
//! canonical contact records. Around it sit a JSON-file group store, search,
//! and link builders for dialing, SMS and WhatsApp.
//!
//! # Architecture
//!
//! - **import**: VCF/CSV readers, text decoding and format dispatch
//! - **models**: `Contact` and `ContactGroup`
//! - **domain**: validated value objects (ids, phone numbers, emails)
//! - **error**: error types for import, storage and configuration
//! - **config**: configuration from environment variables
//! - **repositories**: group storage trait and JSON-file implementation
//! - **services**: contact book operations over a repository
//! - **search**: name/phone filtering
//! - **links**: `tel:`, `sms:` and WhatsApp URIs

pub mod config;
pub mod domain;
pub mod error;
pub mod import;
pub mod links;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, ImportError, StorageError};
pub use import::{import_bytes, import_named, import_reader, ImportEngine, ImportFormat};
pub use links::{LinkSettings, WhatsAppTarget};
pub use models::{Contact, ContactGroup};
pub use repositories::{GroupRepository, JsonFileGroupRepository};
pub use services::{ContactBookService, ContactBookServiceImpl};
