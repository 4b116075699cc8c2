// Academic Financial Management - Core Library
// In-memory CRUD over Person, Address, Tuition and Scholarship records.
// Exposes the core for the API server and tests.

pub mod record;
pub mod patch;
pub mod merge;
pub mod filter;
pub mod store;
pub mod error;
pub mod entities;
pub mod validation;
pub mod controller;
pub mod config;

#[cfg(feature = "server")]
pub mod api;

// Re-export commonly used types
pub use record::{EntityKind, Record};
pub use patch::Patch;
pub use merge::Merge;
pub use filter::Filter;
pub use store::Store;
pub use error::{StoreError, StoreResult};
pub use entities::{
    Disposable, Entity,
    Address, AddressQuery, AddressUpdate,
    Person, PersonQuery, PersonUpdate,
    Tuition, TuitionQuery, TuitionType, TuitionUpdate, Semester,
    Scholarship, ScholarshipQuery, ScholarshipType, ScholarshipUpdate,
};
pub use validation::{Validate, ValidationError};
pub use controller::Controller;
pub use config::ServerConfig;

#[cfg(feature = "server")]
pub use api::{router, ApiError, AppState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
