//! End-to-end functional test suite for the Swagger Petstore API.
//!
//! This library provides the fixture lifecycle, HTTP client, and cleanup
//! machinery used by the integration tests in `tests/pet_api.rs`. The tests
//! exercise a real external service and are `#[ignore]`d by default; run them
//! with `cargo test --test pet_api -- --ignored`.

pub mod client;
pub mod config;
pub mod error;
pub mod pet;
pub mod session;

pub use client::{ApiResponse, PetStoreClient};
pub use config::ApiConfig;
pub use error::{Error, Result};
pub use pet::{Category, Pet, Status, Tag};
pub use session::{CleanupEntry, CleanupOutcome, CleanupRegistry, CleanupReport, TestSession};
