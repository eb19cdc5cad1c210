//! Unda Portal Client - a Rust client for the Unda community portal's public
//! registration API.
//!
//! The crate does two things: it normalizes loosely formatted Kenyan phone
//! numbers and dates into the canonical forms the portal backend accepts, and
//! it submits member/champion registrations (plus login) as single JSON POST
//! requests, returning the parsed response body for every HTTP status.
//!
//! # Architecture
//!
//! - **normalize**: pure phone/date normalization and validation helpers
//! - **models**: registration and login payloads, typed response receipts
//! - **client**: sync HTTP client plus an async wrapper
//! - **error**: error types and HTTP status classification for callers
//! - **config**: configuration management from environment variables
//! - **settings**: theme preference behind an explicit settings store
//! - **metrics**: request counters
//! - **observability**: tracing setup
//!
//! # Example
//!
//! ```no_run
//! use unda_portal_client::{Config, MemberRegistration, PortalClient};
//!
//! let config = Config::from_env()?;
//! let client = PortalClient::new(&config);
//! let registration = MemberRegistration {
//!     full_name: "Test User".to_string(),
//!     phone_number: "0712345678".to_string(),
//!     username: "testuser".to_string(),
//!     password: "P@ssw0rd1".to_string(),
//!     email: None,
//!     date_of_birth: Some("2002-01-01".to_string()),
//!     gender: None,
//!     county_sub_county: None,
//! };
//! let response = client.register_member(&registration)?;
//! println!("{}", response);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod models;
pub mod normalize;
pub mod observability;
pub mod settings;

pub use client::{AsyncPortalClient, AsyncPortalClientImpl, PortalClient};
pub use config::Config;
pub use error::{classify_status, ConfigError, ErrorKind, PortalApiError, PortalApiResult};
pub use metrics::{Metrics, MetricsSummary};
pub use models::{
    ChampionRegistration, ChampionRegistrationReceipt, LoginCredentials, MemberRegistration,
    MemberRegistrationReceipt,
};
pub use normalize::{
    format_date_yyyy_mm_dd, is_valid_date_yyyy_mm_dd, is_valid_phone_for_champion, normalize_phone,
};
pub use settings::{MemorySettingsStore, SettingsStore, ThemePreference};
