//! # cartkit
//!
//! Async Rust client for storefront AJAX cart endpoints:
//! - Add items, change quantities, fetch and clear the cart
//! - Update cart note and attributes
//! - Trigger and poll shipping-rate computation
//! - Structured, flag-gated logging of arguments, responses, and errors
//!
//! Every operation performs a single request/response exchange and returns
//! the remote's JSON verbatim. Failures surface as one generic error that
//! wraps the underlying cause.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cartkit::{Client, LineItem, LoggingConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::builder()
//!         .base_url("https://shop.example.com")
//!         .logging(LoggingConfig::new().log_errors(true))
//!         .build()?;
//!
//!     client.cart().add_item(LineItem::new(39887860530).quantity(2)).await?;
//!
//!     let cart = client.cart().get().await?;
//!     println!("{}", cart["item_count"]);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::{ClientConfig, ClientConfigBuilder, LoggingConfig};
pub use error::{Error, Result, TransportError};
pub use types::*;

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;

// Re-export key dependencies for convenience
pub use serde::{Deserialize, Serialize};
pub use serde_json::Value as JsonValue;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use cartkit::prelude::*;
/// ```
pub mod prelude {

    pub use crate::{
        Client, ClientConfig, Error, LoggingConfig, Result,
        types::{ApiResponse, CartChange, CartUpdate, LineItem, LineTarget, ShippingAddress},
    };
}

/// Crate version, automatically updated from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
