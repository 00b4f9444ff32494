//! # gelato-core - Core Domain Types
//!
//! Foundation crate for gelato. Provides the flavor record model, the
//! validating menu parser, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Flavors (`flavor`)
//! - [`Flavor`] - One validated menu entry (display name + scoop image reference)
//! - [`RawRecord`] - Loosely-typed dictionary as decoded from the remote menu
//! - [`parse_menu()`] - Validate a raw sequence, dropping malformed entries
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - File-based tracing setup (the terminal belongs to the TUI)
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use gelato_core::prelude::*;
//! ```

pub mod error;
pub mod flavor;
pub mod logging;

/// Prelude for common imports used throughout all gelato crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use flavor::{parse_menu, Flavor, RawRecord, KEY_IMAGE, KEY_NAME};
