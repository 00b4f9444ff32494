//! # gelato-menu - Remote Menu Loading
//!
//! Fetches the hosted flavor menu over HTTP and turns it into validated
//! [`Flavor`](gelato_core::Flavor) records.
//!
//! ## Public API
//!
//! ### Menu loading (`menu`)
//! - [`MenuSource`] / [`LocalMenuSource`] - Source of raw menu records
//! - [`HttpMenu`] - The HTTP implementation (single GET, no retry)
//! - [`decode_menu()`] - Decode a document body into raw records
//! - [`load_menu()`] - Full pipeline: fetch, decode, validate
//! - [`DEFAULT_MENU_URL`] - The built-in menu document location

pub mod menu;

pub use menu::{decode_menu, load_menu, HttpMenu, LocalMenuSource, MenuSource, DEFAULT_MENU_URL};
