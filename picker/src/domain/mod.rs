//! # Domain Module
//!
//! Calendar arithmetic and interaction state for the date picker.
//!
//! ## Module Organization
//!
//! - **gregorian / jalali**: per-system month lengths, leap rules and day counts
//! - **models**: dates, times, ranges, year windows and panel flags
//! - **calendar**: parsing, formatting, conversion, clamping and month grids
//! - **commands**: intents and the events transitions emit
//! - **interaction_store**: session state and its transition function
//! - **observers**: optional host callbacks
//! - **settings**: validated per-instance configuration
//!
//! Nothing here does I/O apart from reading the clock for "today", and nothing
//! is shared between picker instances.

pub mod calendar;
pub mod commands;
pub mod errors;
pub mod gregorian;
pub mod interaction_store;
pub mod jalali;
pub mod models;
pub mod observers;
pub mod settings;

pub use calendar::CalendarEngine;
pub use commands::*;
pub use errors::*;
pub use interaction_store::*;
pub use models::*;
pub use observers::*;
pub use settings::*;
