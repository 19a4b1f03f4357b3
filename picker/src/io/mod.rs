//! # IO Module
//!
//! Adapter between the host's plain-data surface (`shared` DTOs with canonical
//! date strings) and the domain types.
//!
//! - **mappers**: DTO <-> domain conversion, including configuration validation
//! - **session**: [`PickerSession`], the DTO-level entry point a host embeds

pub mod mappers;
pub mod session;

pub use mappers::*;
pub use session::PickerSession;
