//! Value types of the picker domain: dates, times, bounds and panel flags.

pub mod date;
pub mod panel;
pub mod range;
pub mod time;

pub use date::*;
pub use panel::*;
pub use range::*;
pub use time::*;
