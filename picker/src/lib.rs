//! Calendar engine and interaction store for an embeddable date picker.
//!
//! The [`domain`] layer holds the calendar arithmetic (Gregorian and Jalali),
//! the session state machine and its observers. The [`io`] layer accepts the
//! host's configuration and intents as plain data and reports notifications in
//! canonical `YYYY/MM/DD` form.
//!
//! ```
//! use datepicker::{PickerCallbacks, PickerSession};
//! use datepicker::shared::{IntentRequest, PickerConfigRequest};
//!
//! let config = PickerConfigRequest {
//!     minimum_date: Some("2024/01/01".to_string()),
//!     maximum_date: Some("2024/12/31".to_string()),
//!     current: Some("2024/06/01".to_string()),
//!     ..Default::default()
//! };
//! let mut session = PickerSession::from_config(config, PickerCallbacks::new()).unwrap();
//! let notifications = session
//!     .apply(&IntentRequest::SelectDate { date: "2024/06/12".to_string() })
//!     .unwrap();
//! assert_eq!(notifications.len(), 1);
//! ```

pub mod domain;
pub mod io;

pub use domain::*;
pub use io::*;
pub use shared;
