//! Working-time due date arithmetic
//!
//! Given a submission timestamp and a turnaround expressed in working
//! minutes, compute when the work falls due by advancing the clock only
//! through configured working hours on configured working days. Evenings,
//! nights and non-working days are skipped without consuming turnaround.
//!
//! The heart of the crate is the `core` module: three validated value types
//! ([`WorkingTimeConfig`], [`SubmitInstant`], [`Turnaround`]) and the
//! [`DueDateCalculator`] that ties them together. Everything else is glue
//! around it.

pub mod core;
pub mod error;
pub mod logging;
pub mod settings;

pub use crate::core::calculator::DueDateCalculator;
pub use crate::core::config::WorkingTimeConfig;
pub use crate::core::submit::SubmitInstant;
pub use crate::core::turnaround::Turnaround;
pub use crate::error::{DueDateError, Result};
pub use crate::settings::Settings;
