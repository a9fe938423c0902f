//! Countdown controller module
//!
//! This module contains the countdown core: the clock abstraction, the
//! remaining-duration breakdown, and the controller that ties them together.

pub mod clock;
pub mod controller;
pub mod remaining;

// Re-export main types
pub use clock::{Clock, SystemClock};
pub use controller::CountdownController;
pub use remaining::Remaining;
