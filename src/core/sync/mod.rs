//! core/sync/mod.rs
//!
//! Turning engine numbers into label text:
//! - [`time`]: ms position/duration -> `MM:SS / MM:SS`
//! - [`scroll`]: marquee rotation for long "now playing" labels

pub mod scroll;
pub mod time;

pub use scroll::Marquee;
pub use time::{initial_time_label, time_label_update};
