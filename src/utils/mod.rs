//! Utility modules shared by the catalogs and evaluators
//!
//! - Names: catalog keys, case-insensitive matching, list splitting
//! - Days: clamped elapsed-day arithmetic

pub mod names;
pub mod days;

// Re-export commonly used helpers
pub use names::{catalog_key, display_name, names_match, split_name_list};
pub use days::{clamp_day_count, elapsed_days, format_days};
