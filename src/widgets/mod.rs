//! Reusable UI widgets for the dashboard

mod date_range;
mod player_select;

pub use date_range::DateRange;
pub use player_select::PlayerSelect;
