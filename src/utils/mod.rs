pub mod formatting;
pub mod path;

pub use formatting::format_entry;
