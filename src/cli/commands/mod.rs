pub mod import;
pub mod lookup;
