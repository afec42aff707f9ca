pub mod import;
pub mod lookup;

pub use import::{ImportLogic, ImportReport};
pub use lookup::LookupLogic;
