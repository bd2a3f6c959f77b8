pub mod records;
pub mod snapshot;
