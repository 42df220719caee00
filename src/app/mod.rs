pub mod handler;
pub mod listing;
pub mod probe;
