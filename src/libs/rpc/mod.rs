pub mod client;
pub mod spells;
