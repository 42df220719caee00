pub mod config;
pub mod error;
pub mod explorer;
pub mod networks;
pub mod rpc;
pub mod writing;
