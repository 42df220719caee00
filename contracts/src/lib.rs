pub mod abi;
pub mod calls;

pub use calls::*;
