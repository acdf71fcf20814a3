pub mod state;
pub mod navigation;
pub mod file_ops;
pub mod pointer;

pub use state::*;
