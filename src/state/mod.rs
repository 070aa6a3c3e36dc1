//! Application state module

mod flow;
mod forms;

pub use flow::*;
pub use forms::*;
