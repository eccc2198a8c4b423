//! Tool definitions module.
//!
//! Each tool is defined in its own file.

pub mod calculate;
pub mod hello_world;

pub use calculate::{CalculateParams, CalculateTool, Operation};
pub use hello_world::{HelloWorldParams, HelloWorldTool};
