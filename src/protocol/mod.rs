pub mod input;
pub mod output;

pub use input::{PermissionMode, StopInput};
pub use output::StopOutput;
