//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod check_content;
mod list_actors;
mod simulate;

pub use check_content::CheckContent;
pub use list_actors::ListActors;
pub use simulate::Simulate;
