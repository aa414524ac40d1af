//! Shared data model for `TermTodo`: tasks, filters and the persisted layout.

pub mod codec;
pub mod filter;
pub mod task;

pub use filter::Filter;
pub use task::{Task, TaskId};
