//! Domain model for project-scoped tasks.
//!
//! The task aggregate owns the field-diff logic that drives history
//! recording; everything infrastructure-shaped stays outside the domain
//! boundary.

mod error;
mod ids;
mod priority;
mod status;
mod task;

pub use error::TaskDomainError;
pub use ids::TaskId;
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{FieldChange, NewTask, PROJECT_TASK_CAP, PersistedTaskData, Task, TaskUpdate};
