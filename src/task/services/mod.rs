//! Application services for the task workflow.

mod workflow;

pub use workflow::{
    CreateTaskRequest, TaskService, TaskWorkflowError, TaskWorkflowResult, UpdateTaskRequest,
};
