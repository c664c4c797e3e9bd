//! Application services for comment authoring.

mod authoring;

pub use authoring::{CommentAuthoringError, CommentAuthoringResult, CommentService};
