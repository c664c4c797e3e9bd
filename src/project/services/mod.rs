//! Application services for project management.

mod management;

pub use management::{
    CreateProjectRequest, ProjectManagementError, ProjectManagementResult, ProjectService,
};
