//! Diesel row models for project persistence.

use super::schema::projects;
use crate::project::{
    domain::{Project, ProjectId, ProjectName},
    ports::{ProjectRepositoryError, ProjectRepositoryResult},
};
use diesel::prelude::*;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Store-assigned project identifier.
    pub id: i32,
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

impl ProjectRow {
    /// Converts a persisted row into the domain aggregate.
    ///
    /// Fails as a persistence error when the stored name no longer passes
    /// domain validation.
    pub(crate) fn into_domain(self) -> ProjectRepositoryResult<Project> {
        let name = ProjectName::new(self.name).map_err(ProjectRepositoryError::persistence)?;
        Ok(Project::from_persisted(
            ProjectId::new(self.id),
            name,
            self.description,
        ))
    }
}

/// Insert model for project records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}
