//! Domain-focused tests for project name validation.

use crate::project::domain::{Project, ProjectDomainError, ProjectId, ProjectName};
use rstest::rstest;

#[rstest]
fn project_name_accepts_and_trims_valid_values() {
    let name = ProjectName::new("  Website Relaunch  ").expect("valid project name");

    assert_eq!(name.as_str(), "Website Relaunch");
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("\t\n")]
fn project_name_rejects_blank_values(#[case] raw: &str) {
    let result = ProjectName::new(raw);

    assert_eq!(result, Err(ProjectDomainError::EmptyName));
}

#[rstest]
fn project_from_persisted_exposes_its_fields() {
    let name = ProjectName::new("Migration").expect("valid project name");
    let project = Project::from_persisted(
        ProjectId::new(3),
        name.clone(),
        Some("Move billing off the legacy stack".to_owned()),
    );

    assert_eq!(project.id(), ProjectId::new(3));
    assert_eq!(project.name(), &name);
    assert_eq!(
        project.description(),
        Some("Move billing off the legacy stack")
    );
}
