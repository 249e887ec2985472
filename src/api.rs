use crate::{
    plan::ProjectPlan,
    preview,
    project::{self, Project},
    scaffold,
};

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SteierError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Project(#[from] project::ProjectError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),
}

/// Scaffolds a new project named `name` under the current working directory.
///
/// The name is trimmed of surrounding whitespace and becomes the root
/// directory. Every provisioning step is idempotent, so calling this again
/// on an existing project leaves its contents untouched and reports each
/// entry as already existing.
///
/// # Errors
///
/// Returns a [`SteierError`] if:
///
/// - The trimmed name is empty (nothing is created in that case).
/// - A directory or file cannot be created or written to.
/// - The log file cannot be opened inside the storage area.
/// - The runtime environment cannot be provisioned.
/// - The executable flag cannot be applied to the entry-point file.
pub fn scaffold_project(name: &str) -> Result<(), SteierError> {
    let project = Project::from_input(name)?;

    log::debug!("Scaffolding project at: {}", project.root.display());

    let plan = ProjectPlan::for_project(&project);

    preview::print_layout(&plan);

    scaffold::apply(&plan)?;

    Ok(())
}
