use crate::{
    errors::{FileOperation, IoError},
    logging,
    plan::{ProjectPlan, Step},
    venv::{self, VenvError},
};
use miette::Diagnostic;
use std::{fs, path::Path};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error while provisioning the project tree")]
    #[diagnostic(code(steier::scaffold::io))]
    Io(#[from] IoError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Venv(#[from] VenvError),
}

/// Creates `path` and any missing ancestor directories.
///
/// An already-existing directory is a success; its contents are not touched.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the underlying create fails for any reason
/// other than pre-existence, such as a permission error.
pub fn create_directory(path: &Path) -> Result<(), ScaffoldError> {
    if path.exists() {
        log::info!("Directory already exists: {}", path.display());
        return Ok(());
    }

    fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.to_path_buf(), error))?;

    log::info!("Created directory: {}", path.display());

    Ok(())
}

/// Writes `content` as the full body of a new file at `path`.
///
/// An already-existing file is a success and keeps its current content, even
/// when `content` differs.
///
/// # Errors
///
/// Returns a [`ScaffoldError`] if the write itself fails.
pub fn create_file(path: &Path, content: &str) -> Result<(), ScaffoldError> {
    if path.exists() {
        log::info!("File already exists: {}", path.display());
        return Ok(());
    }

    fs::write(path, content)
        .map_err(|error| IoError::new(FileOperation::Write, path.to_path_buf(), error))?;

    log::info!("Created file: {}", path.display());

    Ok(())
}

/// ORs owner, group, and other execute bits into the permissions of `path`,
/// keeping whatever read/write bits were already set.
pub fn make_executable(path: &Path) -> Result<(), ScaffoldError> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path)
            .map_err(|error| IoError::new(FileOperation::Chmod, path.to_path_buf(), error))?;

        let mut permissions = metadata.permissions();
        permissions.set_mode(permissions.mode() | 0o111);

        fs::set_permissions(path, permissions)
            .map_err(|error| IoError::new(FileOperation::Chmod, path.to_path_buf(), error))?;

        log::info!("Set executable permissions for: {}", path.display());
    }

    #[cfg(not(unix))]
    {
        log::info!(
            "Executable permissions not applicable on this platform: {}",
            path.display()
        );
    }

    Ok(())
}

/// Applies every step of `plan` strictly in order, stopping at the first
/// failure. Completed steps are left in place; there is no rollback, and a
/// re-run skips whatever already exists.
pub fn apply(plan: &ProjectPlan) -> Result<(), ScaffoldError> {
    for step in &plan.steps {
        match step {
            Step::Dir(path) => create_directory(path)?,
            Step::File { path, content } => create_file(path, content)?,
            Step::FileLogging(path) => logging::attach_file(path)?,
            Step::RuntimeEnv(path) => venv::create(path)?,
            Step::Executable(path) => make_executable(path)?,
        }
    }

    Ok(())
}
