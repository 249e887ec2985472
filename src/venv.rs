use miette::Diagnostic;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum VenvError {
    #[error("unable to launch 'python3 -m venv' for '{path}'")]
    #[diagnostic(
        code(steier::venv::spawn),
        help("Make sure python3 is installed and on PATH.")
    )]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'python3 -m venv' exited with an error for '{path}': {stderr}")]
    #[diagnostic(
        code(steier::venv::bootstrap),
        help("Inspect the interpreter output above; a partial environment can be deleted and re-created.")
    )]
    Bootstrap { path: PathBuf, stderr: String },
}

/// Provisions an isolated runtime environment at `venv_dir`.
///
/// The environment is a self-contained Python venv; `python3 -m venv`
/// bootstraps pip into it. An existing directory is treated as an
/// already-provisioned environment and skipped. The subprocess call blocks
/// until the interpreter finishes.
pub fn create(venv_dir: &Path) -> Result<(), VenvError> {
    if venv_dir.exists() {
        log::info!("Virtual environment already exists: {}", venv_dir.display());
        return Ok(());
    }

    let output = Command::new("python3")
        .arg("-m")
        .arg("venv")
        .arg(venv_dir)
        .output()
        .map_err(|error| VenvError::Spawn {
            path: venv_dir.to_path_buf(),
            source: error,
        })?;

    if !output.status.success() {
        return Err(VenvError::Bootstrap {
            path: venv_dir.to_path_buf(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    log::info!("Created virtual environment at: {}", venv_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn existing_environment_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let venv_dir = dir.path().join("venv");

        fs::create_dir(&venv_dir).unwrap();

        // no interpreter is spawned for an existing directory
        assert!(create(&venv_dir).is_ok());
        assert_eq!(fs::read_dir(&venv_dir).unwrap().count(), 0);
    }
}
