use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum ProjectError {
    #[error("project name cannot be empty")]
    #[diagnostic(
        code(steier::project::empty_name),
        help("Provide at least one non-whitespace character.")
    )]
    EmptyName,
}

/// A validated project: the trimmed name and the root directory derived from it.
#[derive(Debug, Clone)]
pub struct Project {
    pub name: String,
    pub root: PathBuf,
}
impl Project {
    /// Trims surrounding whitespace from `raw` and derives the root path.
    /// Nothing touches the filesystem until validation has passed.
    pub fn from_input(raw: &str) -> Result<Self, ProjectError> {
        let name = raw.trim();

        if name.is_empty() {
            return Err(ProjectError::EmptyName);
        }

        Ok(Project {
            name: name.to_string(),
            root: PathBuf::from(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let project = Project::from_input("  demo \n").unwrap();

        assert_eq!(project.name, "demo");
        assert_eq!(project.root, PathBuf::from("demo"));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(Project::from_input("").is_err());
    }

    #[test]
    fn rejects_whitespace_only_input() {
        assert!(Project::from_input("   \t\n").is_err());
    }
}
