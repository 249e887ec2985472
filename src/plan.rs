use crate::project::Project;
use std::path::PathBuf;

pub const STORAGE_DIR: &str = "storage";
pub const DATA_DIR: &str = "data";
pub const LOGS_DIR: &str = "logs";
pub const SCRIPTS_DIR: &str = "scripts";
pub const SRC_DIR: &str = "src";
pub const VENV_DIR: &str = "venv";
pub const KEEP_FILE: &str = ".gitkeep";
pub const README_FILE: &str = "README.md";
pub const MAKEFILE_FILE: &str = "Makefile";
pub const ENTRY_POINT_FILE: &str = "main.py";
pub const LOG_FILE: &str = "scaffold.log";

pub const MAKEFILE_STUB: &str = "# Makefile\n";

pub const ENTRY_POINT_TEMPLATE: &str = r#"#!/usr/bin/env python
"""
This is the entry point of your project.
It is pre-configured with logging (both to console and file, if desired).
"""

import logging
import os
from pathlib import Path

# Configure logging
logging.basicConfig(level=logging.INFO, format='%(asctime)s [%(levelname)s] %(message)s')
logger = logging.getLogger(__name__)

def main():
    logger.info('Hello, world! This is main.py in your project.')
    print('Hello, world!')

if __name__ == '__main__':
    main()
"#;

/// A single provisioning step, staged in memory before anything touches disk.
#[derive(Debug, Clone)]
pub enum Step {
    /// Create a directory and any missing ancestors.
    Dir(PathBuf),
    /// Create a file with the given body; existing files are left untouched.
    File { path: PathBuf, content: String },
    /// Attach the file log sink at the given path.
    FileLogging(PathBuf),
    /// Provision an isolated runtime environment at the given directory.
    RuntimeEnv(PathBuf),
    /// OR execute bits into the file's permissions.
    Executable(PathBuf),
}

/// The ordered provisioning sequence for one project.
///
/// Steps are applied strictly in the order they appear here; each one is
/// individually idempotent, so a partially applied plan can be re-run as is.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    pub steps: Vec<Step>,
}
impl ProjectPlan {
    pub fn for_project(project: &Project) -> Self {
        let root = project.root.clone();
        let storage = root.join(STORAGE_DIR);
        let data = storage.join(DATA_DIR);
        let logs = storage.join(LOGS_DIR);
        let src = root.join(SRC_DIR);
        let entry_point = src.join(ENTRY_POINT_FILE);

        let steps = vec![
            Step::Dir(root.clone()),
            Step::Dir(storage),
            Step::Dir(data.clone()),
            Step::Dir(logs.clone()),
            Step::File {
                path: data.join(KEEP_FILE),
                content: String::new(),
            },
            Step::File {
                path: logs.join(KEEP_FILE),
                content: String::new(),
            },
            Step::FileLogging(logs.join(LOG_FILE)),
            Step::RuntimeEnv(root.join(VENV_DIR)),
            Step::File {
                path: root.join(README_FILE),
                content: format!("# {}\n", project.name),
            },
            Step::File {
                path: root.join(MAKEFILE_FILE),
                content: MAKEFILE_STUB.to_string(),
            },
            Step::Dir(root.join(SCRIPTS_DIR)),
            Step::Dir(src),
            Step::File {
                path: entry_point.clone(),
                content: ENTRY_POINT_TEMPLATE.to_string(),
            },
            Step::Executable(entry_point),
        ];

        ProjectPlan { steps }
    }

    /// Paths the plan will materialize on disk, as `(path, is_file)` pairs.
    /// The executable step has no footprint of its own.
    pub fn footprint(&self) -> Vec<(PathBuf, bool)> {
        self.steps
            .iter()
            .filter_map(|step| match step {
                Step::Dir(path) => Some((path.clone(), false)),
                Step::File { path, .. } => Some((path.clone(), true)),
                Step::FileLogging(path) => Some((path.clone(), true)),
                Step::RuntimeEnv(path) => Some((path.clone(), false)),
                Step::Executable(_) => None,
            })
            .collect()
    }
}
