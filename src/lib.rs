pub mod api;
pub mod errors;
pub mod logging;
pub mod plan;
pub mod preview;
pub mod project;
pub mod scaffold;
pub mod venv;

pub use api::{scaffold_project, SteierError};
