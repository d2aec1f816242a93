use thiserror::Error;

/// Errors surfaced while driving external tools
#[derive(Error, Debug)]
pub enum DemoError {
    /// A required command-line tool could not be resolved on PATH
    #[error("{tool} is not installed or not in PATH. Please install from {install_url}")]
    ToolMissing { tool: String, install_url: String },

    /// An external call exited non-zero
    #[error("{stderr}")]
    CommandFailed { stderr: String },
}
