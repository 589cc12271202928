use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // Command errors
    #[error("Unknown command: `{0}`")]
    UnknownCommand(String),

    #[error("More argument required for `{0}`")]
    MissingArgument(String),

    #[error("Cannot parse `{0}` as {1}")]
    ParseArgument(String, String),

    // Editor errors
    #[error("Line {0} is out of range (1..={1})")]
    LineOutOfRange(usize, usize),
}
