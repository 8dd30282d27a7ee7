use thiserror::Error;

/// Introspect CLI unified error type
#[derive(Error, Debug)]
pub enum IntrospectError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("XML parse error: {0}")]
    Xml(String),

    #[error("XPath error in '{expression}': {message}")]
    XPath { expression: String, message: String },

    #[error("Field {field} has not been found")]
    FieldNotFound { field: String },

    #[error("All values of field {field} must be equal (values: {values:?})")]
    AmbiguousField { field: String, values: Vec<String> },

    #[error("Pattern {pattern} should match exactly one element (matched {count})")]
    NotUnique { pattern: String, count: usize },

    #[error("Command {command} expects arguments: {}", .expected.join(" "))]
    MissingArguments { command: String, expected: Vec<String> },

    #[error("Hosts file error at line {line}: {message}")]
    Hosts { line: usize, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output error: {0}")]
    Output(String),
}

pub type IntrospectResult<T> = Result<T, IntrospectError>;
