use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while converting a recipe file to HTML
#[derive(Error, Debug)]
pub enum ConvertError {
    /// No input file was given on the command line
    #[error("No input file provided")]
    Usage,

    /// Input file does not exist
    #[error("File '{}' not found", .0.display())]
    NotFound(PathBuf),

    /// Failed to read the input file
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the generated page
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_path() {
        let err = ConvertError::NotFound(PathBuf::from("recipes/pasta.cook"));
        assert_eq!(err.to_string(), "File 'recipes/pasta.cook' not found");
    }

    #[test]
    fn test_read_error_keeps_source() {
        let err = ConvertError::Read {
            path: PathBuf::from("pasta.cook"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        };
        assert!(err.to_string().starts_with("Failed to read 'pasta.cook'"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
