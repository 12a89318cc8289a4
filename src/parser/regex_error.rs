// Regex error handling for lazily compiled static patterns
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum RegexError {
    #[error("Regex compilation failed for pattern '{pattern}' (name: {name}): {source}")]
    CompilationFailed {
        pattern: String,
        name: String,
        #[source]
        source: regex::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_compilation_failed_display_names_pattern() {
        let invalid_pattern = r"[invalid regex pattern";
        let source = Regex::new(invalid_pattern).unwrap_err();

        let error = RegexError::CompilationFailed {
            pattern: invalid_pattern.to_string(),
            name: "broken".to_string(),
            source,
        };

        let message = error.to_string();
        assert!(message.contains("[invalid regex pattern"));
        assert!(message.contains("broken"));
    }
}
