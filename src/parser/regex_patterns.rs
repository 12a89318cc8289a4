// Memory-safe static regex pattern management
use super::regex_error::RegexError;
use regex::Regex;
use std::sync::OnceLock;

/// Line grammar: `<timestamp> [<token>] <message>`.
///
/// The bracket accepts any token so that an unknown level is reported as such
/// instead of as a structural mismatch. Digits are ASCII only.
pub static LOG_LINE: StaticPattern = StaticPattern::new(
    r"^([0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}\.[0-9]{3}Z)\s+\[([^\]]*)\]\s+(.+)$",
    "log_line",
);

/// A regex compiled on first use and shared for the life of the process.
pub struct StaticPattern {
    pattern: &'static str,
    name: &'static str,
    compiled: OnceLock<Result<Regex, RegexError>>,
}

impl StaticPattern {
    pub const fn new(pattern: &'static str, name: &'static str) -> Self {
        Self {
            pattern,
            name,
            compiled: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<&Regex, RegexError> {
        let compiled = self.compiled.get_or_init(|| {
            Regex::new(self.pattern).map_err(|source| RegexError::CompilationFailed {
                pattern: self.pattern.to_string(),
                name: self.name.to_string(),
                source,
            })
        });

        match compiled {
            Ok(regex) => Ok(regex),
            Err(e) => Err(e.clone()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
