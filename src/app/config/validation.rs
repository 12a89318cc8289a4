use super::{Config, ConfigError};
use std::path::Path;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input_file.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Input file path is required".to_string(),
            ));
        }

        if self.output_file.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Output file path is required".to_string(),
            ));
        }

        // Writing the report over the log would destroy the input.
        if Path::new(&self.input_file) == Path::new(&self.output_file) {
            return Err(ConfigError::InvalidConfig(format!(
                "Output file must differ from input file '{}'",
                self.input_file
            )));
        }

        if Path::new(&self.output_file).is_dir() {
            return Err(ConfigError::InvalidConfig(format!(
                "Output path '{}' is a directory",
                self.output_file
            )));
        }

        Ok(())
    }
}
