use std::fs;

use tracing::error;

use crate::config::ConfigError;

/// Reads a secret either from the file named by `file_var` or directly from
/// `var`. The file takes precedence when both are set.
pub fn get_secret<F>(
    lookup: F,
    file_var: &'static str,
    var: &str,
) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(file_var) {
        Some(secret_file_path) => match fs::read_to_string(&secret_file_path) {
            Ok(content) => Ok(Some(content.trim().to_string())),
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                Err(ConfigError::SecretFile {
                    name: file_var,
                    source: e,
                })
            }
        },
        None => Ok(lookup(var)),
    }
}
