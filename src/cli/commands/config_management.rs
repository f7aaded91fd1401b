//! `config generate`

use crate::cli::CliError;
use crate::config::Settings;

pub const DEFAULT_SAMPLE_PATH: &str = "durablelinks.example.toml";

pub fn generate_config(output_path: Option<String>) -> Result<String, CliError> {
    let path = output_path.unwrap_or_else(|| DEFAULT_SAMPLE_PATH.to_string());
    std::fs::write(&path, Settings::generate_sample_config())
        .map_err(|e| CliError::FileError(format!("{}: {}", path, e)))?;
    Ok(path)
}
