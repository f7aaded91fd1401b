//! `validate`: structural durable-link check

use crate::client::DurableLinks;
use crate::cli::CliError;
use crate::config::Settings;

/// Returns whether `url` is a durable link.
///
/// Hosts given on the command line replace the ones from settings.
pub fn validate_link(
    url: &str,
    allowed_hosts: Vec<String>,
    settings: &Settings,
) -> Result<bool, CliError> {
    let hosts = if allowed_hosts.is_empty() {
        settings.allowed_hosts.clone()
    } else {
        allowed_hosts
    };

    if hosts.is_empty() {
        return Err(CliError::ParseError(
            "No allowed hosts: pass --allowed-host or set allowed_hosts in settings".to_string(),
        ));
    }

    let links = DurableLinks::new();
    links.configure(hosts)?;
    Ok(links.is_valid_durable_link_str(url))
}
