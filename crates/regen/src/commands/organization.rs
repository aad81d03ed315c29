//! `regen organization` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use regen_config::{CliSettings, Config};

use super::write_json_ld;
use crate::error::CliError;

/// Arguments for the organization command.
#[derive(Args)]
pub(crate) struct OrganizationArgs {
    /// Wrap the output in a `<script type="application/ld+json">` element.
    #[arg(long, conflicts_with = "pretty")]
    script: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Canonical site origin (overrides config).
    #[arg(long, env = "REGEN_SITE_URL")]
    site_url: Option<String>,

    /// Path to configuration file (default: auto-discover regen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl OrganizationArgs {
    /// Execute the organization command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, neither a business nor a site
    /// name is configured, or output cannot be written.
    pub(crate) fn execute(self, out: &mut impl Write) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            site_url: self.site_url,
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        if config.business.name.trim().is_empty() && config.site.name.trim().is_empty() {
            return Err(CliError::Validation(
                "Organization needs business.name or site.name in regen.toml".to_owned(),
            ));
        }

        let json_ld = config.synthesizer().build_organization();
        write_json_ld(out, &json_ld, self.script, self.pretty)
    }
}
