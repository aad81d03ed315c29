//! `regen breadcrumbs` command implementation.

use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use regen_config::{CliSettings, Config};

use crate::error::CliError;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    /// Page path, e.g. `/blog/soil-health`.
    path: String,

    /// Emit a `Home`-only trail for the root path (overrides config).
    #[arg(long)]
    show_on_home: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Path to configuration file (default: auto-discover regen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BreadcrumbsArgs {
    /// Execute the breadcrumbs command.
    ///
    /// Writes the trail as a JSON array of `{name, url, position}` entries.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or output cannot be written.
    pub(crate) fn execute(self, out: &mut impl Write) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            show_on_home: self.show_on_home.then_some(true),
            ..Default::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let trail = config
            .segmenter()
            .segment(&self.path, config.breadcrumbs.show_on_home);
        tracing::info!(path = %self.path, entries = trail.len(), "Derived breadcrumbs");

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&trail)?
        } else {
            serde_json::to_string(&trail)?
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn run(args: BreadcrumbsArgs) -> serde_json::Value {
        let mut out = Vec::new();
        args.execute(&mut out).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    fn config_file(dir: &tempfile::TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("regen.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_breadcrumbs_with_labels() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "[breadcrumbs.labels]\ncsa = \"CSA Shares\"\n");

        let value = run(BreadcrumbsArgs {
            path: "/csa/summer-box".to_owned(),
            show_on_home: false,
            pretty: false,
            config: Some(config),
        });

        assert_eq!(
            value,
            json!([
                {"name": "Home", "url": "/", "position": 1},
                {"name": "CSA Shares", "url": "/csa", "position": 2},
                {"name": "Summer Box", "url": "/csa/summer-box", "position": 3},
            ])
        );
    }

    #[test]
    fn test_breadcrumbs_home_hidden_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "");

        let value = run(BreadcrumbsArgs {
            path: "/".to_owned(),
            show_on_home: false,
            pretty: true,
            config: Some(config),
        });

        assert_eq!(value, json!([]));
    }

    #[test]
    fn test_breadcrumbs_show_on_home_flag() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_file(&dir, "");

        let value = run(BreadcrumbsArgs {
            path: "/".to_owned(),
            show_on_home: true,
            pretty: false,
            config: Some(config),
        });

        assert_eq!(value, json!([{"name": "Home", "url": "/", "position": 1}]));
    }

    #[test]
    fn test_breadcrumbs_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let args = BreadcrumbsArgs {
            path: "/about".to_owned(),
            show_on_home: false,
            pretty: false,
            config: Some(dir.path().join("missing.toml")),
        };

        let err = args.execute(&mut Vec::new()).unwrap_err();

        assert!(matches!(err, CliError::Config(_)));
    }
}
