//! `regen schema` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use regen_config::{CliSettings, Config};
use regen_meta::{Document, FrontMatter, parse_document, slug_from_path, split_front_matter};
use regen_schema::{PageData, PageOptions, PageType};

use super::write_json_ld;
use crate::error::CliError;
use crate::output::Output;

/// File extensions accepted by `--source`.
const SOURCE_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Arguments for the schema command.
#[derive(Args)]
pub(crate) struct SchemaArgs {
    /// Page path, e.g. `/blog/soil-health`.
    path: String,

    /// Page type: page, blog, recipe, about or legal (overrides front matter).
    #[arg(short = 't', long = "type")]
    page_type: Option<String>,

    /// Markdown/MDX source whose front matter describes the page.
    #[arg(short, long)]
    source: Option<PathBuf>,

    /// Include the LocalBusiness object.
    #[arg(long)]
    local_business: bool,

    /// Emit a `Home`-only trail for the root path (overrides config).
    #[arg(long)]
    show_on_home: bool,

    /// Wrap the output in a `<script type="application/ld+json">` element.
    #[arg(long, conflicts_with = "pretty")]
    script: bool,

    /// Indent the JSON output.
    #[arg(long)]
    pretty: bool,

    /// Fail on malformed front matter instead of ignoring it.
    #[arg(long)]
    strict: bool,

    /// Canonical site origin (overrides config).
    #[arg(long, env = "REGEN_SITE_URL")]
    site_url: Option<String>,

    /// Path to configuration file (default: auto-discover regen.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SchemaArgs {
    /// Execute the schema command.
    ///
    /// Writes nothing when the page has no structured data.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails, the source cannot be read,
    /// front matter is malformed in strict mode, or output cannot be written.
    pub(crate) fn execute(self, out: &mut impl Write) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            site_url: self.site_url.clone(),
            show_on_home: self.show_on_home.then_some(true),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let content = self
            .source
            .as_deref()
            .map(read_source)
            .transpose()?;
        let document = match content.as_deref() {
            Some(content) => Some(self.parse_source(content)?),
            None => None,
        };

        let page_type = self.resolve_page_type(document.as_ref().map(|doc| &doc.front_matter));
        let include_local_business = self.local_business
            || document
                .as_ref()
                .and_then(|doc| doc.front_matter.local_business)
                .unwrap_or(false);
        let slug = self.source.as_deref().map(slug_from_path).unwrap_or_default();
        let data: Option<PageData> = document.map(|mut doc| {
            doc.front_matter.page_type = page_type;
            doc.page_data(&slug)
        });

        let options = PageOptions {
            include_local_business,
            show_on_home: config.breadcrumbs.show_on_home,
        };
        let json_ld = config.synthesizer().build_for_path(
            &config.segmenter(),
            &self.path,
            page_type,
            data.as_ref(),
            options,
        );

        let Some(json_ld) = json_ld else {
            tracing::info!(path = %self.path, "No structured data for page");
            return Ok(());
        };
        tracing::info!(
            path = %self.path,
            page_type = %page_type,
            objects = json_ld.objects().len(),
            "Built structured data"
        );

        write_json_ld(out, &json_ld, self.script, self.pretty)
    }

    /// Split front matter from the source text.
    ///
    /// Malformed front matter is reported and ignored unless `--strict`; the
    /// body after the fence is kept for title and description fallbacks.
    fn parse_source<'a>(&self, content: &'a str) -> Result<Document<'a>, CliError> {
        match parse_document(content) {
            Ok(doc) => Ok(doc),
            Err(err) if !self.strict => {
                let source = self
                    .source
                    .as_deref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default();
                tracing::warn!(%source, error = %err, "Ignoring front matter");
                Output::new().warning(&format!(
                    "Warning: ignoring front matter in {source}: {err}"
                ));
                Ok(Document {
                    front_matter: FrontMatter::default(),
                    body: split_front_matter(content).1,
                })
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Page type from `--type`, then front matter, then `page`.
    fn resolve_page_type(&self, front_matter: Option<&FrontMatter>) -> PageType {
        self.page_type
            .as_deref()
            .map(PageType::parse)
            .or_else(|| front_matter.map(|fm| fm.page_type))
            .unwrap_or_default()
    }
}

/// Read a Markdown/MDX source file.
fn read_source(source: &Path) -> Result<String, CliError> {
    let has_known_extension = source
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| SOURCE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()));
    if !has_known_extension {
        return Err(CliError::Validation(format!(
            "Source must be a Markdown or MDX file: {}",
            source.display()
        )));
    }

    Ok(std::fs::read_to_string(source)?)
}
