//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod organization;
pub(crate) mod schema;

use std::io::Write;

use regen_schema::JsonLd;

use crate::error::CliError;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use organization::OrganizationArgs;
pub(crate) use schema::SchemaArgs;

/// Write JSON-LD as a `<script>` element, indented JSON or compact JSON.
fn write_json_ld(
    out: &mut impl Write,
    json_ld: &JsonLd,
    script: bool,
    pretty: bool,
) -> Result<(), CliError> {
    let rendered = if script {
        json_ld.to_script_tag()?
    } else if pretty {
        json_ld.to_json_pretty()?
    } else {
        json_ld.to_json()?
    };
    writeln!(out, "{rendered}")?;
    Ok(())
}
