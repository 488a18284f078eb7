//! blob command - Look up a blob and print it or one of its fields

use anyhow::{Context as _, Result};
use serde::Serialize;

use super::Context;
use crate::cli::args::BlobField;
use crate::host::Value;
use crate::ui::output;

/// JSON form of a blob.
#[derive(Debug, Serialize)]
struct BlobSummary {
    repository: String,
    hash: String,
    size: i64,
}

/// Look up `id` in the repository at `repo`.
///
/// With `tolerant`, a blob that cannot be resolved prints nothing.
pub fn blob(
    ctx: &Context,
    repo: &str,
    id: &str,
    tolerant: bool,
    field: Option<BlobField>,
    json: bool,
) -> Result<()> {
    let host = &ctx.host;
    host.call("git_init", &[])?;

    let repository = host
        .call("git_repository_open", &[Value::from(repo)])?
        .context("git_repository_open produced no value")?;

    let mut args = vec![repository.clone(), Value::from(id)];
    if tolerant {
        args.push(Value::Void);
    }
    let Some(blob) = host.call("git_blob_lookup", &args)? else {
        tracing::debug!(id, "no blob produced");
        return Ok(());
    };

    match field {
        Some(BlobField::Content) => {
            let content = host.field(&blob, "content")?;
            output::write_raw(content.as_bytes().unwrap_or_default())?;
        }
        Some(field) => {
            println!("{}", host.field(&blob, field.name())?);
        }
        None if json => {
            let summary = BlobSummary {
                repository: host.field(&repository, "dir")?.to_string(),
                hash: host.field(&blob, "hash")?.to_string(),
                size: host.field(&blob, "size")?.as_int().unwrap_or_default(),
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => output::print(host.describe(&blob), ctx.verbosity),
    }
    Ok(())
}
