//! open command - Open a repository and print its description

use anyhow::{Context as _, Result};

use super::Context;
use crate::host::Value;
use crate::ui::output;

/// Open `path` and print the repository's display form.
pub fn open(ctx: &Context, path: &str) -> Result<()> {
    ctx.host.call("git_init", &[])?;

    let repo = ctx
        .host
        .call("git_repository_open", &[Value::from(path)])?
        .context("git_repository_open produced no value")?;

    output::print(ctx.host.describe(&repo), ctx.verbosity);
    Ok(())
}
