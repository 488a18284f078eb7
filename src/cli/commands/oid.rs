//! oid-fromstr / oid-tostr commands - Identifier conversion utilities

use std::io::Read;
use std::path::Path;

use anyhow::{Context as _, Result};

use super::Context;
use crate::host::Value;
use crate::ui::output;

/// Decode `hex` and print (or write) the 20 bytes.
pub fn oid_fromstr(ctx: &Context, hex: &str, raw: bool) -> Result<()> {
    let bytes = ctx
        .host
        .call("git_oid_fromstr", &[Value::from(hex)])?
        .context("git_oid_fromstr produced no value")?;

    if raw {
        output::write_raw(bytes.as_bytes().unwrap_or_default())?;
    } else {
        println!("{bytes}");
    }
    Ok(())
}

/// Read raw identifier bytes from `file` (or stdin) and print the hex form.
pub fn oid_tostr(ctx: &Context, file: Option<&Path>) -> Result<()> {
    let bytes = match file {
        Some(path) => std::fs::read(path)
            .with_context(|| format!("failed to read '{}'", path.display()))?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let hex = ctx
        .host
        .call("git_oid_tostr", &[Value::from(bytes)])?
        .context("git_oid_tostr produced no value")?;

    println!("{hex}");
    Ok(())
}
