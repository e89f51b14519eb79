use crate::logging;

use anyhow::{Context as _, Result};
use csgen_core::Request;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn exec(request: &Path, output: Option<&Path>, pretty: bool) -> Result<()> {
    let src = fs::read(request)
        .with_context(|| format!("failed to read request `{}`", request.display()))?;

    let json = run(&src, pretty)?;

    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write output `{}`", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

/// Decodes a request, installs logging per its plugin options and returns
/// the synthesized output model as JSON.
pub fn run(src: &[u8], pretty: bool) -> Result<String> {
    let request = Request::from_json(src)?;
    let config = request.config()?;

    logging::init(config.log_file.as_deref())?;
    tracing::info!(?config, "beginning generation");

    let output = csgen_codegen::generate(&request, &config)?;

    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };

    Ok(json)
}
