//! Print 6-digit hex RGB codes as GL float initializer literals.
//!
//! ```text
//! $ hex2fv 434247 5c5a66
//! {0.263f, 0.259f, 0.278f, 1.f},
//! {0.361f, 0.353f, 0.400f, 1.f};
//! ```

use anyhow::Result;
use std::{env, io};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(Level::WARN.into())
                    .from_env_lossy(),
            )
            .with_writer(io::stderr)
            .finish(),
    )?;

    let tokens: Vec<String> = env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    tracing::debug!(count = tokens.len(), "converting hex codes");

    hex2fv::convert(&tokens, io::stdout().lock())?;

    Ok(())
}
