//! Print the effective configuration.

use anyhow::Result;

use super::ConfigArgs;
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    if args.source {
        match &ctx.config_source {
            Some(path) => ctx.output.info(&format!("Loaded from {}", path.display())),
            None => ctx.output.info("No config file found; using defaults"),
        }
    }

    print!("{}", ctx.config.to_toml()?);
    Ok(())
}
