//! `ocelot init` — Write a default configuration file.

use clap::Args;
use std::path::PathBuf;

use crate::config::OcelotConfig;

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path to the config file to write.
    #[arg(short, long, default_value = "ocelot.toml")]
    pub config: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: &InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    let config = OcelotConfig::default();
    config.save(&args.config)?;
    println!("Wrote default config to {}", args.config.display());
    println!("  Server:   {}", config.server.base_url);
    println!("  Manifest: {}", config.circuit.manifest_path.display());
    println!("  Min age:  {}", config.policy.min_age);
    Ok(())
}
