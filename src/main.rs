//! blogconf - inspect and validate the blog configuration.

use anyhow::{Context, Result};
use blogconf::{
    cli::{self, Cli, Commands},
    config::{SiteConfig, init_config},
    logger,
};
use clap::{ColorChoice, Parser};
use std::{path::Path, sync::Arc};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let root = cli.resolve_root()?;

    match &cli.command {
        Commands::Init { dry } => cli::init::run(&root, &cli.config, *dry),
        Commands::Show { args } => {
            let config = load(&root, &cli)?;
            cli::show::run(&config, args)
        }
        Commands::Check => {
            let config = load(&root, &cli)?;
            cli::check::run(&config);
            Ok(())
        }
        Commands::Url { args } => {
            let config = load(&root, &cli)?;
            cli::url::run(&config, args)
        }
    }
}

/// Load the configuration and publish it process-wide.
fn load(root: &Path, cli: &Cli) -> Result<Arc<SiteConfig>> {
    let config = SiteConfig::load(root, &cli.config)
        .with_context(|| format!("Failed to load configuration from '{}'", root.display()))?;
    Ok(init_config(config)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blogconf::config::{cfg, section::DEFAULT_FRAGMENT};
    use std::fs;
    use tempfile::TempDir;

    // Single test: `load` publishes the process-wide handle.
    #[test]
    fn test_load_then_show() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(DEFAULT_FRAGMENT), "<meta>").unwrap();

        let cli = Cli::parse_from(["blogconf", "show", "SITENAME"]);
        let config = load(temp.path(), &cli).unwrap();
        assert!(Arc::ptr_eq(&config, &cfg().unwrap()));

        let Commands::Show { args } = &cli.command else {
            panic!("expected show");
        };
        cli::show::run(&config, args).unwrap();
        cli::check::run(&config);
    }
}
