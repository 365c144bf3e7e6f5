//! `init` command: write an override file with the built-in settings.

use crate::config::{SiteConfig, section::DEFAULT_FRAGMENT};
use crate::log;
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Generate override file content with a comment header.
pub fn generate_config_template() -> Result<String> {
    let mut out = String::new();
    out.push_str(&format!(
        "# blogconf configuration file (v{})\n",
        env!("CARGO_PKG_VERSION")
    ));
    out.push_str("# Every key is optional; missing keys keep the built-in value.\n\n");
    out.push_str(&SiteConfig::default().to_toml()?);
    Ok(out)
}

/// Write the override file. Never overwrites an existing file.
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let path = root.join(config_name);
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }

    let content = generate_config_template()?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    log!("init"; "wrote {}", path.display());

    if !root.join(DEFAULT_FRAGMENT).exists() {
        log!(
            "hint";
            "create {} before loading; its content becomes EXTRA_HEADER",
            DEFAULT_FRAGMENT
        );
    }
    Ok(())
}

pub fn run(root: &Path, config_name: &Path, dry: bool) -> Result<()> {
    if dry {
        print!("{}", generate_config_template()?);
        return Ok(());
    }
    write_config(root, config_name)
}
