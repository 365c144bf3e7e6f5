//! `show` command: print the loaded configuration.

use crate::cli::ShowArgs;
use crate::config::SiteConfig;
use anyhow::{Result, bail};
use serde_json::{Map, Value as JsonValue};

pub fn run(config: &SiteConfig, args: &ShowArgs) -> Result<()> {
    println!("{}", render(config, args)?);
    Ok(())
}

fn render(config: &SiteConfig, args: &ShowArgs) -> Result<String> {
    if args.names.is_empty() && !args.json {
        return Ok(config.to_toml()?);
    }

    let settings = if args.names.is_empty() {
        config.settings()
    } else {
        select(config, &args.names)?
    };

    if args.json {
        let value = JsonValue::Object(settings);
        return Ok(if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        });
    }

    Ok(settings
        .iter()
        .map(|(name, value)| format!("{name} = {value}"))
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Requested settings in request order. Unknown names fail as a group.
fn select(config: &SiteConfig, names: &[String]) -> Result<Map<String, JsonValue>> {
    let mut out = Map::new();
    let mut unknown = Vec::new();
    for name in names {
        match config.lookup(name) {
            Some(value) => {
                out.insert(name.clone(), value);
            }
            None => unknown.push(name.as_str()),
        }
    }

    if !unknown.is_empty() {
        bail!("unknown setting(s): {}", unknown.join(", "));
    }
    Ok(out)
}
