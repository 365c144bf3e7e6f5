//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and validate the blog configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Project root (default: directory of the nearest config file, else cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Override file name, relative to the project root
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "blogconf.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print the loaded configuration
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        args: ShowArgs,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Write an override file holding the built-in settings
    #[command(visible_alias = "i")]
    Init {
        /// Print the file to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Expand the article URL templates for one article
    #[command(visible_alias = "u")]
    Url {
        #[command(flatten)]
        args: UrlArgs,
    },
}

/// Show command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ShowArgs {
    /// Setting names to print (e.g. SITENAME PLUGINS). Prints everything if omitted.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Output JSON keyed by setting name instead of TOML
    #[arg(short, long)]
    pub json: bool,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,
}

/// Url command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct UrlArgs {
    /// Article slug
    pub slug: String,

    /// Article date (YYYY-MM-DD or YYYY-MM-DDTHH:MM:SSZ)
    #[arg(short, long)]
    pub date: String,

    /// Article category
    #[arg(long)]
    pub category: Option<String>,

    /// Article author (default: site author)
    #[arg(long)]
    pub author: Option<String>,

    /// Article language (default: site language)
    #[arg(long)]
    pub lang: Option<String>,
}

impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_show() {
        let cli = Cli::parse_from(["blogconf", "show", "SITENAME", "PLUGINS", "--json"]);
        match cli.command {
            Commands::Show { args } => {
                assert_eq!(args.names, ["SITENAME", "PLUGINS"]);
                assert!(args.json);
                assert!(!args.pretty);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert_eq!(cli.config, PathBuf::from("blogconf.toml"));
    }

    #[test]
    fn test_parse_url_with_global_flags() {
        let cli = Cli::parse_from([
            "blogconf", "u", "hello", "-d", "2013-05-02", "--root", "/tmp/blog", "-v",
        ]);
        assert!(cli.verbose);
        assert_eq!(cli.root, Some(PathBuf::from("/tmp/blog")));
        match cli.command {
            Commands::Url { args } => {
                assert_eq!(args.slug, "hello");
                assert_eq!(args.date, "2013-05-02");
                assert!(args.category.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_init() {
        let cli = Cli::parse_from(["blogconf", "init", "--dry"]);
        assert!(cli.is_init());
    }
}
