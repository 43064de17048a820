//! Design-system export tool
//!
//! Prints the Tailwind preset, the design tokens or a menu table as JSON so
//! non-Rust build pipelines can consume them.
//!
//! Run with: cargo run --bin sfs-export -- tailwind --pretty > tailwind.smartflow.preset.json

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand};
    use std::io::Write;

    use sfs_navigation::config::{tailwind_config, tailwind_theme_extension, tokens_json, MenuArchetype};
    use sfs_navigation::shared::logging::log_export;

    #[derive(Debug, Parser)]
    #[command(name = "sfs-export", about = "Export SFS design tokens and menu tables as JSON")]
    pub struct Args {
        #[command(subcommand)]
        pub target: Target,

        /// Indent the JSON output
        #[arg(long, global = true)]
        pub pretty: bool,
    }

    #[derive(Debug, Subcommand)]
    pub enum Target {
        /// Full Tailwind preset (darkMode, theme.extend, plugins)
        Tailwind {
            /// Only the theme.extend object
            #[arg(long)]
            extend_only: bool,
        },
        /// Colors, gradients and stylesheet entry points
        Tokens,
        /// One predefined menu table
        Menu {
            /// crm, store, marketing, data-query or general
            #[arg(long, default_value = "general")]
            archetype: String,
        },
    }

    impl Target {
        fn name(&self) -> &'static str {
            match self {
                Target::Tailwind { .. } => "tailwind",
                Target::Tokens => "tokens",
                Target::Menu { .. } => "menu",
            }
        }
    }

    pub fn run(args: Args) -> Result<()> {
        let value = match &args.target {
            Target::Tailwind { extend_only: true } => tailwind_theme_extension(),
            Target::Tailwind { extend_only: false } => tailwind_config(),
            Target::Tokens => tokens_json(),
            Target::Menu { archetype } => {
                let archetype: MenuArchetype = archetype
                    .parse()
                    .with_context(|| format!("Invalid --archetype '{archetype}'"))?;
                serde_json::to_value(archetype.sections())?
            }
        };

        let json = if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };

        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{json}").context("Failed to write to stdout")?;
        log_export(args.target.name(), json.len());
        Ok(())
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_menu_target() {
            let args = Args::try_parse_from(["sfs-export", "menu", "--archetype", "crm", "--pretty"]).unwrap();
            assert!(args.pretty);
            assert!(matches!(args.target, Target::Menu { ref archetype } if archetype == "crm"));
            assert_eq!(args.target.name(), "menu");
        }

        #[test]
        fn test_parse_tailwind_defaults() {
            let args = Args::try_parse_from(["sfs-export", "tailwind"]).unwrap();
            assert!(!args.pretty);
            assert!(matches!(args.target, Target::Tailwind { extend_only: false }));
        }

        #[test]
        fn test_unknown_archetype_fails() {
            let args = Args::try_parse_from(["sfs-export", "menu", "--archetype", "erp"]).unwrap();
            let err = run(args).unwrap_err();
            assert!(err.to_string().contains("Invalid --archetype 'erp'"));
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    cli::run(cli::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
