//! CLI Adapter.

use std::collections::BTreeMap;
use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::app::api::{self, ShowOptions, TemplateSummary};
use crate::app::config::AppConfig;
use crate::domain::{AppError, Theme};

#[derive(Parser)]
#[command(name = "promptcard")]
#[command(version)]
#[command(about = "Pick, fill, and copy pre-written AI prompts", long_about = None)]
struct Cli {
    /// Catalog file to overlay on the built-in cards
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available prompt cards
    #[clap(visible_alias = "ls")]
    List {
        /// Output format
        #[arg(long, value_enum, default_value_t = ListFormat::Text)]
        format: ListFormat,
    },
    /// Render a prompt card
    #[clap(visible_alias = "s")]
    Show {
        /// Card key (see `promptcard list`)
        key: String,
        /// Placeholder value, e.g. --set Subject=Loops
        #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_substitution)]
        set: Vec<(String, String)>,
        /// Copy the prompt to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
    /// Generate a prompt from free text
    #[clap(visible_alias = "a")]
    Ask {
        /// What to learn about
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
        /// Copy the prompt to the clipboard
        #[arg(short, long)]
        copy: bool,
    },
    /// Pick a prompt interactively
    #[clap(visible_alias = "p")]
    Pick,
    /// Show or change the dark/light preference
    Theme {
        #[arg(value_enum, default_value_t = ThemeAction::Show)]
        action: ThemeAction,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ListFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ThemeAction {
    Show,
    Toggle,
    Dark,
    Light,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = AppConfig::from_env(cli.catalog).and_then(|config| match cli.command {
        Commands::List { format } => run_list(&config, format),
        Commands::Show { key, set, copy } => run_show(&config, key, set, copy),
        Commands::Ask { topic, copy } => run_ask(&config, &topic.join(" "), copy),
        Commands::Pick => api::pick(&config),
        Commands::Theme { action } => run_theme(&config, action),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("promptcard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}

fn run_list(config: &AppConfig, format: ListFormat) -> Result<(), AppError> {
    let summaries = api::list(config)?;
    match format {
        ListFormat::Json => {
            let json = serde_json::to_string_pretty(&summaries)
                .map_err(|e| AppError::InternalError(format!("Failed to encode JSON: {}", e)))?;
            println!("{}", json);
        }
        ListFormat::Text => {
            let width = summaries.iter().map(|s| s.key.len()).max().unwrap_or(0);
            for summary in &summaries {
                println!("{}", format_summary(summary, width));
            }
        }
    }
    Ok(())
}

fn format_summary(summary: &TemplateSummary, width: usize) -> String {
    let mut line = format!("{:<width$}  {}", summary.key, summary.title, width = width);
    if summary.generated {
        line.push_str(" (varies)");
    }
    if !summary.placeholders.is_empty() {
        let slots: Vec<String> = summary
            .placeholders
            .iter()
            .map(|placeholder| format!("{}={}", placeholder.name, placeholder.default))
            .collect();
        line.push_str(&format!(" [{}]", slots.join(", ")));
    }
    line
}

fn run_show(
    config: &AppConfig,
    key: String,
    set: Vec<(String, String)>,
    copy: bool,
) -> Result<(), AppError> {
    let substitutions: BTreeMap<String, String> = set.into_iter().collect();
    let output = api::show(config, ShowOptions { key, substitutions, copy })?;
    println!("{}", output.text);
    if output.copied {
        eprintln!("✅ Copied to clipboard");
    }
    Ok(())
}

fn run_ask(config: &AppConfig, topic: &str, copy: bool) -> Result<(), AppError> {
    let output = api::ask(config, topic, copy)?;
    println!("{}", output.text);
    if output.copied {
        eprintln!("✅ Copied to clipboard");
    }
    Ok(())
}

fn run_theme(config: &AppConfig, action: ThemeAction) -> Result<(), AppError> {
    let theme = match action {
        ThemeAction::Show => api::theme_show(config)?,
        ThemeAction::Toggle => api::theme_toggle(config)?,
        ThemeAction::Dark => api::theme_set(config, Theme::Dark)?,
        ThemeAction::Light => api::theme_set(config, Theme::Light)?,
    };
    println!("{}", theme);
    Ok(())
}

/// Parse a `NAME=VALUE` placeholder assignment.
fn parse_substitution(raw: &str) -> Result<(String, String), String> {
    let (name, value) =
        raw.split_once('=').ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing placeholder name in '{}'", raw));
    }
    Ok((name.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Placeholder;

    #[test]
    fn parses_substitutions() {
        assert_eq!(
            parse_substitution("Subject=Data Science").unwrap(),
            ("Subject".to_string(), "Data Science".to_string())
        );
        assert_eq!(
            parse_substitution(" Language =a=b").unwrap(),
            ("Language".to_string(), "a=b".to_string())
        );
        assert_eq!(parse_substitution("Subject=").unwrap().1, "");
    }

    #[test]
    fn rejects_malformed_substitutions() {
        assert!(parse_substitution("Subject").is_err());
        assert!(parse_substitution("=Loops").is_err());
    }

    #[test]
    fn formats_summary_line() {
        let summary = TemplateSummary {
            key: "explain".to_string(),
            title: "Explain a Concept".to_string(),
            description: None,
            generated: false,
            placeholders: vec![
                Placeholder { name: "Subject".to_string(), default: "Recursion".to_string() },
                Placeholder { name: "Language".to_string(), default: "Python".to_string() },
            ],
        };
        assert_eq!(
            format_summary(&summary, 9),
            "explain    Explain a Concept [Subject=Recursion, Language=Python]"
        );
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
