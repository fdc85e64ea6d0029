//! emptystate - Empty-state overlay demo
//!
//! A list screen that shows an empty state while it has no items.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use emptystate::app::{Application, Schedule};
use emptystate::render::TerminalUI;
use emptystate::{Anchoring, OverlayConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum AnchoringArg {
    /// Fill the whole screen
    Full,
    /// Stay between the header and the status line
    Content,
}

impl From<AnchoringArg> for Anchoring {
    fn from(arg: AnchoringArg) -> Self {
        match arg {
            AnchoringArg::Full => Anchoring::FullBounds,
            AnchoringArg::Content => Anchoring::ContentGuides { top: 1, bottom: 1 },
        }
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "emptystate",
    version = emptystate::VERSION,
    about = "Empty-state overlay demo",
    long_about = "Shows a list screen with an empty-state overlay. Press 'a' to add items, \
                  'd' to remove them, Enter to press the overlay's button, 'q' to quit."
)]
struct Cli {
    /// Items the list starts with
    #[arg(long, default_value_t = 0)]
    items: usize,

    /// How the overlay is anchored (overrides the config file)
    #[arg(long, value_enum)]
    anchoring: Option<AnchoringArg>,

    /// Show the empty state after this many seconds instead of immediately
    #[arg(long, value_name = "SECS")]
    show_after: Option<f64>,

    /// Hide the empty state after this many seconds
    #[arg(long, value_name = "SECS")]
    hide_after: Option<f64>,

    /// Overlay configuration file (TOML)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn seconds(value: Option<f64>, flag: &str) -> Result<Option<Duration>> {
    value
        .map(|secs| {
            Duration::try_from_secs_f64(secs)
                .map_err(|_| anyhow::anyhow!("--{flag} must be a non-negative number of seconds"))
        })
        .transpose()
}

#[cfg(feature = "config")]
fn load_config(path: Option<PathBuf>) -> Result<OverlayConfig> {
    Ok(match path {
        Some(path) => OverlayConfig::load(path)?,
        None => OverlayConfig::load_or_default()?,
    })
}

#[cfg(not(feature = "config"))]
fn load_config(path: Option<PathBuf>) -> Result<OverlayConfig> {
    if let Some(path) = path {
        anyhow::bail!(
            "Cannot read {}: built without the `config` feature",
            path.display()
        );
    }
    Ok(OverlayConfig::default())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let cli = Cli::parse();

    let mut config = load_config(cli.config)?;
    if let Some(anchoring) = cli.anchoring {
        config.anchoring = anchoring.into();
    }

    let schedule = Schedule {
        show_after: seconds(cli.show_after, "show-after")?,
        hide_after: seconds(cli.hide_after, "hide-after")?,
    };

    let mut app = Application::new(config, schedule);
    for _ in 0..cli.items {
        app.handle_action(emptystate::input::InputAction::AddItem);
    }

    let mut ui = TerminalUI::new();
    app.run(&mut ui).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        // Ensure version is accessible
        assert!(!emptystate::VERSION.is_empty());
    }

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "emptystate",
            "--items",
            "2",
            "--anchoring",
            "content",
            "--show-after",
            "1.5",
        ]);
        assert_eq!(cli.items, 2);
        assert_eq!(cli.anchoring, Some(AnchoringArg::Content));
        assert_eq!(
            seconds(cli.show_after, "show-after").unwrap(),
            Some(Duration::from_millis(1500))
        );
        assert!(seconds(Some(-1.0), "hide-after").is_err());
    }

    #[test]
    fn test_anchoring_arg_conversion() {
        assert_eq!(Anchoring::from(AnchoringArg::Full), Anchoring::FullBounds);
        assert_eq!(
            Anchoring::from(AnchoringArg::Content),
            Anchoring::ContentGuides { top: 1, bottom: 1 }
        );
    }
}
