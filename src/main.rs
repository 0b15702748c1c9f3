use actionbar_app::{ActionBar, Collaborators, MemoryClipboard, MemoryView};
use actionbar_config::Settings;
use actionbar_core::{SourceCatalog, load_selection, summarize};
use actionbar_models::DisplayState;
use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::{error, info};

mod console;
use console::{ConsoleSink, Labels, LogPreviewer};

#[derive(Debug, Parser)]
#[command(name = "actionbar")]
#[command(about = "Shows the action bar status for a selection of files", long_about = None)]
struct Cli {
    /// Show the searching page before the selection
    #[arg(long)]
    search: bool,

    /// Print the selection summary as JSON instead
    #[arg(long)]
    json: bool,

    /// Ask the previewer to open a single selected file
    #[arg(long)]
    preview: bool,

    /// Files and folders to select
    paths: Vec<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Install error hooks
    color_eyre::install()?;

    let cli = Cli::parse();

    let settings = Settings::load().await.unwrap_or_else(|e| {
        eprintln!("Failed to load settings, using defaults: {e}");
        Settings::default()
    });

    setup_logging(&settings)?;

    if let Err(e) = run(cli, settings).await {
        error!("Application error: {}", e);
        return Err(e);
    }

    Ok(())
}

fn setup_logging(settings: &Settings) -> Result<()> {
    use std::env;

    let log_dir = env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_path = log_dir.join("actionbar.log");

    eprintln!("Logging to: {}", log_path.display());

    // Create or truncate log file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(settings.log_filter.as_str())
        .with_target(true)
        .with_line_number(true)
        .with_thread_ids(false)
        .init();

    info!("Starting actionbar...");
    info!("Log file: {}", log_path.display());

    Ok(())
}

async fn run(options: Cli, settings: Settings) -> Result<()> {
    let entries = load_selection(&options.paths).await?;
    info!("Loaded {} entries", entries.len());

    if options.json {
        println!("{}", serde_json::to_string_pretty(&summarize(&entries))?);
        return Ok(());
    }

    let view = Arc::new(MemoryView::new());
    let (tx, mut shown) = mpsc::unbounded_channel();
    let bar = ActionBar::new(
        Collaborators {
            view: view.clone(),
            sink: Arc::new(ConsoleSink::new(tx)),
            clipboard: Arc::new(MemoryClipboard::new()),
            previewer: Arc::new(LogPreviewer),
            catalog: Arc::new(SourceCatalog),
        },
        &settings,
    )?;

    if options.search {
        view.set_searching(true);
        view.set_loading(true);
        print_next(&mut shown).await?;

        view.set_loading(false);
        view.set_searching(false);
    }

    view.set_selection(entries);
    print_next(&mut shown).await?;

    if options.preview && !bar.open_preview().await? {
        println!("Preview is only available for a single selected file");
    }

    bar.shutdown();
    Ok(())
}

async fn print_next(shown: &mut UnboundedReceiver<(DisplayState, Labels)>) -> Result<()> {
    let (state, labels) = shown
        .recv()
        .await
        .ok_or_else(|| eyre!("Action bar stopped before showing a status"))?;

    match state {
        DisplayState::Normal => println!("[{state}] Nothing selected"),
        DisplayState::Loading => println!("[{state}] {}", labels.loading),
        DisplayState::SingleSelection => {
            println!("[{state}] {}", labels.file_name);
            if let Some(description) = &labels.description {
                println!("    {description}");
            }
            if let Some(preview) = &labels.preview {
                println!("    {preview}");
            }
        }
        DisplayState::MultiSelection => println!("[{state}] {}", labels.multi_selection),
    }

    if let Some(paste) = &labels.paste {
        println!("    [{paste}]");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags_and_paths() {
        let cli = Cli::try_parse_from(["actionbar", "--search", "a.txt", "--json", "Photos"]).unwrap();

        assert!(cli.search);
        assert!(cli.json);
        assert!(!cli.preview);
        assert_eq!(cli.paths, vec![PathBuf::from("a.txt"), PathBuf::from("Photos")]);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let err = Cli::try_parse_from(["actionbar", "--verbose"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_help_is_not_a_failure() {
        let err = Cli::try_parse_from(["actionbar", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert_eq!(err.exit_code(), 0);
    }
}
