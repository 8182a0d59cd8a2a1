//! Bababoi Home - Terminal homepage for BababoiOS
//!
//! Renders a single scrollable page in the terminal: smooth anchor
//! scrolling, sections that fade in as they enter view, a screenshot
//! carousel, tabbed feature panes, a contact form, and an optional
//! background music loop.

mod app;
mod config;
mod content;
mod frontend;
mod page;
#[cfg(feature = "sound")]
mod sound;
mod theme;
mod ui;
mod validator;
mod widgets;

use anyhow::Result;
use clap::{Parser as ClapParser, Subcommand};
use frontend::Frontend;
use std::path::PathBuf;
use std::time::Instant;

#[derive(ClapParser)]
#[command(name = "bababoi-home")]
#[command(about = "Terminal homepage for BababoiOS", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Page content file (default: the embedded BababoiOS page)
    #[arg(short, long, value_name = "FILE")]
    page: Option<PathBuf>,

    /// Custom data directory (default: ~/.bababoi-home)
    /// Can also be set via BABABOI_HOME_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Theme to start with (dark or light)
    #[arg(short, long)]
    theme: Option<String>,

    /// Skip background music entirely
    #[arg(long)]
    no_music: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate page content
    ValidatePage {
        /// Page file to validate
        #[arg(value_name = "FILE")]
        page: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging to file (use RUST_LOG env var to control level, e.g. RUST_LOG=debug)
    // TUI apps can't log to stdout, so we write to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("bababoi-home.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    // Handle subcommands
    if let Some(command) = cli.command {
        match command {
            Commands::ValidatePage { page } => {
                return validate_page_command(page.or(cli.page));
            }
        }
    }

    // Set custom data directory if specified (via CLI or environment variable)
    if let Some(data_dir) = &cli.data_dir {
        std::env::set_var("BABABOI_HOME_DIR", data_dir);
        tracing::info!("Using custom data directory: {:?}", data_dir);
    } else if let Ok(env_dir) = std::env::var("BABABOI_HOME_DIR") {
        tracing::info!("Using data directory from BABABOI_HOME_DIR: {}", env_dir);
    }

    // Load configuration, then let flags override it
    let mut config = if let Some(config_path) = &cli.config {
        config::Config::load_from_path(config_path)?
    } else {
        config::Config::load()?
    };

    if let Some(theme) = cli.theme {
        config.general.theme = theme;
    }
    if cli.no_music {
        config.music.enabled = false;
    }

    let page_path = config.page_path(cli.page.as_deref());
    let page = content::Page::load(page_path.as_deref())?;

    run_tui(config, page)
}

/// Check a page file for broken anchors and degenerate sections,
/// print every issue, and exit nonzero when errors are present
fn validate_page_command(path: Option<PathBuf>) -> Result<()> {
    match &path {
        Some(path) => println!("Validating page file: {:?}", path),
        None => println!("Validating embedded default page"),
    }

    let page = match content::Page::load(path.as_deref()) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("✗ Failed to load page: {:#}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Page loaded successfully");
    println!("  {} sections defined", page.sections.len());
    for section in &page.sections {
        println!("    {} ({})", section.id(), section.kind_name());
    }

    let result = validator::validate_page(&page);
    for issue in &result.issues {
        match issue.kind {
            validator::IssueKind::Error => {
                eprintln!("✗ Error [{}]: {}", issue.section, issue.message)
            }
            validator::IssueKind::Warning => {
                println!("⚠ Warning [{}]: {}", issue.section, issue.message)
            }
        }
    }

    // Summary
    if result.is_clean() {
        println!("✓ Page is valid with no issues");
    } else {
        if result.error_count() > 0 {
            eprintln!("\n✗ Found {} error(s)", result.error_count());
        }
        if result.warning_count() > 0 {
            println!("⚠ Found {} warning(s)", result.warning_count());
        }
    }

    if result.error_count() > 0 {
        std::process::exit(1);
    }
    Ok(())
}

/// Run the TUI frontend
fn run_tui(config: config::Config, page: content::Page) -> Result<()> {
    let mut app = app::App::new(config, page)?;
    let mut frontend = frontend::TuiFrontend::new()?;

    // Lay the page out for the real terminal size before the first frame
    let (width, height) = frontend.size();
    app.resize(width, height);

    let mut last_tick = Instant::now();

    // Main event loop
    while app.running {
        let events = frontend.poll_events()?;
        for event in events {
            app.handle_event(event);
        }

        app.tick(last_tick.elapsed());
        last_tick = Instant::now();

        if app.needs_render {
            frontend.render(&mut app)?;
            app.needs_render = false;
        }
    }

    frontend.cleanup()
}
