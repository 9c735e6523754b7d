//! tweaktui - Main entry point
//!
//! Parses the CLI, sets up diagnostics, and hands off to either the TUI or
//! one of the headless subcommands.

use std::io::stdout;
use std::path::Path;

use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use tweaktui::app::App;
use tweaktui::backend::{ActionBackend, DryRunBackend, HostBackend};
use tweaktui::catalog::Catalog;
use tweaktui::cli::{Cli, Commands};
use tweaktui::engine;
use tweaktui::logger::AuditLog;
use tweaktui::plan::ApplyPlan;
use tweaktui::types::Category;

/// Audit log directory, relative to the working directory
const LOG_DIR: &str = "logs";

/// Initialize diagnostics with appropriate settings
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // RUST_LOG overrides the default level; output goes to stderr so the
    // TUI's stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("tweaktui starting up");

    let cli = Cli::parse_args();
    let catalog = Catalog::builtin();

    match cli.command {
        Some(Commands::Apply {
            preset,
            tweaks,
            plan,
        }) => run_headless(&catalog, preset, tweaks, plan.as_deref(), cli.dry_run)?,
        Some(Commands::List { category }) => list_catalog(&catalog, category.as_deref())?,
        Some(Commands::Validate { plan }) => validate_plan(&catalog, &plan),
        None => run_tui(catalog, cli.dry_run)?,
    }

    Ok(())
}

/// Apply a selection without the TUI, printing progress and log entries
fn run_headless(
    catalog: &Catalog,
    preset: Option<String>,
    tweaks: Vec<String>,
    plan_path: Option<&Path>,
    dry_run: bool,
) -> anyhow::Result<()> {
    let plan = match plan_path {
        Some(path) => ApplyPlan::load(path)?,
        None => ApplyPlan { preset, tweaks },
    };
    let selection = plan.resolve(catalog)?;

    let audit = AuditLog::new(LOG_DIR)?;
    let backend: Box<dyn ActionBackend> = if dry_run {
        Box::new(DryRunBackend)
    } else {
        Box::new(HostBackend)
    };

    let record = engine::run(
        catalog,
        &selection,
        backend.as_ref(),
        &audit,
        |_, _| {},
        |entry| println!("{}", entry),
    )?;

    println!();
    println!(
        "Batch complete: {} applied, {} failed",
        record.succeeded(),
        record.failed()
    );
    println!("Audit log: {}", audit.path().display());
    Ok(())
}

/// Print the catalog, optionally restricted to one category
fn list_catalog(catalog: &Catalog, category: Option<&str>) -> anyhow::Result<()> {
    let filter = match category {
        Some(raw) => Some(
            raw.parse::<Category>()
                .map_err(|_| anyhow::anyhow!("unknown category: {}", raw))?,
        ),
        None => None,
    };

    for tweak in catalog.all() {
        if let Some(wanted) = filter {
            if tweak.category != wanted {
                continue;
            }
        }
        let presets = tweak
            .presets
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");
        println!(
            "{:<28} {:<16} {:<9} {:<17} {}",
            tweak.id, tweak.category, tweak.kind, presets, tweak.name
        );
    }
    Ok(())
}

/// Validate a selection plan file against the catalog
fn validate_plan(catalog: &Catalog, path: &Path) {
    info!("Validating plan file: {:?}", path);
    match ApplyPlan::load(path).and_then(|plan| plan.resolve(catalog)) {
        Ok(selection) => {
            info!("Plan validation successful");
            println!("✓ Plan is valid: {} tweaks selected", selection.len());
        }
        Err(e) => {
            error!("Plan validation failed: {}", e);
            eprintln!("✗ Plan validation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Launch the interactive TUI
fn run_tui(catalog: Catalog, dry_run: bool) -> anyhow::Result<()> {
    let audit = AuditLog::new(LOG_DIR)?;

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(catalog, audit, dry_run);
    let result = app.run(&mut terminal);

    // Always restore the terminal, even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.map_err(Into::into)
}
