//! Command implementations for the meet importer CLI
//!
//! This module contains the command execution logic, progress reporting,
//! and terminal rendering. Rendering always works from a full store
//! snapshot: mutating commands persist first, then publish the updated
//! store on the snapshot bus and let subscribers re-render from it.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{ImportStore, MeetMeta, format_mark};
use crate::app::services::csv_import::build_meet;
use crate::app::services::import_store::{StoreFile, summarize};
use crate::app::services::snapshot_bus::SnapshotBus;
use crate::app::services::views::{athlete_directory, build_leaderboards, group_by_event};
use crate::cli::args::{Args, AthletesArgs, Commands, ImportArgs, LeaderboardsArgs};
use crate::config::Config;
use crate::constants::DEFAULT_MEET_NAME;
use crate::{Error, Result};

/// Dispatch the parsed CLI arguments
pub fn run(args: Args) -> Result<()> {
    setup_logging(&args);

    let config = Config::new(args.store_path.clone(), None);
    config.validate()?;
    debug!("Using store at {}", config.store_path.display());

    let store_file = StoreFile::new(config.store_path.clone());

    match &args.command {
        Commands::Import(import_args) => {
            run_import(&store_file, import_args, args.show_progress())
        }
        Commands::Meets => run_meets(&store_file),
        Commands::Athletes(athletes_args) => run_athletes(&store_file, athletes_args),
        Commands::Leaderboards(leaderboards_args) => {
            run_leaderboards(&store_file, leaderboards_args)
        }
        Commands::Summary => run_summary(&store_file),
        Commands::Clear => run_clear(&store_file),
    }
}

/// Set up structured logging from CLI flags
///
/// `RUST_LOG` still wins when set, so targeted filters keep working.
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("meet_importer={}", args.log_level())));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Import one CSV file as a new meet
fn run_import(store_file: &StoreFile, args: &ImportArgs, show_progress: bool) -> Result<()> {
    if !args.file.exists() {
        return Err(Error::file_not_found(args.file.display().to_string()));
    }

    let text = fs::read_to_string(&args.file).map_err(|error| {
        Error::io(format!("Failed to read {}", args.file.display()), error)
    })?;

    let meta = MeetMeta {
        name: args
            .name
            .clone()
            .unwrap_or_else(|| default_meet_name(&args.file)),
        date: args.date.clone(),
        season: args.season.clone(),
        location: args.location.clone(),
        source: args.source.clone(),
    };
    info!("Importing {} as '{}'", args.file.display(), meta.name);

    let progress = show_progress.then(create_row_progress_bar);
    let outcome = build_meet(&text, &meta, progress.as_ref());
    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    for warning in &outcome.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    let Some(meet) = outcome.meet else {
        println!("{}", "Nothing imported.".red());
        return Ok(());
    };
    if meet.performances.is_empty() {
        println!(
            "{}",
            "No usable performances were found in this CSV.".red()
        );
        return Ok(());
    }

    let mut bus = SnapshotBus::new();
    bus.subscribe(render_summary_line);

    let imported = meet.performances.len();
    let meet_name = meet.name.clone();

    let mut store = store_file.load();
    store.meets.insert(0, meet);
    store_file.save(&store)?;

    println!(
        "{} Imported {} from {} into '{}'.",
        "ok:".bright_green().bold(),
        plural(imported, "performance"),
        plural(outcome.total_rows, "row"),
        meet_name
    );
    bus.publish(&store);

    Ok(())
}

/// List imported meets, newest first
fn run_meets(store_file: &StoreFile) -> Result<()> {
    let store = store_file.load();
    if store.meets.is_empty() {
        println!("{}", "No imports yet.".dimmed());
        return Ok(());
    }

    for meet in &store.meets {
        let mut details = Vec::new();
        if let Some(date) = &meet.date {
            details.push(date.clone());
        }
        if let Some(location) = &meet.location {
            details.push(location.clone());
        }
        if let Some(season) = &meet.season {
            details.push(season.clone());
        }
        details.push(plural(meet.performances.len(), "performance"));

        println!(
            "{}  {}",
            meet.name.bright_white().bold(),
            details.join(" \u{00b7} ").dimmed()
        );
    }

    Ok(())
}

/// Show the athlete directory
fn run_athletes(store_file: &StoreFile, args: &AthletesArgs) -> Result<()> {
    let store = store_file.load();
    let directory = athlete_directory(&store);
    if directory.is_empty() {
        println!("{}", "No imports yet.".dimmed());
        return Ok(());
    }

    for athlete in &directory {
        let mut details = Vec::new();
        if let Some(team) = &athlete.team {
            details.push(team.clone());
        }
        if let Some(grade) = &athlete.grade {
            details.push(format!("Grade {grade}"));
        }
        if let Some(gender) = &athlete.gender {
            details.push(gender.clone());
        }
        details.push(plural(athlete.performances.len(), "performance"));

        println!(
            "{}, {}  {}",
            athlete.last.bright_white().bold(),
            athlete.first.bright_white(),
            details.join(" \u{00b7} ").dimmed()
        );

        if args.detailed {
            for (event_name, performances) in group_by_event(athlete) {
                println!("  {}", event_name.cyan());
                for summary in performances {
                    let meet_info = match &summary.meet_date {
                        Some(date) => format!("{} ({})", summary.meet_name, date),
                        None => summary.meet_name.clone(),
                    };
                    println!(
                        "    {}  {}",
                        format_mark(&summary.mark_raw, summary.mark_value, summary.mark_kind)
                            .bold(),
                        meet_info.dimmed()
                    );
                }
            }
        }
    }

    Ok(())
}

/// Show per-event leaderboards
fn run_leaderboards(store_file: &StoreFile, args: &LeaderboardsArgs) -> Result<()> {
    let store = store_file.load();
    let boards = build_leaderboards(&store, args.limit);
    if boards.is_empty() {
        println!("{}", "No imports yet.".dimmed());
        return Ok(());
    }

    for board in &boards {
        println!("{}", board.event_name.bright_green().bold());
        if board.entries.is_empty() {
            println!("  {}", "No performances yet.".dimmed());
            continue;
        }
        for (rank, entry) in board.entries.iter().enumerate() {
            let meet_info = match &entry.meet_date {
                Some(date) => format!("{} ({})", entry.meet_name, date),
                None => entry.meet_name.clone(),
            };
            println!(
                "  {} {}  {}  {}",
                format!("#{}", rank + 1).bright_yellow().bold(),
                entry.athlete_name,
                format_mark(&entry.mark_raw, Some(entry.mark_value), entry.mark_kind).bold(),
                meet_info.dimmed()
            );
        }
    }

    Ok(())
}

/// Print store totals
fn run_summary(store_file: &StoreFile) -> Result<()> {
    render_summary_line(&store_file.load());
    Ok(())
}

/// Remove every imported meet
fn run_clear(store_file: &StoreFile) -> Result<()> {
    let mut bus = SnapshotBus::new();
    bus.subscribe(render_summary_line);

    let removed = summarize(&store_file.load()).meets;
    store_file.clear()?;
    info!("Cleared {} imported meets", removed);

    println!(
        "{} Removed {}.",
        "ok:".bright_green().bold(),
        plural(removed, "imported meet")
    );
    bus.publish(&store_file.load());

    Ok(())
}

/// Render the one-line store summary used after every mutation
fn render_summary_line(store: &ImportStore) {
    let summary = summarize(store);
    if summary.meets == 0 {
        println!("{}", "No imports yet.".dimmed());
        return;
    }

    println!(
        "{} \u{00b7} {} \u{00b7} {}",
        plural(summary.meets, "meet").bright_white().bold(),
        plural(summary.performances, "performance"),
        plural(summary.athletes, "athlete")
    );
}

/// Derive a display name from the CSV file name
///
/// Drops the extension and turns underscore/hyphen runs into spaces, so
/// "spring_invite-2025.csv" becomes "spring invite 2025".
fn default_meet_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .unwrap_or_default();

    let name = stem
        .split(['_', '-'])
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    if name.is_empty() {
        DEFAULT_MEET_NAME.to_string()
    } else {
        name
    }
}

/// "1 meet" / "3 meets"
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Progress bar advanced once per data row during import
fn create_row_progress_bar() -> ProgressBar {
    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb.set_message("Reading rows...");
    pb
}
