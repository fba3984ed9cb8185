use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

#[macro_use]
mod macros;
mod cli;
mod config;
mod mapper;
mod materialize;
mod overrides;
mod translate;

use cli::Args;
use mapper::PathMapper;
use materialize::{materialize, MaterializeOptions};

const LOG_ENV: &str = "ENLINK_LOG";

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    run(args)
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "enlink=debug" } else { "enlink=warn" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => config::default_config(),
    };
    config::validate_config(&config)?;

    let romanizer = translate::select_romanizer(!args.no_romanize);
    let mapper = PathMapper::from_config(&config, romanizer);
    tracing::debug!(
        romanizer = mapper.translator().romanizer_name(),
        override_scopes = mapper.overrides().scope_count(),
        "translator ready"
    );

    let options = MaterializeOptions {
        source: args.src,
        dest: args.dest,
        prefix: args.prefix.unwrap_or_default(),
        dry_run: args.dry_run,
        keep_going: args.keep_going,
        exclude_dirs: config.exclude_dirs.clone(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = materialize(&options, &mapper, &mut out)?;
    if args.json {
        let text = serde_json::to_string_pretty(&report).context("serialize summary")?;
        writeln!(out, "{text}").context("write summary")?;
    } else {
        writeln!(
            out,
            "Planned: {}, Created: {}",
            report.planned, report.created
        )
        .context("write summary")?;
    }
    Ok(())
}
