//! CLI argument parsing.
use clap::Parser;
use std::path::PathBuf;

/// Mirror a source tree as English-named relative symlinks.
#[derive(Parser, Debug)]
#[command(
    name = "enlink",
    version,
    about = "Mirror a Chinese-named document tree as English-named relative symlinks",
    after_help = "Examples:\n  enlink --src docs --dest . --prefix en --dry-run\n  enlink --src docs --dest mirror --config enlink.json\n\nSet ENLINK_LOG (e.g. ENLINK_LOG=debug) to control log output on stderr."
)]
pub struct Args {
    /// Source tree whose files get English-named links
    #[arg(long, value_name = "DIR")]
    pub src: PathBuf,

    /// Destination root for the link tree
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub dest: PathBuf,

    /// Relative path inserted under the destination root
    #[arg(long, value_name = "REL")]
    pub prefix: Option<PathBuf>,

    /// Print planned links without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// JSON file with extra rules, extensions, exclusions and overrides
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Drop leftover non-ASCII characters instead of romanizing them
    #[arg(long)]
    pub no_romanize: bool,

    /// Log and skip unreadable directories and per-file filesystem errors instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Emit the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,
}
