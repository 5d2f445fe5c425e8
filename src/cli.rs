use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, PartialEq)]
#[command(name = "tabletick")]
#[command(about = "Track elapsed session time and effect expiries for tabletop games")]
pub struct CliArgs {
    /// Path to the session state file (overrides the platform default)
    #[arg(long)]
    pub state_file: Option<PathBuf>,

    /// Do not persist session state between runs
    #[arg(long)]
    pub no_save: bool,
}
