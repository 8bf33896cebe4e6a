use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "nav-demo")]
#[command(about = "Five screens wired through a typed navigation graph")]
pub struct Cli {
    /// Host config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log file, truncated on each run
    #[arg(long, default_value = "nav-demo.log")]
    pub log_file: PathBuf,
}
