use std::path::PathBuf;

use clap::Parser;
use horn_prover::{
    config::{self, Config},
    types::err::{self},
};
use log::LevelFilter;

/// Answers whether queries are derivable from a knowledge base of Horn clauses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// A knowledge base to load on start
    #[arg(short, long)]
    pub kb: Option<PathBuf>,

    /// A query to answer, after which the program exits (may be repeated)
    #[arg(short, long)]
    pub ask: Vec<String>,

    /// Display a trace of each query given with --ask
    #[arg(short, long, default_value_t = false)]
    pub trace: bool,

    /// Display traces as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Display traces without colour
    #[arg(long, default_value_t = false)]
    pub no_color: bool,

    /// The maximum depth of a derivation
    #[arg(long, default_value_t = config::DEPTH_LIMIT)]
    pub depth_limit: usize,

    /// Fail a query when some goal is required during its own derivation
    #[arg(long, default_value_t = false)]
    pub cycle_check: bool,

    /// The level of logs to display, when built with the 'log' feature
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,

    /// Print help as markdown
    #[arg(long, hide = true)]
    pub markdown_help: bool,
}

impl Args {
    pub fn config(&self) -> Result<Config, err::ConfigError> {
        let mut the_config = Config::default();
        the_config.depth_limit.set(self.depth_limit)?;
        the_config.cycle_check.set(self.cycle_check)?;
        Ok(the_config)
    }
}
