use std::path::PathBuf;

use clap::Parser;
use spr_config::SprConfig;

/// Command-line flags for the `spr` binary. Each flag overrides the
/// corresponding config value.
#[derive(Debug, Parser)]
#[command(name = "spr", version, about = "SPR - student placement records server")]
pub struct Cli {
    /// Interface to bind (overrides server.host)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind (overrides server.port)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database file, or ":memory:" (overrides database.path)
    #[arg(long)]
    pub database: Option<String>,

    /// Static frontend directory (overrides frontend.dir)
    #[arg(long)]
    pub frontend: Option<PathBuf>,

    /// Do not insert sample data into an empty store
    #[arg(long)]
    pub no_seed: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Layer the flags on top of loaded configuration.
    pub fn apply(&self, config: &mut SprConfig) {
        if let Some(host) = &self.host {
            config.server.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(database) = &self.database {
            config.database.path.clone_from(database);
        }
        if let Some(frontend) = &self.frontend {
            config.frontend.dir.clone_from(frontend);
        }
        if self.no_seed {
            config.database.seed_sample_data = false;
        }
    }
}
