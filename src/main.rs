mod cli;
mod colorscheme;
mod config;
mod dump;
mod logger;
mod theme;

use clap::Parser;

use cli::_cli::{run, Cli};
use config::_config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;

    // a broken log directory should not stop a conversion
    let _log_guard = match logger::_logger::init(&config.log_dir, &config.log_level) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled: {e:#}");
            None
        }
    };

    run(cli, config)
}
