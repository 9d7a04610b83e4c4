mod cli;
mod platform;

use clap::Parser;
use log::LevelFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let log_path = cli
        .log_file
        .unwrap_or_else(engine_logging::default_log_path);
    engine_logging::initialize(cli.log.into(), level, &log_path);

    let mut settings = textscope_engine::load_settings(&cli.config);
    if let Some(out_dir) = cli.out_dir {
        settings.out_dir = out_dir;
    }

    platform::run_app(settings)
}
