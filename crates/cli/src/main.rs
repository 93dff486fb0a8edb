use clap::Parser;
use freq_tally_cli::args::Args;
use freq_tally_cli::config::AppConfig;
use freq_tally_cli::menu;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = AppConfig::from(args);

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &AppConfig) -> anyhow::Result<()> {
    let counter = freq_tally_engine::run(&config.engine)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    menu::run_menu(&counter, config.format, &mut stdin.lock(), &mut stdout.lock())?;
    Ok(())
}
