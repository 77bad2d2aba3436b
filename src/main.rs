use std::io;
use std::process::ExitCode;

use clap::Parser;

use passgen::cli::{self, Args};
use passgen::core::config::Config;
use passgen::crypto::SecureRandom;
use passgen::logging;
use passgen::system::SystemClipboard;

fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let (config, config_errors) = Config::load();

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
    }
    for e in config_errors {
        log::warn!("{}; keeping the default", e);
    }

    let mut rng = SecureRandom::new();
    let mut clipboard = SystemClipboard::new();
    let stdout = io::stdout();
    let stderr = io::stderr();

    let result = cli::run(
        &args,
        &config,
        &mut rng,
        &mut clipboard,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match result {
        Ok(status) => status.into(),
        Err(e) => {
            let _ = cli::report_failure(&e, &mut io::stderr());
            ExitCode::from(1)
        }
    }
}
