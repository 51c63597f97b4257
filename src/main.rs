use clap::Parser;
use eafitos::cli::{Config, ShellArgs};
use eafitos::repl::Exit;
use std::process::exit;
use tracing_subscriber::EnvFilter;

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let config = Config::from_args(ShellArgs::parse());
    init_logging(&config.log_level);

    let code = match eafitos::run_shell(&config) {
        Ok(Exit::Requested(code)) => code,
        Ok(Exit::EndOfInput) => 0,
        Err(e) => {
            eprintln!("eafitos: {}", e);
            1
        }
    };
    exit(code);
}
