use clap::Parser;
use trv_cli::types::LogLevel;
use trv_cli::{Cli, run};

fn main() {
    // Reset SIGPIPE to default behavior to prevent panic on broken pipe
    // (e.g., when piping `trv export` into `head`)
    #[cfg(unix)]
    reset_sigpipe();

    let cli = Cli::parse();
    init_logger(cli.log_level);

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// RUST_LOG, when set, takes precedence over --log-level.
fn init_logger(level: LogLevel) {
    let env = env_logger::Env::default().default_filter_or(level.to_string());
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .init();
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
