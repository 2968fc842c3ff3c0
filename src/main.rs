use clap::Parser;
use fifo_page_sim::config::{Config, Format};
use fifo_page_sim::run_simulation;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn init_msg() {
    println!("fifo page replacement simulation");
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let config = Config::parse();
    if config.format == Format::Text {
        init_msg();
        config.display();
        println!();
    }
    match run_simulation(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            err.exit_code()
        }
    }
}
