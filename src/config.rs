use crate::error::Result;
use crate::validator::{parse_input, SimulationInput};
use clap::{Parser, ValueEnum};
use std::env;
use std::time::Duration;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "FIFO page replacement simulator", long_about = None)]
pub struct Config {
    /// Whitespace separated list of valid page identifiers.
    #[arg(long, default_value_t = env_or_default_str("SIM_AVAILABLE_PAGES", ""))]
    pub available: String,

    /// Whitespace separated reference string.
    #[arg(long, default_value_t = env_or_default_str("SIM_REFERENCES", ""))]
    pub references: String,

    /// Number of physical frames.
    #[arg(long, default_value_t = env_or_default_str("SIM_FRAMES", ""))]
    pub frames: String,

    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Step through the timeline automatically instead of printing it at once.
    #[arg(long)]
    pub play: bool,

    #[arg(long, default_value_t = env_or_default_u64("SIM_INTERVAL_MS", 600))]
    pub interval_ms: u64,

    /// Show only the given step (numbered from 1) and the timeline leading up to it.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub step: Option<u64>,
}

impl Config {
    /// Validate the raw input fields and return what the step generator needs.
    pub fn input(&self) -> Result<SimulationInput> {
        parse_input(&self.available, &self.references, &self.frames)
    }

    /// Zero based index of the step selected with `--step`.
    pub fn step_index(&self) -> Option<usize> {
        self.step
            .map(|number| usize::try_from(number - 1).unwrap_or(usize::MAX))
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    pub fn display(&self) {
        println!("simulation configuration values: ");
        println!("{:#?}", self);
    }
}

fn env_or_default_str(varname: &str, default: &str) -> String {
    match env::var(varname) {
        Ok(val) => val,
        _ => String::from(default),
    }
}

fn env_or_default_u64(varname: &str, default: u64) -> u64 {
    match env::var(varname).map(|val| val.trim().parse()) {
        Ok(Ok(val)) => val,
        _ => default,
    }
}
