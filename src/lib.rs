pub mod config;
pub mod error;
pub mod page;
pub mod player;
pub mod render;
pub mod session;
pub mod table;
pub mod trace;
pub mod tracker;
pub mod validator;

use config::{Config, Format};
use error::Result;
use render::{
    render_json, render_step, render_step_json, render_summary, render_text, render_timeline,
};
use session::Session;
use tracing::info;

pub use error::Error;
pub use page::PageId;
pub use trace::{generate_trace, simulate, SimulationTrace, StepRecord, Summary};
pub use validator::{parse_input, validate, SimulationInput};

/// Validate the configured input, simulate it, and present the result the way the configuration
/// asks for: a static report, a JSON document, a single selected step, or an animated walk
/// through the timeline.
pub fn run_simulation(config: Config) -> Result<()> {
    let input = config.input()?;
    info!(
        references = input.references.len(),
        frame_count = input.frame_count,
        "starting simulation"
    );
    let mut session = Session::new(generate_trace(&input.references, input.frame_count)?);

    if let Some(index) = config.step_index() {
        let step = session.seek(index)?;
        match config.format {
            Format::Json => println!("{}", render_step_json(step)?),
            Format::Text => {
                println!("{}", render_step(step));
                println!();
                println!("{}", render_timeline(session.visible()));
            }
        }
        return Ok(());
    }

    match (config.format, config.play) {
        (Format::Json, _) => println!("{}", render_json(session.trace())?),
        (Format::Text, false) => println!("{}", render_text(session.trace())),
        (Format::Text, true) => {
            let bar = player::progress_bar(session.trace().len())?;
            let summary = player::play(&mut session, config.interval(), &bar);
            println!();
            println!("{}", render_timeline(session.visible()));
            println!();
            println!("{}", render_summary(&summary));
        }
    }
    Ok(())
}
