use crate::error::Result;
use crate::render::{render_step, render_summary};
use crate::session::Session;
use crate::trace::Summary;
use indicatif::{ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;
use tracing::debug;

const TEMPLATE: &str = "[{bar:40.cyan/blue}] step {pos}/{len} {msg}";

/// Build a progress bar sized for `len` steps in the style used by auto-play.
///
/// # Errors
///
/// Returns `Error::Template` if the progress template is rejected.
pub fn progress_bar(len: usize) -> Result<ProgressBar> {
    let bar = ProgressBar::new(len as u64);
    bar.set_style(ProgressStyle::with_template(TEMPLATE)?.progress_chars("=> "));
    Ok(bar)
}

/// Auto-play a session from its first step to its last, revealing one step every `interval`.
/// Each revealed step is printed above the bar, and the bar finishes with the final statistics.
///
/// # Arguments
///
/// * `session` - the session to walk; it is left positioned on its last step.
/// * `interval` - delay between two steps.
/// * `bar` - progress bar tracking the position in the timeline.
pub fn play(session: &mut Session, interval: Duration, bar: &ProgressBar) -> Summary {
    bar.set_length(session.trace().len() as u64);
    bar.set_position(0);
    session.play();

    while let Some(step) = session.tick() {
        debug!(step = step.step_index, "auto-play");
        bar.println(render_step(step));
        bar.set_message(format!("{}%", step.hit_ratio_percent));
        bar.set_position(step.step_index as u64 + 1);
        if session.is_playing() {
            thread::sleep(interval);
        }
    }

    let summary = session.trace().summary();
    bar.finish_with_message(render_summary(&summary).replace('\n', "  "));
    summary
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::page::tokenize;
    use crate::trace::{generate_trace, SimulationTrace};

    fn make_trace() -> SimulationTrace {
        generate_trace(&tokenize("1 2 3 4 1 2 5"), 3).unwrap()
    }

    #[test]
    fn progress_bar_style() {
        let bar = progress_bar(7).unwrap();
        assert_eq!(bar.length(), Some(7));
    }

    #[test]
    fn plays_whole_trace() {
        let mut session = Session::new(make_trace());
        let bar = ProgressBar::hidden();
        let summary = play(&mut session, Duration::ZERO, &bar);

        assert_eq!(summary.faults, 7);
        assert_eq!(bar.position(), 7);
        assert!(bar.is_finished());
        assert!(session.is_finished());
        assert!(!session.is_playing());
    }

    #[test]
    fn replays_finished_session() {
        let mut session = Session::new(make_trace());
        session.last();
        let bar = ProgressBar::hidden();
        play(&mut session, Duration::ZERO, &bar);
        assert_eq!(bar.position(), 7);
        assert_eq!(session.visible().len(), 7);
    }

    #[test]
    fn empty_session() {
        let mut session = Session::default();
        let bar = ProgressBar::hidden();
        let summary = play(&mut session, Duration::ZERO, &bar);
        assert_eq!(summary.total_pages, 0);
        assert_eq!(bar.position(), 0);
    }
}
