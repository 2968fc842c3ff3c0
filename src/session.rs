use crate::error::{Error, Result};
use crate::trace::{SimulationTrace, StepRecord};

/// The `Session` struct owns everything a front end needs to walk through one simulation run: the
/// trace itself, the step currently on display, and whether auto-play is active. Nothing here is
/// global, so independent sessions never interfere with each other.
///
/// A fresh session sits before the first step; `current` is `None` until the user (or the
/// player) moves forward.
#[derive(Debug, Default)]
pub struct Session {
    trace: SimulationTrace,
    current: Option<usize>,
    playing: bool,
}

impl Session {
    pub fn new(trace: SimulationTrace) -> Self {
        Self {
            trace,
            current: None,
            playing: false,
        }
    }

    /// Swap in the trace of a new run. Navigation restarts and playback stops.
    pub fn replace(&mut self, trace: SimulationTrace) {
        *self = Self::new(trace);
    }

    /// Drop the trace entirely, leaving an empty session.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn trace(&self) -> &SimulationTrace {
        &self.trace
    }

    pub fn position(&self) -> Option<usize> {
        self.current
    }

    pub fn current(&self) -> Option<&StepRecord> {
        self.trace.get(self.current?)
    }

    /// Steps revealed so far, up to and including the current one.
    pub fn visible(&self) -> &[StepRecord] {
        match self.current {
            Some(index) => &self.trace.steps()[..=index],
            None => &[],
        }
    }

    /// Move forward one step. Stays on the last step once it is reached.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&StepRecord> {
        let last = self.trace.len().checked_sub(1)?;
        self.current = Some(match self.current {
            Some(index) => (index + 1).min(last),
            None => 0,
        });
        self.current()
    }

    /// Move back one step. Stays on the first step once it is reached.
    pub fn prev(&mut self) -> Option<&StepRecord> {
        if self.trace.is_empty() {
            return None;
        }
        self.current = Some(self.current.map_or(0, |index| index.saturating_sub(1)));
        self.current()
    }

    pub fn first(&mut self) -> Option<&StepRecord> {
        self.current = (!self.trace.is_empty()).then_some(0);
        self.current()
    }

    pub fn last(&mut self) -> Option<&StepRecord> {
        self.current = self.trace.len().checked_sub(1);
        self.current()
    }

    /// Jump directly to `index`.
    ///
    /// # Errors
    ///
    /// Returns `Error::StepOutOfRange` if the trace has no such step; the position is left as it
    /// was.
    pub fn seek(&mut self, index: usize) -> Result<&StepRecord> {
        if index >= self.trace.len() {
            return Err(Error::StepOutOfRange {
                index,
                len: self.trace.len(),
            });
        }
        self.current = Some(index);
        Ok(&self.trace[index])
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// True once the last step is on display (or immediately, for an empty trace).
    pub fn is_finished(&self) -> bool {
        match self.trace.len().checked_sub(1) {
            Some(last) => self.current == Some(last),
            None => true,
        }
    }

    /// Start auto-play. Playing a finished session restarts it from the beginning.
    pub fn play(&mut self) {
        if self.trace.is_empty() {
            return;
        }
        if self.is_finished() {
            self.current = None;
        }
        self.playing = true;
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn toggle(&mut self) {
        match self.playing {
            true => self.pause(),
            false => self.play(),
        }
    }

    /// Advance one step if playing. Reaching the final step pauses playback. Returns the step
    /// revealed by this tick, if any.
    pub fn tick(&mut self) -> Option<&StepRecord> {
        if !self.playing {
            return None;
        }
        let last = self.trace.len().checked_sub(1)?;
        let index = self.current.map_or(0, |index| (index + 1).min(last));
        self.current = Some(index);
        if index == last {
            self.playing = false;
        }
        self.trace.get(index)
    }
}
