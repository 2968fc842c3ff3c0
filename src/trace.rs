use crate::error::Result;
use crate::page::PageId;
use crate::table::FrameTable;
use crate::tracker::Tracker;
use crate::validator::parse_input;
use serde::Serialize;
use std::ops::Index;
use tracing::{debug, info};

/// The state of the simulation immediately after one reference was processed. Records are never
/// modified once the generator emits them, and `frames` is a private copy of the frame table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepRecord {
    pub step_index: usize,
    pub page: PageId,
    pub frames: Vec<Option<PageId>>,
    pub is_hit: bool,
    pub changed_slot: Option<usize>,
    pub replaced_page: Option<PageId>,
    pub next_victim: Option<PageId>,
    pub running_hits: usize,
    pub running_faults: usize,
    pub hit_ratio_percent: u8,
}

impl StepRecord {
    pub fn is_fault(&self) -> bool {
        !self.is_hit
    }
}

/// Final statistics of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub total_pages: usize,
    pub hits: usize,
    pub faults: usize,
    pub hit_ratio_percent: u8,
}

impl From<Tracker> for Summary {
    fn from(tracker: Tracker) -> Self {
        Self {
            total_pages: tracker.accesses(),
            hits: tracker.hits,
            faults: tracker.faults,
            hit_ratio_percent: tracker.hit_ratio_percent(),
        }
    }
}

/// Every step of one simulation run, in reference order.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SimulationTrace {
    frame_count: usize,
    steps: Vec<StepRecord>,
}

impl SimulationTrace {
    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    pub fn steps(&self) -> &[StepRecord] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StepRecord> {
        self.steps.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StepRecord> {
        self.steps.iter()
    }

    /// Statistics after the final step. An empty trace reports all zeros.
    pub fn summary(&self) -> Summary {
        let tracker = match self.steps.last() {
            Some(step) => Tracker {
                hits: step.running_hits,
                faults: step.running_faults,
            },
            None => Tracker::new(),
        };
        Summary::from(tracker)
    }
}

impl Index<usize> for SimulationTrace {
    type Output = StepRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a SimulationTrace {
    type Item = &'a StepRecord;
    type IntoIter = std::slice::Iter<'a, StepRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Run the FIFO replacement algorithm over `references` with `frame_count` frames and return the
/// complete trace. The references are expected to have been validated already.
///
/// On a hit nothing moves: the page keeps its slot and the cursor stays put. On a fault the page
/// lands in the slot under the cursor, whatever was there is reported as replaced, and the cursor
/// advances by one slot, wrapping at the end of the table.
///
/// # Arguments
///
/// * `references` - page accesses, in order.
/// * `frame_count` - number of frames in the simulated memory.
///
/// # Errors
///
/// Returns `Error::InvalidConfig` when `frame_count` is zero or above `MAX_FRAMES`.
pub fn generate_trace(references: &[PageId], frame_count: usize) -> Result<SimulationTrace> {
    let mut table = FrameTable::build(frame_count)?;
    let mut tracker = Tracker::new();
    let mut steps = Vec::with_capacity(references.len());

    for (step_index, page) in references.iter().enumerate() {
        let (changed_slot, replaced_page) = match table.find(page) {
            Some(_) => {
                tracker.record_hit();
                (None, None)
            }
            None => {
                tracker.record_fault();
                let loaded = table.load(page.clone());
                (Some(loaded.slot), loaded.replaced)
            }
        };

        let step = StepRecord {
            step_index,
            page: page.clone(),
            frames: table.snapshot(),
            is_hit: changed_slot.is_none(),
            changed_slot,
            replaced_page,
            next_victim: table.next_victim().cloned(),
            running_hits: tracker.hits,
            running_faults: tracker.faults,
            hit_ratio_percent: tracker.hit_ratio_percent(),
        };
        debug!(
            step = step_index,
            page = %step.page,
            hit = step.is_hit,
            slot = ?step.changed_slot,
            "step"
        );
        steps.push(step);
    }

    info!(
        references = references.len(),
        frame_count,
        hits = tracker.hits,
        faults = tracker.faults,
        "simulation complete"
    );

    Ok(SimulationTrace { frame_count, steps })
}

/// Validate the three raw input fields and, if they are accepted, simulate them.
///
/// # Errors
///
/// Any error from [`parse_input`] or [`generate_trace`]. Nothing is simulated when validation
/// fails.
pub fn simulate(
    available_raw: &str,
    references_raw: &str,
    frame_count_raw: &str,
) -> Result<SimulationTrace> {
    let input = parse_input(available_raw, references_raw, frame_count_raw)?;
    generate_trace(&input.references, input.frame_count)
}
