use crate::error::Result;
use crate::page::PageId;
use crate::trace::{SimulationTrace, StepRecord, Summary};
use serde::Serialize;

const MARK_HIT: &str = "✓";
const MARK_FAULT: &str = "✗";
const MARK_EMPTY: &str = "-";
const MARK_CHANGED: char = '*';
const COLUMN_GAP: &str = "  ";

/// Statistics card shown above the timeline.
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Total Pages: {:>4}\nHits:        {:>4}\nFaults:      {:>4}\nHit Ratio:   {:>3}%",
        summary.total_pages, summary.hits, summary.faults, summary.hit_ratio_percent,
    )
}

/// One line describing what happened at a single step, followed by the page the next fault will
/// evict once every frame is occupied.
pub fn render_step(step: &StepRecord) -> String {
    let prefix = format!("step {:>3}: page {}", step.step_index + 1, step.page);
    let line = match (step.changed_slot, &step.replaced_page) {
        (None, _) => format!("{} HIT", prefix),
        (Some(slot), None) => format!("{} FAULT -> slot {}", prefix, slot),
        (Some(slot), Some(victim)) => {
            format!("{} FAULT -> slot {} (replaced {})", prefix, slot, victim)
        }
    };
    match &step.next_victim {
        Some(victim) => format!("{}, next victim {}", line, victim),
        None => line,
    }
}

/// Lay the steps out as columns: the referenced page on top, the frame stack below it with the
/// slot written on a fault marked by `*`, and a hit or fault mark at the bottom.
pub fn render_timeline(steps: &[StepRecord]) -> String {
    if steps.is_empty() {
        return String::new();
    }
    let frame_count = steps.first().map_or(0, |step| step.frames.len());
    let width = steps
        .iter()
        .map(|step| step.page.as_str().chars().count())
        .max()
        .unwrap_or(1)
        + 1;

    let mut rows: Vec<Vec<String>> = vec![Vec::with_capacity(steps.len()); frame_count + 2];
    for step in steps {
        rows[0].push(step.page.to_string());
        for (slot, frame) in step.frames.iter().enumerate() {
            let mut cell = frame
                .as_ref()
                .map_or(String::from(MARK_EMPTY), PageId::to_string);
            if step.changed_slot == Some(slot) {
                cell.push(MARK_CHANGED);
            }
            rows[slot + 1].push(cell);
        }
        let status = match step.is_hit {
            true => MARK_HIT,
            false => MARK_FAULT,
        };
        rows[frame_count + 1].push(String::from(status));
    }

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("{:<width$}", cell, width = width))
                .collect::<Vec<_>>()
                .join(COLUMN_GAP)
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Statistics card followed by the full timeline.
pub fn render_text(trace: &SimulationTrace) -> String {
    format!(
        "{}\n\n{}",
        render_summary(&trace.summary()),
        render_timeline(trace.steps())
    )
}

#[derive(Serialize)]
struct Report<'a> {
    summary: Summary,
    frame_count: usize,
    steps: &'a [StepRecord],
}

/// A single step as pretty-printed JSON.
///
/// # Errors
///
/// Returns `Error::Json` if serialization fails.
pub fn render_step_json(step: &StepRecord) -> Result<String> {
    Ok(serde_json::to_string_pretty(step)?)
}

/// The whole run as pretty-printed JSON.
///
/// # Errors
///
/// Returns `Error::Json` if serialization fails.
pub fn render_json(trace: &SimulationTrace) -> Result<String> {
    let report = Report {
        summary: trace.summary(),
        frame_count: trace.frame_count(),
        steps: trace.steps(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}
