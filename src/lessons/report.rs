use std::fmt;
use std::path::PathBuf;

/// Per-output status for one lesson's generation.
#[derive(Debug)]
pub enum LessonOutcome {
    /// CSV written; row count included for the status line.
    Written { path: PathBuf, rows: usize },
    /// Lesson skipped or failed; the run continues.
    Skipped { reason: String },
}

#[derive(Debug)]
pub struct LessonReport {
    pub lesson: u8,
    pub outcome: LessonOutcome,
}

impl LessonReport {
    pub fn written(lesson: u8, path: PathBuf, rows: usize) -> Self {
        Self {
            lesson,
            outcome: LessonOutcome::Written { path, rows },
        }
    }

    pub fn skipped(lesson: u8, reason: impl Into<String>) -> Self {
        Self {
            lesson,
            outcome: LessonOutcome::Skipped {
                reason: reason.into(),
            },
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self.outcome, LessonOutcome::Written { .. })
    }
}

impl fmt::Display for LessonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            LessonOutcome::Written { path, rows } => {
                write!(f, "lesson {:02}: {} ({} rows)", self.lesson, path.display(), rows)
            }
            LessonOutcome::Skipped { reason } => {
                write!(f, "lesson {:02}: skipped ({})", self.lesson, reason)
            }
        }
    }
}
