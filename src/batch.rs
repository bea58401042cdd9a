use crate::engine::{Evaluation, ScoringEngine};
use crate::intake::{list_application_files, read_application};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum BatchOutcome {
    Scored(Evaluation),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BatchEntry {
    pub path: PathBuf,
    pub outcome: BatchOutcome,
}

/// Score every application file under `root`, one at a time.
///
/// Files that cannot be read or decoded, and directory entries the walk could
/// not open, are recorded as failures and do not stop the run. Entries are
/// ordered by path.
pub fn score_directory(engine: &ScoringEngine, root: &Path) -> Vec<BatchEntry> {
    let discovery = list_application_files(root);
    let mut entries: Vec<BatchEntry> = discovery
        .files
        .into_iter()
        .map(|path| {
            let outcome = match read_application(&path) {
                Ok(loaded) => {
                    let evaluation = engine.evaluate(&loaded.record);
                    info!(
                        file = %path.display(),
                        status = evaluation.assessment.status(),
                        probability = evaluation.assessment.probability(),
                        "scored application"
                    );
                    BatchOutcome::Scored(evaluation)
                }
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "skipping application");
                    BatchOutcome::Failed(err.to_string())
                }
            };
            BatchEntry { path, outcome }
        })
        .collect();

    for unreadable in discovery.unreadable {
        warn!(
            path = %unreadable.path.display(),
            error = %unreadable.reason,
            "could not walk entry"
        );
        entries.push(BatchEntry {
            path: unreadable.path,
            outcome: BatchOutcome::Failed(unreadable.reason),
        });
    }
    entries.sort_by(|a, b| a.path.cmp(&b.path));
    entries
}
