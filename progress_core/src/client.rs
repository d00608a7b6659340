use tokio::sync::watch;
use tracing::debug;

use crate::progress::{Progress, next_record};

/// Progress store held by a front-end for the current learner.
///
/// Presentation code reads [`ClientProgressStore::user_progress`], calls
/// [`ClientProgressStore::update_progress`] when a lesson is completed and
/// re-renders from a [`ClientProgressStore::subscribe`] receiver.
#[derive(Debug)]
pub struct ClientProgressStore {
    progress_tx: watch::Sender<Progress>,
}

impl ClientProgressStore {
    pub fn new() -> Self {
        Self::with_progress(Progress::new())
    }

    // Seed the store from a previously fetched snapshot.
    pub fn with_progress(progress: Progress) -> Self {
        let (progress_tx, _) = watch::channel(progress);
        Self { progress_tx }
    }

    pub fn user_progress(&self) -> Progress {
        self.progress_tx.borrow().clone()
    }

    pub fn update_progress(&self, content_id: &str, points: i64) {
        self.progress_tx.send_modify(|progress| {
            *progress = next_record(progress, content_id, points);
            debug!(
                content_id,
                points,
                total_points = progress.total_points,
                level = progress.level,
                "client progress updated"
            );
        });
    }

    pub fn subscribe(&self) -> watch::Receiver<Progress> {
        self.progress_tx.subscribe()
    }

    pub fn reset(&self) {
        self.progress_tx.send_replace(Progress::new());
    }
}

impl Default for ClientProgressStore {
    fn default() -> Self {
        Self::new()
    }
}
