/// Bounded worker pool inserting seed albums during reload
use crate::error::{Result, ServerError};
use digger_core::{Album, AlbumInput, AlbumRepository};
use serde::Serialize;
use std::{collections::VecDeque, sync::Arc};
use tokio::{sync::Mutex, task::JoinSet};

#[derive(Debug, Clone)]
pub struct SeedJob {
    /// Position in the seed list
    pub index: usize,
    pub input: AlbumInput,
    pub owner: Option<String>,
}

/// A seed record that could not be inserted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeedFailure {
    pub index: usize,
    pub message: String,
}

/// Outcome of a reload's insert phase
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReloadReport {
    pub inserted: usize,
    pub failed: Vec<SeedFailure>,
}

impl ReloadReport {
    fn merge(&mut self, other: ReloadReport) {
        self.inserted += other.inserted;
        self.failed.extend(other.failed);
    }
}

pub struct SeedQueue {
    queue: Mutex<VecDeque<SeedJob>>,
    repository: Arc<dyn AlbumRepository>,
    workers: usize,
}

impl SeedQueue {
    pub fn new(repository: Arc<dyn AlbumRepository>, workers: usize) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            repository,
            workers: workers.max(1),
        }
    }

    /// Enqueue a seed record
    pub async fn enqueue(&self, job: SeedJob) {
        let mut queue = self.queue.lock().await;
        queue.push_back(job);
    }

    /// Drain the queue with the configured number of workers
    ///
    /// Returns only after every worker has exited, so every insert has either
    /// landed or been recorded as a failure.
    pub async fn run(self: Arc<Self>) -> Result<ReloadReport> {
        let mut workers = JoinSet::new();
        for worker_id in 0..self.workers {
            let queue = Arc::clone(&self);
            workers.spawn(async move { queue.worker_loop(worker_id).await });
        }

        let mut report = ReloadReport::default();
        while let Some(joined) = workers.join_next().await {
            let worker_report = joined
                .map_err(|e| ServerError::Internal(format!("Seed worker failed: {}", e)))?;
            report.merge(worker_report);
        }

        report.failed.sort_by_key(|failure| failure.index);
        Ok(report)
    }

    /// Worker loop - processes jobs until the queue is empty
    async fn worker_loop(&self, worker_id: usize) -> ReloadReport {
        let mut report = ReloadReport::default();

        loop {
            let job = {
                let mut queue = self.queue.lock().await;
                queue.pop_front()
            };

            let Some(job) = job else {
                break;
            };

            let index = job.index;
            match self.process(job).await {
                Ok(album) => {
                    tracing::debug!(
                        "Worker {} inserted seed album {} as {}",
                        worker_id,
                        index,
                        album.entity_id
                    );
                    report.inserted += 1;
                }
                Err(e) => {
                    tracing::warn!(
                        "Worker {} failed to insert seed album {}: {}",
                        worker_id,
                        index,
                        e
                    );
                    report.failed.push(SeedFailure {
                        index,
                        message: e.to_string(),
                    });
                }
            }
        }

        tracing::debug!("Seed worker {} finished", worker_id);
        report
    }

    /// Validate a single record and insert it
    async fn process(&self, job: SeedJob) -> digger_core::Result<Album> {
        let mut album = job.input.into_new_album()?;
        if let Some(owner) = job.owner {
            album.owner = Some(owner);
        }
        self.repository.create(album).await
    }
}
