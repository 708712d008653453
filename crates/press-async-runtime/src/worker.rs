use std::path::PathBuf;

use press_impose::{JobConfig, calculate_statistics, plan_async, render_proof, save_pdf};
use thiserror::Error;
use tokio::sync::mpsc;
use tokio::task::{JoinHandle, JoinSet};

use crate::{JobId, PlanCommand, PlanUpdate};

#[derive(Error, Debug)]
pub enum WorkerError {
    #[error("Worker has shut down")]
    Closed,
    #[error("Worker task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Async worker task that processes plan commands and sends updates.
///
/// Every command runs on its own task so a slow proof does not hold up
/// quick plans. Once the command channel closes, in-flight jobs are awaited
/// before the task returns.
pub async fn worker_task(
    mut command_rx: mpsc::UnboundedReceiver<PlanCommand>,
    update_tx: mpsc::UnboundedSender<PlanUpdate>,
) {
    let mut jobs = JoinSet::new();

    while let Some(cmd) = command_rx.recv().await {
        log::info!("Job {:?} received", cmd.job_id());
        jobs.spawn(process_command(cmd, update_tx.clone()));

        // Reap finished jobs so the set does not grow with the session
        while let Some(done) = jobs.try_join_next() {
            if let Err(e) = done {
                log::error!("Job task failed: {}", e);
            }
        }
    }

    while let Some(done) = jobs.join_next().await {
        if let Err(e) = done {
            log::error!("Job task failed: {}", e);
        }
    }
    log::debug!("Worker stopped");
}

async fn process_command(cmd: PlanCommand, update_tx: mpsc::UnboundedSender<PlanUpdate>) {
    let update = match cmd {
        PlanCommand::LoadConfig { job_id, path } => handle_load_config(job_id, path).await,
        PlanCommand::Plan { job_id, config } => handle_plan(job_id, config).await,
        PlanCommand::CalculateStats { job_id, config } => handle_calculate_stats(job_id, config).await,
        PlanCommand::RenderProof {
            job_id,
            config,
            output_path,
        } => handle_render_proof(job_id, config, output_path).await,
    };

    if let PlanUpdate::Error { job_id, message } = &update {
        log::warn!("Job {:?} failed: {}", job_id, message);
    }
    let _ = update_tx.send(update);
}

async fn handle_load_config(job_id: JobId, path: PathBuf) -> PlanUpdate {
    match JobConfig::load(&path).await {
        Ok(config) => PlanUpdate::ConfigLoaded { job_id, config },
        Err(e) => PlanUpdate::Error {
            job_id,
            message: format!("Failed to load configuration: {}", e),
        },
    }
}

async fn handle_plan(job_id: JobId, config: JobConfig) -> PlanUpdate {
    match plan_async(config).await {
        Ok(result) => PlanUpdate::Planned { job_id, result },
        Err(e) => PlanUpdate::Error {
            job_id,
            message: format!("Failed to plan: {}", e),
        },
    }
}

async fn handle_calculate_stats(job_id: JobId, config: JobConfig) -> PlanUpdate {
    match plan_async(config).await {
        Ok(result) => PlanUpdate::StatsCalculated {
            job_id,
            stats: calculate_statistics(&result),
        },
        Err(e) => PlanUpdate::Error {
            job_id,
            message: format!("Failed to calculate statistics: {}", e),
        },
    }
}

async fn handle_render_proof(job_id: JobId, config: JobConfig, output_path: PathBuf) -> PlanUpdate {
    let marks = config.marks;
    let rendered = async {
        let result = plan_async(config).await?;
        let page_count = result.side_count();
        let doc = render_proof(&result, &marks)?;
        save_pdf(doc, &output_path).await?;
        Ok::<_, press_impose::ImposeError>(page_count)
    }
    .await;

    match rendered {
        Ok(page_count) => PlanUpdate::ProofSaved {
            job_id,
            path: output_path,
            page_count,
        },
        Err(e) => PlanUpdate::Error {
            job_id,
            message: format!("Failed to render proof: {}", e),
        },
    }
}

/// A running worker plus both ends of its channels
pub struct WorkerHandle {
    commands: mpsc::UnboundedSender<PlanCommand>,
    updates: mpsc::UnboundedReceiver<PlanUpdate>,
    task: JoinHandle<()>,
}

impl WorkerHandle {
    pub fn send(&self, cmd: PlanCommand) -> Result<(), WorkerError> {
        self.commands.send(cmd).map_err(|_| WorkerError::Closed)
    }

    /// Next update in completion order; `None` once the worker has stopped
    pub async fn next_update(&mut self) -> Option<PlanUpdate> {
        self.updates.recv().await
    }

    /// Close the command channel, wait for in-flight jobs and return the
    /// updates not yet received
    pub async fn shutdown(self) -> Result<Vec<PlanUpdate>, WorkerError> {
        let WorkerHandle {
            commands,
            mut updates,
            task,
        } = self;
        drop(commands);
        task.await?;

        let mut remaining = Vec::new();
        while let Ok(update) = updates.try_recv() {
            remaining.push(update);
        }
        Ok(remaining)
    }
}

/// Spawn `worker_task` on the current runtime
pub fn spawn_worker() -> WorkerHandle {
    let (command_tx, command_rx) = mpsc::unbounded_channel();
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let task = tokio::spawn(worker_task(command_rx, update_tx));
    WorkerHandle {
        commands: command_tx,
        updates: update_rx,
        task,
    }
}
