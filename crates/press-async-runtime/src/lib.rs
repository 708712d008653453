use std::path::PathBuf;

mod worker;

// Re-export types from library crates
pub use press_impose::{ImpositionResult, ImpositionStatistics, JobConfig};
pub use worker::{WorkerError, WorkerHandle, spawn_worker, worker_task};

/// Commands sent from a front end to the worker
#[derive(Debug)]
pub enum PlanCommand {
    LoadConfig {
        job_id: JobId,
        path: PathBuf,
    },
    Plan {
        job_id: JobId,
        config: JobConfig,
    },
    CalculateStats {
        job_id: JobId,
        config: JobConfig,
    },
    /// Plan the job and write its proof PDF, marks taken from the config
    RenderProof {
        job_id: JobId,
        config: JobConfig,
        output_path: PathBuf,
    },
}

impl PlanCommand {
    pub fn job_id(&self) -> JobId {
        match self {
            PlanCommand::LoadConfig { job_id, .. }
            | PlanCommand::Plan { job_id, .. }
            | PlanCommand::CalculateStats { job_id, .. }
            | PlanCommand::RenderProof { job_id, .. } => *job_id,
        }
    }
}

/// Updates sent from the worker; jobs finish in any order
#[derive(Debug, Clone)]
pub enum PlanUpdate {
    ConfigLoaded {
        job_id: JobId,
        config: JobConfig,
    },
    Planned {
        job_id: JobId,
        result: ImpositionResult,
    },
    StatsCalculated {
        job_id: JobId,
        stats: ImpositionStatistics,
    },
    ProofSaved {
        job_id: JobId,
        path: PathBuf,
        page_count: usize,
    },
    Error {
        job_id: JobId,
        message: String,
    },
}

impl PlanUpdate {
    pub fn job_id(&self) -> JobId {
        match self {
            PlanUpdate::ConfigLoaded { job_id, .. }
            | PlanUpdate::Planned { job_id, .. }
            | PlanUpdate::StatsCalculated { job_id, .. }
            | PlanUpdate::ProofSaved { job_id, .. }
            | PlanUpdate::Error { job_id, .. } => *job_id,
        }
    }
}

/// Caller-chosen handle tying updates back to the command that caused them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JobId(pub u64);
