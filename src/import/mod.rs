pub use self::batch::{run_batch, BatchReport, ImportResult, NoFilesSelected};
pub use self::queue::{normalize_path, AddOutcome, AddReport, ImportQueue, QueueEntry};
pub use self::report::{Report, ReportLevel, ReportLog};

mod batch;
mod queue;
mod report;
