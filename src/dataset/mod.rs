mod job;
mod summary;
mod writer;

pub use job::run_job;
pub use summary::DatasetSummary;
pub use writer::{DatasetError, read_dataset, write_dataset};
