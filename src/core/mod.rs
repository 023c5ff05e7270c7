pub mod aggregator;
pub mod csv_line;
pub mod etl;
pub mod lines;
pub mod postal_code;
pub mod report;

pub use crate::domain::model::{Record, ReportEntry};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
