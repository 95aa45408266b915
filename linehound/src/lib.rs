pub mod config;
pub mod errors;
pub mod report;
pub mod results;
pub mod scan;
pub mod walker;

pub use config::ScanConfig;
pub use errors::{ScanError, ScanResult};
pub use results::{MatchRecord, RunResult, WorkerId};
pub use scan::scan;
