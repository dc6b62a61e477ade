pub mod chunk;
pub mod config;
pub mod drivers;
pub mod errors;
pub mod results;
pub mod scanner;
pub mod timing;

pub use config::{CliOverrides, ScanConfig};
pub use drivers::{scan_channel, scan_shared};
pub use errors::{ScanError, ScanResult};
pub use results::KeywordIndex;
