mod analysis_delay;
mod http_cache;
mod requests_logging;

pub use analysis_delay::analysis_delay;
#[cfg(feature = "slowdown")]
pub use analysis_delay::slowdown_request;
pub use http_cache::http_cache;
pub use requests_logging::{log_requests, RequestsLoggingLevel};
