use std::future::Future;

use crate::domain::common::entities::app_errors::CoreError;

/// Liveness probe against the analysis backend root route.
#[cfg_attr(test, mockall::automock)]
pub trait BackendHealthCheck: Send + Sync {
    /// Returns the greeting message the backend reports when it is up.
    fn health(&self) -> impl Future<Output = Result<String, CoreError>> + Send;
}
