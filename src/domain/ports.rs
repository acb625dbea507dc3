use crate::utils::error::SampleError;

/// Receives errors raised by the services before they are handed back to
/// the caller. Reporting never alters the error.
pub trait ErrorReporter: Send + Sync {
    fn report(&self, operation: &str, error: &SampleError);
}

/// Forwards reported errors to `tracing` at warn level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ErrorReporter for TracingReporter {
    fn report(&self, operation: &str, error: &SampleError) {
        tracing::warn!(
            operation,
            category = ?error.category(),
            "Error in {}: {}",
            operation,
            error
        );
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

impl ErrorReporter for NoopReporter {
    fn report(&self, _operation: &str, _error: &SampleError) {}
}

impl<F> ErrorReporter for F
where
    F: Fn(&str, &SampleError) + Send + Sync,
{
    fn report(&self, operation: &str, error: &SampleError) {
        self(operation, error)
    }
}
