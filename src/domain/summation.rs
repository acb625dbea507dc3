use crate::domain::ports::{ErrorReporter, TracingReporter};
use crate::utils::error::{Result, SampleError};
use crate::utils::validation::validate_non_empty_list;

/// Checked 32-bit integer arithmetic.
pub struct SummationService<R: ErrorReporter = TracingReporter> {
    reporter: R,
}

impl SummationService<TracingReporter> {
    pub fn new() -> Self {
        Self::with_reporter(TracingReporter)
    }
}

impl Default for SummationService<TracingReporter> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ErrorReporter> SummationService<R> {
    pub fn with_reporter(reporter: R) -> Self {
        Self { reporter }
    }

    pub fn add(&self, a: i32, b: i32) -> Result<i32> {
        a.checked_add(b)
            .ok_or_else(|| self.fail("add", SampleError::Overflow { operation: "add" }))
    }

    pub fn sum_numbers(&self, numbers: &[i32]) -> Result<i32> {
        validate_non_empty_list("numbers", numbers).map_err(|e| self.fail("sum_numbers", e))?;

        let total = numbers
            .iter()
            .try_fold(0i32, |acc, &n| acc.checked_add(n))
            .ok_or_else(|| {
                self.fail(
                    "sum_numbers",
                    SampleError::Overflow {
                        operation: "sum_numbers",
                    },
                )
            })?;
        tracing::debug!(count = numbers.len(), total, "summed numbers");
        Ok(total)
    }

    fn fail(&self, operation: &str, error: SampleError) -> SampleError {
        self.reporter.report(operation, &error);
        error
    }
}
