pub mod config;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, Command, CommandOutput};

pub use config::SampleConfig;
pub use domain::calculator::Calculator;
pub use domain::greeting::{GreetingService, GreetingStyle};
pub use domain::model::{Calculation, Operation};
pub use domain::ports::{ErrorReporter, NoopReporter, TracingReporter};
pub use domain::summation::SummationService;
pub use utils::error::{Result, SampleError};
