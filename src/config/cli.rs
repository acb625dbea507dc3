use crate::config::toml_config::SampleConfig;
use crate::domain::calculator::Calculator;
use crate::domain::greeting::{GreetingService, GreetingStyle};
use crate::domain::model::{Calculation, Operation};
use crate::domain::summation::SummationService;
use crate::utils::error::{ErrorSeverity, Result};
use crate::utils::validation::Validate;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "release-sample")]
#[command(about = "Sample calculator and greeting tool", version)]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Emit log lines as JSON instead of compact text
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run a calculator operation (add, sub, mul, div, pow, sqrt, ln)
    Calc {
        operation: Operation,
        #[arg(required = true, num_args = 1..=2, allow_negative_numbers = true)]
        operands: Vec<f64>,
    },
    /// Greet a single name
    Greet { name: String },
    /// Greet several names in one style
    GreetList {
        /// formal, casual, or anything else for a plain greeting
        #[arg(short, long)]
        style: Option<GreetingStyle>,
        #[arg(required = true)]
        names: Vec<String>,
    },
    /// Sum a list of 32-bit integers
    Sum {
        #[arg(required = true, allow_negative_numbers = true)]
        numbers: Vec<i32>,
    },
}

/// Result of a command, rendered as plain text or as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutput {
    pub text: String,
    pub json: serde_json::Value,
}

impl CliConfig {
    /// Loads the `--config` file if given, else defaults, and validates it.
    pub fn load_sample_config(&self) -> Result<SampleConfig> {
        let config = match &self.config {
            Some(path) => SampleConfig::from_file(path)?,
            None => SampleConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Command {
    pub fn execute(&self, config: &SampleConfig) -> Result<CommandOutput> {
        match self {
            Command::Calc {
                operation,
                operands,
            } => {
                let result = Calculator::new().evaluate(*operation, operands)?;
                let calculation = Calculation {
                    operation: *operation,
                    operands: operands.clone(),
                    result,
                };
                Ok(CommandOutput {
                    text: result.to_string(),
                    json: serde_json::to_value(&calculation)?,
                })
            }
            Command::Greet { name } => {
                let message = GreetingService::new(config.library_name()).greeting(name)?;
                Ok(CommandOutput {
                    json: json!({ "message": message }),
                    text: message,
                })
            }
            Command::GreetList { style, names } => {
                let style = style.unwrap_or_else(|| config.default_style());
                let service = GreetingService::new(config.library_name());
                let messages = service.greeting_list(names.as_slice(), style)?;
                Ok(CommandOutput {
                    text: messages.join("\n"),
                    json: json!({ "style": style, "messages": messages }),
                })
            }
            Command::Sum { numbers } => {
                let total = SummationService::new().sum_numbers(numbers)?;
                Ok(CommandOutput {
                    text: total.to_string(),
                    json: json!({ "numbers": numbers, "total": total }),
                })
            }
        }
    }
}

pub fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::SampleError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn parse(args: &[&str]) -> CliConfig {
        let mut argv = vec!["release-sample"];
        argv.extend_from_slice(args);
        CliConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_exit_code_per_severity() {
        assert_eq!(exit_code(ErrorSeverity::Low), 0);
        assert_eq!(exit_code(ErrorSeverity::Medium), 2);
        assert_eq!(exit_code(ErrorSeverity::High), 1);
        assert_eq!(exit_code(ErrorSeverity::Critical), 3);
    }

    #[test]
    fn test_calc_output_shape() {
        let cli = parse(&["calc", "pow", "2", "3"]);
        let output = cli.command.execute(&SampleConfig::default()).unwrap();
        assert_eq!(output.text, "8");
        assert_eq!(output.json["operation"], "power");
        assert_eq!(output.json["operands"], json!([2.0, 3.0]));
        assert_eq!(output.json["result"], 8.0);
    }

    #[test]
    fn test_calc_errors_map_to_high_severity() {
        let cli = parse(&["calc", "div", "5", "0"]);
        let err = cli.command.execute(&SampleConfig::default()).unwrap_err();
        assert!(matches!(err, SampleError::DivideByZero { .. }));
        assert_eq!(exit_code(err.severity()), 1);

        let cli = parse(&["calc", "ln", "1", "2"]);
        let err = cli.command.execute(&SampleConfig::default()).unwrap_err();
        assert!(matches!(err, SampleError::OperandCount { .. }));
    }

    #[test]
    fn test_greet_list_falls_back_to_configured_style() {
        let toml_content = r#"
[library]
name = "Demo"
default_style = "formal"
"#;
        let config = SampleConfig::from_toml_str(toml_content).unwrap();

        let output = parse(&["greet-list", "Ada"]).command.execute(&config).unwrap();
        assert_eq!(output.text, "Greetings, Ada! Welcome to Demo Library.");
        assert_eq!(output.json["style"], "formal");
        assert_eq!(output.json["messages"][0], output.text);

        let output = parse(&["greet-list", "-s", "casual", "Ada", "Linus"])
            .command
            .execute(&config)
            .unwrap();
        assert_eq!(
            output.text,
            "Hey, Ada! Welcome to Demo Library.\nHey, Linus! Welcome to Demo Library."
        );
    }

    #[test]
    fn test_greet_and_sum_output() {
        let config = SampleConfig::default();

        let output = parse(&["greet", "Ada"]).command.execute(&config).unwrap();
        assert_eq!(output.json["message"], output.text);

        let output = parse(&["sum", "4", "-1", "7"]).command.execute(&config).unwrap();
        assert_eq!(output.text, "10");
        assert_eq!(output.json, json!({ "numbers": [4, -1, 7], "total": 10 }));

        let err = parse(&["sum", "2147483647", "1"])
            .command
            .execute(&config)
            .unwrap_err();
        assert!(matches!(err, SampleError::Overflow { .. }));
    }

    #[test]
    fn test_load_sample_config() {
        let cli = parse(&["sum", "1"]);
        assert_eq!(cli.load_sample_config().unwrap(), SampleConfig::default());

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[logging]\nlevel = \"verbose\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap();
        let err = parse(&["--config", path, "sum", "1"])
            .load_sample_config()
            .unwrap_err();
        assert!(matches!(err, SampleError::InvalidConfigValue { .. }));
        assert_eq!(exit_code(err.severity()), 2);

        let err = parse(&["--config", "/definitely/not/here.toml", "sum", "1"])
            .load_sample_config()
            .unwrap_err();
        assert_eq!(exit_code(err.severity()), 3);
    }

    #[test]
    fn test_parse_calc() {
        let cli = CliConfig::try_parse_from(["release-sample", "calc", "div", "6", "3"]).unwrap();
        match cli.command {
            Command::Calc {
                operation,
                operands,
            } => {
                assert_eq!(operation, Operation::Divide);
                assert_eq!(operands, vec![6.0, 3.0]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_negative_operands() {
        let cli = CliConfig::try_parse_from(["release-sample", "calc", "sqrt", "-4"]).unwrap();
        assert!(matches!(cli.command, Command::Calc { ref operands, .. } if operands == &[-4.0]));
    }

    #[test]
    fn test_parse_greet_list_with_global_flags() {
        let cli = CliConfig::try_parse_from([
            "release-sample",
            "greet-list",
            "--style",
            "formal",
            "Ada",
            "Linus",
            "--json",
        ])
        .unwrap();
        assert!(cli.json);
        match cli.command {
            Command::GreetList { style, names } => {
                assert_eq!(style, Some(GreetingStyle::Formal));
                assert_eq!(names, vec!["Ada", "Linus"]);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operation_is_rejected() {
        assert!(CliConfig::try_parse_from(["release-sample", "calc", "mod", "1", "2"]).is_err());
    }
}
