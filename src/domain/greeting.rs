use crate::domain::ports::{ErrorReporter, TracingReporter};
use crate::utils::error::{Result, SampleError};
use crate::utils::validation::validate_non_empty_list;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_LIBRARY_NAME: &str = "Neolution.ReleaseProcessTest";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum GreetingStyle {
    Formal,
    #[default]
    Casual,
    Plain,
}

impl GreetingStyle {
    pub fn prefix(self) -> &'static str {
        match self {
            GreetingStyle::Formal => "Greetings",
            GreetingStyle::Casual => "Hey",
            GreetingStyle::Plain => "Hello",
        }
    }
}

impl fmt::Display for GreetingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GreetingStyle::Formal => "formal",
            GreetingStyle::Casual => "casual",
            GreetingStyle::Plain => "plain",
        };
        f.write_str(name)
    }
}

/// Case-insensitive, untrimmed. Unrecognised styles fall back to
/// [`GreetingStyle::Plain`].
impl FromStr for GreetingStyle {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "formal" => GreetingStyle::Formal,
            "casual" => GreetingStyle::Casual,
            _ => GreetingStyle::Plain,
        })
    }
}

impl From<String> for GreetingStyle {
    fn from(s: String) -> Self {
        match s.parse::<Self>() {
            Ok(style) => style,
            Err(never) => match never {},
        }
    }
}

pub struct GreetingService<R: ErrorReporter = TracingReporter> {
    library_name: String,
    reporter: R,
}

impl GreetingService<TracingReporter> {
    pub fn new(library_name: impl Into<String>) -> Self {
        Self::with_reporter(library_name, TracingReporter)
    }
}

impl Default for GreetingService<TracingReporter> {
    fn default() -> Self {
        Self::new(DEFAULT_LIBRARY_NAME)
    }
}

impl<R: ErrorReporter> GreetingService<R> {
    pub fn with_reporter(library_name: impl Into<String>, reporter: R) -> Self {
        Self {
            library_name: library_name.into(),
            reporter,
        }
    }

    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Single greeting. The name is used as given, without trimming.
    pub fn greeting(&self, name: &str) -> Result<String> {
        if name.trim().is_empty() {
            return Err(self.fail("greeting", SampleError::BlankName { index: 0 }));
        }
        Ok(format!(
            "Hello, {}! This is {} library.",
            name, self.library_name
        ))
    }

    /// One welcome message per name, in input order. Fails on an empty list
    /// or on the first blank name.
    pub fn greeting_list<S: AsRef<str>>(
        &self,
        names: &[S],
        style: GreetingStyle,
    ) -> Result<Vec<String>> {
        validate_non_empty_list("names", names).map_err(|e| self.fail("greeting_list", e))?;

        let prefix = style.prefix();
        names
            .iter()
            .enumerate()
            .map(|(index, name)| {
                let name = name.as_ref().trim();
                if name.is_empty() {
                    return Err(self.fail("greeting_list", SampleError::BlankName { index }));
                }
                Ok(format!(
                    "{}, {}! Welcome to {} Library.",
                    prefix, name, self.library_name
                ))
            })
            .collect()
    }

    fn fail(&self, operation: &str, error: SampleError) -> SampleError {
        self.reporter.report(operation, &error);
        error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_greeting() {
        let service = GreetingService::default();
        assert_eq!(
            service.greeting("Ada").unwrap(),
            "Hello, Ada! This is Neolution.ReleaseProcessTest library."
        );
    }

    #[test]
    fn test_greeting_rejects_blank_name() {
        let service = GreetingService::default();
        assert!(matches!(
            service.greeting("  "),
            Err(SampleError::BlankName { index: 0 })
        ));
        assert!(service.greeting("").is_err());
    }

    #[test]
    fn test_style_parsing() {
        assert_eq!("Formal".parse::<GreetingStyle>().unwrap(), GreetingStyle::Formal);
        assert_eq!("CASUAL".parse::<GreetingStyle>().unwrap(), GreetingStyle::Casual);
        assert_eq!("pirate".parse::<GreetingStyle>().unwrap(), GreetingStyle::Plain);
        assert_eq!(" formal".parse::<GreetingStyle>().unwrap(), GreetingStyle::Plain);
        assert_eq!(
            GreetingStyle::from("Casual".to_string()),
            GreetingStyle::Casual
        );
        assert_eq!(GreetingStyle::default(), GreetingStyle::Casual);
    }

    #[test]
    fn test_greeting_list_styles() {
        let service = GreetingService::new("Demo");
        let names = ["  Ada ", "Linus"];

        let casual = service.greeting_list(&names, GreetingStyle::Casual).unwrap();
        assert_eq!(
            casual,
            vec![
                "Hey, Ada! Welcome to Demo Library.",
                "Hey, Linus! Welcome to Demo Library."
            ]
        );

        let formal = service.greeting_list(&names, GreetingStyle::Formal).unwrap();
        assert_eq!(formal[0], "Greetings, Ada! Welcome to Demo Library.");

        let plain = service.greeting_list(&names, GreetingStyle::Plain).unwrap();
        assert_eq!(plain[1], "Hello, Linus! Welcome to Demo Library.");
    }

    #[test]
    fn test_greeting_list_errors_are_reported() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let service = GreetingService::with_reporter("Demo", move |op: &str, err: &SampleError| {
            sink.lock().unwrap().push(format!("{}: {}", op, err));
        });

        let empty: [&str; 0] = [];
        assert!(matches!(
            service.greeting_list(&empty, GreetingStyle::Casual),
            Err(SampleError::EmptyInput { .. })
        ));
        assert!(matches!(
            service.greeting_list(&["Ada", " "], GreetingStyle::Casual),
            Err(SampleError::BlankName { index: 1 })
        ));

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].starts_with("greeting_list: "));
    }
}
