use dialoguer::{theme::ColorfulTheme, Input};

use crate::errors::LeaveError;

/// How a confirmation answer is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    Confirm,
    Quit,
    Retry,
}

/// Collects one confirmed value per field. Injectable so tests can script
/// answers instead of blocking on the console.
pub trait Collect {
    fn collect(&mut self, field: &str, default: &str) -> Result<String, LeaveError>;
}

/// Console-backed collector: prompt, echo the candidate value back, and
/// accept only on an explicit confirmation. Loops until confirmed or quit.
pub struct ConsoleCollector {
    theme: ColorfulTheme,
}

impl ConsoleCollector {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for ConsoleCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collect for ConsoleCollector {
    fn collect(&mut self, field: &str, default: &str) -> Result<String, LeaveError> {
        loop {
            let input = Input::<String>::with_theme(&self.theme)
                .with_prompt(format!("Enter {field} (press Enter to use {default})"))
                .allow_empty(true)
                .interact_text()?;
            let value = if input.trim().is_empty() {
                default.to_string()
            } else {
                input
            };

            let answer = Input::<String>::with_theme(&self.theme)
                .with_prompt(format!(
                    "Is {value} correct? y to continue, n to re-enter or q to quit"
                ))
                .allow_empty(true)
                .interact_text()?;
            match interpret_response(&answer) {
                Response::Confirm => return Ok(value),
                Response::Quit => return Err(LeaveError::Aborted),
                Response::Retry => continue,
            }
        }
    }
}

/// Classifies a confirmation answer. `ydw` is Welsh for yes.
pub fn interpret_response(answer: &str) -> Response {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" | "ydw" => Response::Confirm,
        "q" | "quit" => Response::Quit,
        _ => Response::Retry,
    }
}
