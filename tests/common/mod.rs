use leaveform::cli::collector::Collect;
use leaveform::errors::LeaveError;

/// Replaces the console collector in tests. Answers are handed out in
/// order; an empty answer takes the offered default, running out of
/// answers behaves like the quit token.
pub struct ScriptedCollector {
    answers: Vec<String>,
    pub prompts: Vec<String>,
}

impl ScriptedCollector {
    pub fn new(answers: &[&str]) -> Self {
        let mut answers: Vec<String> = answers.iter().map(|s| s.to_string()).collect();
        answers.reverse();
        Self {
            answers,
            prompts: Vec::new(),
        }
    }
}

impl Collect for ScriptedCollector {
    fn collect(&mut self, field: &str, default: &str) -> Result<String, LeaveError> {
        self.prompts.push(field.to_string());
        match self.answers.pop() {
            Some(answer) if answer.is_empty() => Ok(default.to_string()),
            Some(answer) => Ok(answer),
            None => Err(LeaveError::Aborted),
        }
    }
}
