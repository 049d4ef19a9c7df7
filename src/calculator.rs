//! Session calculator: wraps the evaluation facade and keeps an
//! append-only history of every attempt, successful or not.

use crate::number::Number;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub expression: String,
    pub outcome: Result<Number, String>,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Ok(value) => write!(f, "{} = {}", self.expression, value),
            Err(message) => write!(f, "{} = {}", self.expression, message),
        }
    }
}

#[derive(Debug, Default)]
pub struct Calculator {
    history: Vec<HistoryEntry>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates an expression and records it in the history.
    pub fn evaluate(&mut self, expression: &str) -> Result<Number, String> {
        let outcome = crate::evaluate(expression);
        self.history.push(HistoryEntry {
            expression: expression.to_string(),
            outcome: outcome.clone(),
        });
        outcome
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }
}
