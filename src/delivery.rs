use std::sync::{Arc, Mutex, MutexGuard};

use anyhow::Result;
use log::info;

use crate::models::Statement;

/// Hands a finished statement to a record store. Fire-and-forget from the
/// tracker's point of view: a returned error is logged and nothing else.
pub trait StatementSender: Send + Sync {
    fn send_statement(&self, statement: &Statement) -> Result<()>;
}

/// Keeps every delivered statement in memory, in delivery order.
#[derive(Debug, Clone, Default)]
pub struct StatementLog {
    statements: Arc<Mutex<Vec<Statement>>>,
}

impl StatementLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Statement>> {
        match self.statements.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    pub fn statements(&self) -> Vec<Statement> {
        self.guard().clone()
    }

    /// `en-US` verb labels in delivery order.
    pub fn verb_labels(&self) -> Vec<String> {
        self.guard()
            .iter()
            .filter_map(|statement| statement.verb_label("en-US").map(str::to_string))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.guard().len()
    }

    pub fn is_empty(&self) -> bool {
        self.guard().is_empty()
    }
}

impl StatementSender for StatementLog {
    fn send_statement(&self, statement: &Statement) -> Result<()> {
        self.guard().push(statement.clone());
        Ok(())
    }
}

/// Writes each statement to the `log` facade as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

impl StatementSender for LogSender {
    fn send_statement(&self, statement: &Statement) -> Result<()> {
        let payload = serde_json::to_string(statement)?;
        info!("statement {}: {}", statement.id, payload);
        Ok(())
    }
}
