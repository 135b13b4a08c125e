//! In-memory command executor

use super::replies::procedure_reply;
use graphwire::{CommandExecutor, GraphCommand, GraphError, RawReply, Result, SchemaCategory};
use parking_lot::{Mutex, RwLock};
use std::collections::{HashMap, VecDeque};
use std::time::Duration;

/// Answers schema procedures from its name lists and every other command
/// from a queue of scripted replies
pub struct ScriptedExecutor {
    schema: RwLock<HashMap<SchemaCategory, Vec<String>>>,
    replies: Mutex<VecDeque<RawReply>>,
    commands: Mutex<Vec<GraphCommand>>,
    procedure_calls: Mutex<HashMap<SchemaCategory, usize>>,
    procedure_delay: Option<Duration>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self {
            schema: RwLock::new(HashMap::new()),
            replies: Mutex::new(VecDeque::new()),
            commands: Mutex::new(Vec::new()),
            procedure_calls: Mutex::new(HashMap::new()),
            procedure_delay: None,
        }
    }

    pub fn with_names(self, category: SchemaCategory, names: &[&str]) -> Self {
        self.set_names(category, names);
        self
    }

    /// Slow down schema procedures so concurrent misses overlap
    pub fn with_procedure_delay(mut self, delay: Duration) -> Self {
        self.procedure_delay = Some(delay);
        self
    }

    /// Replace the server-side names of a category
    pub fn set_names(&self, category: SchemaCategory, names: &[&str]) {
        self.schema
            .write()
            .insert(category, names.iter().map(|n| n.to_string()).collect());
    }

    /// Queue the reply for the next non-procedure command
    pub fn push_reply(&self, reply: RawReply) {
        self.replies.lock().push_back(reply);
    }

    pub fn procedure_calls(&self, category: SchemaCategory) -> usize {
        self.procedure_calls.lock().get(&category).copied().unwrap_or(0)
    }

    pub fn commands(&self) -> Vec<GraphCommand> {
        self.commands.lock().clone()
    }

    fn schema_category(command: &GraphCommand) -> Option<SchemaCategory> {
        let query = command.query.as_deref()?;
        SchemaCategory::ALL
            .iter()
            .copied()
            .find(|category| query == format!("CALL {}", category.procedure()))
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, command: &GraphCommand) -> Result<RawReply> {
        self.commands.lock().push(command.clone());

        if let Some(category) = Self::schema_category(command) {
            *self.procedure_calls.lock().entry(category).or_insert(0) += 1;
            if let Some(delay) = self.procedure_delay {
                std::thread::sleep(delay);
            }
            let names = self.schema.read().get(&category).cloned().unwrap_or_default();
            return Ok(procedure_reply(&names));
        }

        self.replies
            .lock()
            .pop_front()
            .ok_or_else(|| GraphError::Execution(format!("no scripted reply for {}", command)))
    }
}
