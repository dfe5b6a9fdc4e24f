use super::RosterStorage;
use crate::error::Result;
use crate::model::Tutorial;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    snapshot: Option<Vec<Tutorial>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(tutorials: Vec<Tutorial>) -> Self {
        Self {
            snapshot: Some(tutorials),
            saves: 0,
        }
    }

    /// Number of times `save` has been called.
    pub fn saves(&self) -> usize {
        self.saves
    }

    pub fn snapshot(&self) -> Option<&[Tutorial]> {
        self.snapshot.as_deref()
    }
}

impl RosterStorage for InMemoryStore {
    fn load(&self) -> Result<Option<Vec<Tutorial>>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, tutorials: &[Tutorial]) -> Result<()> {
        self.snapshot = Some(tutorials.to_vec());
        self.saves += 1;
        Ok(())
    }
}
