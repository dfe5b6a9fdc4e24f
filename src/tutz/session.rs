//! The roster together with its filtered view.
//!
//! A [`Session`] is the state commands run against. It owns the [`Roster`]
//! and the active [`TutorialPredicate`], and keeps the filtered sequence
//! up to date: every successful mutation and every predicate change
//! recomputes it before returning, so readers never observe a stale view.
//! There is no subscription mechanism; consumers simply read
//! [`Session::filtered`] after a command returns.

use crate::error::Result;
use crate::model::Tutorial;
use crate::predicate::TutorialPredicate;
use crate::roster::Roster;
use crate::values::TutorialId;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct Session {
    roster: Roster,
    predicate: TutorialPredicate,
    filtered: Vec<Tutorial>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_roster(roster: Roster) -> Self {
        let mut session = Self {
            roster,
            ..Self::default()
        };
        session.refresh();
        session
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Tutorials currently shown, in roster order.
    pub fn filtered(&self) -> &[Tutorial] {
        &self.filtered
    }

    pub fn predicate(&self) -> &TutorialPredicate {
        &self.predicate
    }

    pub fn tutorial(&self, id: &TutorialId) -> Option<&Tutorial> {
        self.roster.get(id)
    }

    pub fn add_tutorial(&mut self, tutorial: Tutorial) -> Result<()> {
        self.roster.add(tutorial)?;
        self.refresh();
        Ok(())
    }

    pub fn delete_tutorial(&mut self, tutorial: &Tutorial) -> Result<()> {
        self.roster.remove(tutorial)?;
        self.refresh();
        Ok(())
    }

    pub fn set_tutorial(&mut self, target: &Tutorial, replacement: Tutorial) -> Result<()> {
        self.roster.set_tutorial(target, replacement)?;
        self.refresh();
        Ok(())
    }

    pub fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.refresh();
    }

    pub fn set_predicate(&mut self, predicate: TutorialPredicate) {
        self.predicate = predicate;
        self.refresh();
    }

    pub fn show_all(&mut self) {
        self.set_predicate(TutorialPredicate::All);
    }

    fn refresh(&mut self) {
        self.filtered = self
            .roster
            .tutorials()
            .iter()
            .filter(|t| self.predicate.test(t))
            .cloned()
            .collect();
        debug!(
            predicate = %self.predicate,
            shown = self.filtered.len(),
            total = self.roster.len(),
            "filtered view recomputed"
        );
    }
}
