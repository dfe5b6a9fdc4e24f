//! The identity-constrained tutorial collection.
//!
//! A [`Roster`] keeps tutorials in insertion order and never holds two
//! tutorials that are the *same tutorial* (equal ids). Lookups that decide
//! membership use identity; `remove` and the target of `set_tutorial` use full
//! value equality, so a caller can only remove or replace the exact tutorial
//! it read.

use crate::error::{Result, TutzError};
use crate::model::Tutorial;
use crate::values::TutorialId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    tutorials: Vec<Tutorial>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from a snapshot, rejecting duplicate identities.
    pub fn from_tutorials(tutorials: Vec<Tutorial>) -> Result<Self> {
        let mut roster = Self::new();
        roster.replace_all(tutorials)?;
        Ok(roster)
    }

    pub fn tutorials(&self) -> &[Tutorial] {
        &self.tutorials
    }

    pub fn len(&self) -> usize {
        self.tutorials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tutorials.is_empty()
    }

    pub fn get(&self, id: &TutorialId) -> Option<&Tutorial> {
        self.tutorials.iter().find(|t| t.id() == id)
    }

    /// True if a tutorial with the same identity is stored.
    pub fn contains(&self, tutorial: &Tutorial) -> bool {
        self.tutorials.iter().any(|t| t.is_same_tutorial(tutorial))
    }

    pub fn add(&mut self, tutorial: Tutorial) -> Result<()> {
        if self.contains(&tutorial) {
            return Err(TutzError::DuplicateTutorial(tutorial.id().to_string()));
        }
        self.tutorials.push(tutorial);
        Ok(())
    }

    pub fn remove(&mut self, tutorial: &Tutorial) -> Result<()> {
        let pos = self.position(tutorial)?;
        self.tutorials.remove(pos);
        Ok(())
    }

    /// Replaces `target` with `replacement` at the same position.
    ///
    /// The replacement may keep the target's identity; it may not take the
    /// identity of any other stored tutorial.
    pub fn set_tutorial(&mut self, target: &Tutorial, replacement: Tutorial) -> Result<()> {
        let pos = self.position(target)?;
        let clashes = self
            .tutorials
            .iter()
            .enumerate()
            .any(|(i, t)| i != pos && t.is_same_tutorial(&replacement));
        if clashes {
            return Err(TutzError::DuplicateTutorial(replacement.id().to_string()));
        }
        self.tutorials[pos] = replacement;
        Ok(())
    }

    /// Swaps in a whole new contents, or nothing at all.
    pub fn replace_all(&mut self, tutorials: Vec<Tutorial>) -> Result<()> {
        for (i, tutorial) in tutorials.iter().enumerate() {
            if tutorials[..i].iter().any(|t| t.is_same_tutorial(tutorial)) {
                return Err(TutzError::DuplicateTutorial(tutorial.id().to_string()));
            }
        }
        self.tutorials = tutorials;
        Ok(())
    }

    fn position(&self, tutorial: &Tutorial) -> Result<usize> {
        self.tutorials
            .iter()
            .position(|t| t == tutorial)
            .ok_or_else(|| TutzError::TutorialNotFound(tutorial.id().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::model::fixtures::tutorial;

    fn c101() -> Tutorial {
        tutorial("C101", "CS2103T", "2025-01-10", &[])
    }

    fn c102() -> Tutorial {
        tutorial("C102", "CS2101", "2025-01-11", &["A0000001X"])
    }

    #[test]
    fn add_rejects_same_identity_regardless_of_other_fields() {
        let mut roster = Roster::new();
        roster.add(c101()).unwrap();

        let clash = tutorial("C101", "MA1521", "2025-05-05", &["A0000002Y"]);
        let err = roster.add(clash).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateIdentity);
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(c102()).unwrap();
        roster.add(c101()).unwrap();
        let ids: Vec<_> = roster.tutorials().iter().map(|t| t.id().as_str()).collect();
        assert_eq!(ids, ["C102", "C101"]);
    }

    #[test]
    fn remove_requires_full_equality() {
        let mut roster = Roster::from_tutorials(vec![c101()]).unwrap();
        let lookalike = c101().with_module("MA1521".parse().unwrap());
        assert_eq!(
            roster.remove(&lookalike).unwrap_err().kind(),
            ErrorKind::NotFound
        );
        roster.remove(&c101()).unwrap();
        assert!(roster.is_empty());
    }

    #[test]
    fn set_tutorial_keeps_position() {
        let mut roster = Roster::from_tutorials(vec![c101(), c102()]).unwrap();
        let renamed = c101().with_id("C100".parse().unwrap());
        roster.set_tutorial(&c101(), renamed.clone()).unwrap();
        assert_eq!(roster.tutorials()[0], renamed);
        assert_eq!(roster.tutorials()[1], c102());
    }

    #[test]
    fn set_tutorial_allows_own_identity() {
        let mut roster = Roster::from_tutorials(vec![c101(), c102()]).unwrap();
        let redated = c101().with_date("2025-02-02".parse().unwrap());
        roster.set_tutorial(&c101(), redated.clone()).unwrap();
        assert_eq!(roster.get(c101().id()), Some(&redated));
    }

    #[test]
    fn set_tutorial_rejects_other_identity() {
        let mut roster = Roster::from_tutorials(vec![c101(), c102()]).unwrap();
        let clash = c101().with_id("C102".parse().unwrap());
        let err = roster.set_tutorial(&c101(), clash).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateIdentity);
        assert_eq!(roster.tutorials(), &[c101(), c102()]);
    }

    #[test]
    fn set_tutorial_missing_target() {
        let mut roster = Roster::from_tutorials(vec![c101()]).unwrap();
        let err = roster.set_tutorial(&c102(), c102()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn replace_all_is_atomic() {
        let mut roster = Roster::from_tutorials(vec![c101()]).unwrap();
        let err = roster
            .replace_all(vec![c102(), c102().with_module("MA1521".parse().unwrap())])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DuplicateIdentity);
        assert_eq!(roster.tutorials(), &[c101()]);

        roster.replace_all(vec![c102()]).unwrap();
        assert_eq!(roster.tutorials(), &[c102()]);
    }
}
