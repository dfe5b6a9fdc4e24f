//! Predicates over tutorials, used to drive the filtered view.
//!
//! Predicates are plain data so they can be compared, logged and rebuilt by
//! the parser. Keyword predicates match case-insensitively by substring; any
//! keyword hitting the field is a match. [`TutorialPredicate::IdEquals`] is an
//! exact, case-sensitive lookup.

use crate::model::Tutorial;
use crate::values::TutorialId;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TutorialPredicate {
    #[default]
    All,
    ModuleCodeContains(Vec<String>),
    TutorialIdContains(Vec<String>),
    IdEquals(TutorialId),
    /// Every component must hold; an empty list matches everything.
    And(Vec<TutorialPredicate>),
}

impl TutorialPredicate {
    pub fn test(&self, tutorial: &Tutorial) -> bool {
        match self {
            TutorialPredicate::All => true,
            TutorialPredicate::ModuleCodeContains(keywords) => {
                contains_any(tutorial.module().as_str(), keywords)
            }
            TutorialPredicate::TutorialIdContains(keywords) => {
                contains_any(tutorial.id().as_str(), keywords)
            }
            TutorialPredicate::IdEquals(id) => tutorial.id() == id,
            TutorialPredicate::And(parts) => parts.iter().all(|p| p.test(tutorial)),
        }
    }
}

impl std::fmt::Display for TutorialPredicate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TutorialPredicate::All => write!(f, "all"),
            TutorialPredicate::ModuleCodeContains(k) => write!(f, "module~[{}]", k.join(", ")),
            TutorialPredicate::TutorialIdContains(k) => write!(f, "id~[{}]", k.join(", ")),
            TutorialPredicate::IdEquals(id) => write!(f, "id={}", id),
            TutorialPredicate::And(parts) => {
                let parts: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
                write!(f, "({})", parts.join(" and "))
            }
        }
    }
}

fn contains_any(field: &str, keywords: &[String]) -> bool {
    let field_lower = field.to_lowercase();
    keywords
        .iter()
        .any(|k| field_lower.contains(&k.to_lowercase()))
}
