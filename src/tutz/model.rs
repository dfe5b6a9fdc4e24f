use crate::values::{ModuleCode, StudentId, TutorialDate, TutorialId};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// An enrolled student and whether they attended.
///
/// Equality and hashing look at the id only: two `Student` values with the
/// same id are the same student regardless of attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    #[serde(default)]
    pub present: bool,
}

impl Student {
    pub fn new(id: StudentId) -> Self {
        Self { id, present: false }
    }

    pub fn marked(&self) -> Self {
        Self {
            id: self.id.clone(),
            present: true,
        }
    }

    pub fn unmarked(&self) -> Self {
        Self {
            id: self.id.clone(),
            present: false,
        }
    }

    pub fn with_attendance(&self, present: bool) -> Self {
        if present {
            self.marked()
        } else {
            self.unmarked()
        }
    }

    /// Same id and same attendance flag.
    pub fn same_attendance(&self, other: &Student) -> bool {
        self.id == other.id && self.present == other.present
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Student {}

impl Hash for Student {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A tutorial session.
///
/// Tutorials are values: every change builds a new `Tutorial`. Two tutorials
/// are the *same tutorial* when their ids match ([`Tutorial::is_same_tutorial`]);
/// `==` compares every field, including each student's attendance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutorial {
    id: TutorialId,
    module: ModuleCode,
    date: TutorialDate,
    #[serde(default)]
    students: Vec<Student>,
}

impl Tutorial {
    pub fn new(
        id: TutorialId,
        module: ModuleCode,
        date: TutorialDate,
        students: Vec<Student>,
    ) -> Self {
        Self {
            id,
            module,
            date,
            students: dedup_students(students),
        }
    }

    pub fn id(&self) -> &TutorialId {
        &self.id
    }

    pub fn module(&self) -> &ModuleCode {
        &self.module
    }

    pub fn date(&self) -> &TutorialDate {
        &self.date
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn student(&self, id: &StudentId) -> Option<&Student> {
        self.students.iter().find(|s| &s.id == id)
    }

    pub fn has_student(&self, id: &StudentId) -> bool {
        self.student(id).is_some()
    }

    pub fn present_count(&self) -> usize {
        self.students.iter().filter(|s| s.present).count()
    }

    pub fn is_same_tutorial(&self, other: &Tutorial) -> bool {
        self.id == other.id
    }

    pub fn with_id(&self, id: TutorialId) -> Self {
        Self {
            id,
            ..self.clone()
        }
    }

    pub fn with_module(&self, module: ModuleCode) -> Self {
        Self {
            module,
            ..self.clone()
        }
    }

    pub fn with_date(&self, date: TutorialDate) -> Self {
        Self {
            date,
            ..self.clone()
        }
    }

    pub fn with_students(&self, students: Vec<Student>) -> Self {
        Self {
            students: dedup_students(students),
            ..self.clone()
        }
    }

    /// Restores the no-duplicate-student invariant after deserialization.
    pub(crate) fn normalized(self) -> Self {
        let Tutorial {
            id,
            module,
            date,
            students,
        } = self;
        Tutorial::new(id, module, date, students)
    }
}

fn dedup_students(students: Vec<Student>) -> Vec<Student> {
    let mut unique: Vec<Student> = Vec::with_capacity(students.len());
    for student in students {
        if !unique.contains(&student) {
            unique.push(student);
        }
    }
    unique
}

impl PartialEq for Tutorial {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.module == other.module
            && self.date == other.date
            && self.students.len() == other.students.len()
            && self.students.iter().all(|mine| {
                other
                    .students
                    .iter()
                    .any(|theirs| mine.same_attendance(theirs))
            })
    }
}

impl Eq for Tutorial {}

impl std::fmt::Display for Tutorial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.id, self.module, self.date)
    }
}

/// Field overrides for an edit. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TutorialPatch {
    pub id: Option<TutorialId>,
    pub module: Option<ModuleCode>,
    pub date: Option<TutorialDate>,
}

impl TutorialPatch {
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.module.is_none() && self.date.is_none()
    }

    pub fn apply(&self, tutorial: &Tutorial) -> Tutorial {
        Tutorial {
            id: self.id.clone().unwrap_or_else(|| tutorial.id.clone()),
            module: self.module.clone().unwrap_or_else(|| tutorial.module.clone()),
            date: self.date.clone().unwrap_or_else(|| tutorial.date.clone()),
            students: tutorial.students.clone(),
        }
    }
}
