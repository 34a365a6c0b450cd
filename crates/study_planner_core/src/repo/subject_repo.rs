//! Subject repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Hold the ordered subject collection for one planner instance.
//!
//! # Invariants
//! - Callers hand over already validated subjects.
//! - Nothing here survives process exit.

use crate::model::ids::SubjectId;
use crate::model::subject::Subject;

/// Append-only subject storage.
pub trait SubjectRepository {
    fn append_subject(&mut self, subject: Subject);
    fn list_subjects(&self) -> &[Subject];
    fn get_subject(&self, id: SubjectId) -> Option<&Subject>;

    fn subject_count(&self) -> usize {
        self.list_subjects().len()
    }
}

/// `Vec`-backed subject repository.
#[derive(Debug, Clone, Default)]
pub struct InMemorySubjectRepository {
    subjects: Vec<Subject>,
}

impl InMemorySubjectRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubjectRepository for InMemorySubjectRepository {
    fn append_subject(&mut self, subject: Subject) {
        self.subjects.push(subject);
    }

    fn list_subjects(&self) -> &[Subject] {
        &self.subjects
    }

    fn get_subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|subject| subject.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemorySubjectRepository, SubjectRepository};
    use crate::model::ids::SubjectId;
    use crate::model::subject::Subject;

    #[test]
    fn append_preserves_insertion_order_and_lookup() {
        let mut repo = InMemorySubjectRepository::new();
        let first = Subject::try_new("Biology", "Cells", 20, Vec::new()).unwrap();
        let second = Subject::try_new("Algebra", "Rings", 40, Vec::new()).unwrap();
        repo.append_subject(first.clone());
        repo.append_subject(second.clone());

        let names: Vec<_> = repo
            .list_subjects()
            .iter()
            .map(|subject| subject.name.as_str())
            .collect();
        assert_eq!(names, vec!["Biology", "Algebra"]);
        assert_eq!(repo.subject_count(), 2);
        assert_eq!(repo.get_subject(second.id), Some(&second));
        assert_eq!(repo.get_subject(SubjectId::new()), None);
    }
}
