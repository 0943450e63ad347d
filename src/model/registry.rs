//! Student registry keyed by unique name.

use std::collections::HashMap;

use super::types::Student;
use crate::error::BalanceError;

/// All known students, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct StudentRegistry {
    students: HashMap<String, Student>,
}

impl StudentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of students, rejecting duplicates.
    pub fn from_students<I>(students: I) -> Result<Self, BalanceError>
    where
        I: IntoIterator<Item = Student>,
    {
        let mut registry = Self::new();
        for student in students {
            registry.insert(student)?;
        }
        Ok(registry)
    }

    /// Registers a student. A second record under the same name is an
    /// error.
    pub fn insert(&mut self, student: Student) -> Result<(), BalanceError> {
        if self.students.contains_key(&student.name) {
            return Err(BalanceError::DuplicateStudent(student.name));
        }
        self.students.insert(student.name.clone(), student);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Student> {
        self.students.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.students.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Iterates over students in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, Gender, Proficiency};

    fn student(name: &str) -> Student {
        Student::new(name, Choice::One, Gender::A, Proficiency::Proficient)
    }

    #[test]
    fn test_insert_and_get() {
        let mut registry = StudentRegistry::new();
        registry.insert(student("a")).unwrap();
        assert!(registry.contains("a"));
        assert_eq!(registry.get("a").map(|s| s.name.as_str()), Some("a"));
        assert!(registry.get("b").is_none());
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = StudentRegistry::from_students([student("a"), student("a")]);
        assert_eq!(
            result.unwrap_err(),
            BalanceError::DuplicateStudent("a".to_string())
        );
    }
}
