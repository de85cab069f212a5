use std::collections::BTreeMap;

use super::student_visitor::StudentVisitor;
use crate::school::student::{PhDStudent, SeniorStudent, Student, StudentKind};

/// A visitor that counts how many students of each kind it has seen.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Census {
    counts: BTreeMap<StudentKind, usize>,
}

impl Census {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, kind: StudentKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Per-kind counts, in kind order. Kinds never visited are omitted.
    pub fn iter(&self) -> impl Iterator<Item = (StudentKind, usize)> + '_ {
        self.counts.iter().map(|(kind, count)| (*kind, *count))
    }

    fn record(&mut self, kind: StudentKind) -> usize {
        let count = self.counts.entry(kind).or_insert(0);
        *count += 1;
        *count
    }
}

// Each operation yields the running count for the visited kind.
impl StudentVisitor for Census {
    type Output = usize;

    fn visit_student(&mut self, _student: &Student) -> Option<usize> {
        Some(self.record(StudentKind::Student))
    }

    fn visit_senior_student(&mut self, _student: &SeniorStudent) -> Option<usize> {
        Some(self.record(StudentKind::SeniorStudent))
    }

    fn visit_phd_student(&mut self, _student: &PhDStudent) -> Option<usize> {
        Some(self.record(StudentKind::PhDStudent))
    }
}
