use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use csv::Writer;
use serde::Serialize;
use tracing::{debug, info};

use super::export_provider::ExportProvider;
use crate::school::roster::Roster;
use crate::school::student::{PhDStudent, SeniorStudent, Student, StudentKind};
use crate::school::visitor::StudentVisitor;

/// One exported row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRecord {
    /// Position of the student in the roster.
    pub position: usize,
    /// Kind the student dispatched as.
    pub kind: StudentKind,
    /// Display name, empty when the student has none.
    pub name: Option<String>,
}

/// Collects a record for every student it visits.
#[derive(Default)]
struct RecordBuilder {
    records: Vec<RosterRecord>,
}

impl RecordBuilder {
    fn push(&mut self, kind: StudentKind, name: Option<&str>) {
        self.records.push(RosterRecord {
            position: self.records.len(),
            kind,
            name: name.map(str::to_owned),
        });
    }
}

impl StudentVisitor for RecordBuilder {
    type Output = ();

    fn visit_student(&mut self, student: &Student) -> Option<()> {
        self.push(StudentKind::Student, student.name());
        Some(())
    }

    fn visit_senior_student(&mut self, student: &SeniorStudent) -> Option<()> {
        self.push(StudentKind::SeniorStudent, student.name());
        Some(())
    }

    fn visit_phd_student(&mut self, student: &PhDStudent) -> Option<()> {
        self.push(StudentKind::PhDStudent, student.name());
        Some(())
    }
}

/// Exports a roster to a CSV file, with a `position,kind,name` header.
///
/// Every export rewrites the file from scratch.
pub struct CsvExport<'a> {
    pub roster: &'a Roster,
    pub path: PathBuf,
}

impl<'a> CsvExport<'a> {
    pub fn new(roster: &'a Roster, path: impl Into<PathBuf>) -> Self {
        Self {
            roster,
            path: path.into(),
        }
    }

    /// Writes the roster to `out` as a complete CSV document and hands the
    /// writer back.
    pub fn write_csv<W: Write>(&self, out: W) -> anyhow::Result<W> {
        let mut builder = RecordBuilder::default();
        self.roster.accept_all(&mut builder);

        let mut writer = Writer::from_writer(out);
        for record in &builder.records {
            writer.serialize(record)?;
        }

        debug!(records = builder.records.len(), "wrote roster records");
        let out = writer.into_inner().map_err(|err| err.into_error())?;
        Ok(out)
    }
}

impl<'a> ExportProvider for CsvExport<'a> {
    type ExportType = anyhow::Result<()>;

    fn export(&self) -> Self::ExportType {
        let file = File::create(&self.path).with_context(|| {
            format!("Failed to create export file {}", self.path.display())
        })?;
        let mut file = self.write_csv(file)?;
        file.flush()?;

        info!(path = %self.path.display(), "exported roster as csv");
        Ok(())
    }
}
