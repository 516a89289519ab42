use crate::severity::Severity;
use crate::violation::Violation;
use log::trace;
use std::collections::{BTreeMap, BTreeSet};

/// The distinct violations reported against one file.
#[derive(Debug, Default)]
pub struct FileReport {
    violations: BTreeSet<Violation>,
}

impl FileReport {
    /// Violations ordered by line, then column, then message.
    pub fn violations(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    fn insert(&mut self, violation: Violation) -> bool {
        // BTreeSet::insert leaves an equal element already in the set untouched
        self.violations.insert(violation)
    }
}

/// All violations read so far, grouped by file name.
#[derive(Debug, Default)]
pub struct ReportSet {
    files: BTreeMap<String, FileReport>,
}

impl ReportSet {
    pub fn new() -> ReportSet {
        ReportSet::default()
    }

    /// Adds a violation unless its severity is suppressed or the file already
    /// holds one with the same line, column and message.
    pub fn record(
        &mut self,
        filename: &str,
        line: i64,
        column: i64,
        severity: Severity,
        message: &str,
    ) {
        let code = match severity.code() {
            Some(code) => code,
            None => return,
        };

        let file = self.files.entry(filename.to_string()).or_default();
        let inserted = file.insert(Violation {
            line,
            column,
            code,
            message: message.to_string(),
        });
        if inserted {
            trace!("{}:{}:{}: recorded", filename, line, column);
        } else {
            trace!("{}:{}:{}: duplicate dropped", filename, line, column);
        }
    }

    /// Files in lexicographic order of their names.
    pub fn files(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.files.iter().map(|(name, file)| (name.as_str(), file))
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total number of retained violations across all files.
    pub fn len(&self) -> usize {
        self.files.values().map(FileReport::len).sum()
    }
}
