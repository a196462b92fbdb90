use bevy::prelude::*;
use log::{error, info, warn};

const MAX_REPORTS: usize = 64;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Warning,
    Error,
}

#[derive(Clone, Debug)]
pub struct Report {
    pub level: ReportLevel,
    pub message: String,
}

/// Rolling log of user-facing notifications backing the messages window.
/// Every entry is mirrored to the structured log.
#[derive(Resource, Default)]
pub struct ReportLog {
    reports: Vec<Report>,
}

impl ReportLog {
    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Info, message.into());
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Warning, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ReportLevel::Error, message.into());
    }

    fn push(&mut self, level: ReportLevel, message: String) {
        match level {
            ReportLevel::Info => info!("{message}"),
            ReportLevel::Warning => warn!("{message}"),
            ReportLevel::Error => error!("{message}"),
        }

        self.reports.push(Report { level, message });
        if self.reports.len() > MAX_REPORTS {
            let excess = self.reports.len() - MAX_REPORTS;
            self.reports.drain(..excess);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Report> {
        self.reports.iter()
    }

    pub fn clear(&mut self) {
        self.reports.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}
