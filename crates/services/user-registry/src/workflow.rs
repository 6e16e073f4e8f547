//! Demo workflow run by the binary.
//!
//! Looks up each demo id, then lists every user. All steps complete before
//! anything is written, so a failed run produces no partial output.

use serde::Serialize;
use std::io::Write;

use common::{AppError, AppResult};
use domain::DEMO_LOOKUP_IDS;

use crate::service::ServiceContainer;

/// Lines produced by a completed demo run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoReport {
    lines: Vec<String>,
}

impl DemoReport {
    fn push<T: Serialize>(&mut self, label: &str, value: &T) -> AppResult<()> {
        let json = serde_json::to_string(value)
            .map_err(|e| AppError::internal(format!("Failed to render {}: {}", label, e)))?;
        self.lines.push(format!("{}: {}", label, json));
        Ok(())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Write every line to `out`
    pub fn write_to<W: Write>(&self, out: &mut W) -> AppResult<()> {
        for line in &self.lines {
            writeln!(out, "{}", line)
                .map_err(|e| AppError::internal(format!("Failed to write output: {}", e)))?;
        }
        out.flush()
            .map_err(|e| AppError::internal(format!("Failed to flush output: {}", e)))
    }
}

/// Run the demo against whatever implementation the container has bound.
///
/// The first failing step aborts the run.
pub async fn run_demo<C>(services: &C) -> AppResult<DemoReport>
where
    C: ServiceContainer + ?Sized,
{
    let users = services.users();
    let mut report = DemoReport::default();

    for id in DEMO_LOOKUP_IDS {
        let user = users.get_user(id).await?;
        tracing::debug!(%user, "Found user");
        report.push(&format!("user {}", id), &user)?;
    }

    let all = users.list_users().await?;
    tracing::debug!(count = all.len(), "Listed users");
    report.push("all users", &all)?;

    Ok(report)
}
