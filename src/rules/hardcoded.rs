//! Hardcoded text and medical-content compliance rules.
//!
//! Detection happens per file in `core::extract`; these wrappers run it over
//! the source tree in parallel and keep the output in file order.

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    core::{
        CheckContext,
        extract::{
            compliance::{check_disclaimer, scan_compliance},
            hardcode::scan_hardcoded_text,
        },
    },
    issues::{ComplianceIssue, HardcodedTextIssue, Issue},
};

pub fn check_hardcoded_issues(ctx: &CheckContext) -> Vec<HardcodedTextIssue> {
    ctx.sources()
        .par_iter()
        .flat_map_iter(|file| scan_hardcoded_text(file, &ctx.ignore_texts))
        .collect()
}

/// Compliance findings in the source tree plus the disclaimer check.
///
/// The disclaimer needs the primary-locale messages, so a missing messages
/// directory is an error here.
pub fn check_compliance_issues(ctx: &CheckContext) -> Result<Vec<Issue>> {
    let messages = ctx.messages()?;
    let mut issues: Vec<Issue> = check_compliance(ctx)
        .into_iter()
        .map(Issue::from)
        .collect();
    if let Some(issue) = check_disclaimer(&messages.primary_messages) {
        issues.push(issue.into());
    }
    Ok(issues)
}

fn check_compliance(ctx: &CheckContext) -> Vec<ComplianceIssue> {
    ctx.sources()
        .par_iter()
        .flat_map_iter(scan_compliance)
        .collect()
}
