//! DeleteKey action, used by `i18nkit clean`.

use super::{operation::Operation, traits::Action};
use crate::issues::{OrphanKeyIssue, UnusedKeyIssue};

/// Deletes translation keys from locale files.
///
/// - `UnusedKeyIssue`: primary-locale keys nothing in the code uses
/// - `OrphanKeyIssue`: keys of other locales missing from the primary one
pub struct DeleteKey;

impl Action<UnusedKeyIssue> for DeleteKey {
    fn to_operations(issues: &[UnusedKeyIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::DeleteJsonKey {
                context: issue.context.clone(),
            })
            .collect()
    }
}

impl Action<OrphanKeyIssue> for DeleteKey {
    fn to_operations(issues: &[OrphanKeyIssue]) -> Vec<Operation> {
        issues
            .iter()
            .map(|issue| Operation::DeleteJsonKey {
                context: issue.context.clone(),
            })
            .collect()
    }
}
