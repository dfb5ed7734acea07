//! Translation key usage rules.
//!
//! Resolves every translation call in the source tree and compares the
//! result with the locale files:
//! - `missing-key`: a used key that some locale lacks
//! - `unused-key`: a primary-locale key nothing uses
//! - `dynamic-key`: a call whose key cannot be resolved statically

use std::collections::{BTreeSet, HashSet};

use anyhow::Result;
use rayon::prelude::*;

use crate::{
    core::{
        AllLocaleMessages, CheckContext, LocaleMessages, SourceFile,
        extract::translation_calls::{FileKeyUsages, scan_translation_calls},
        utils::{Whitelist, pattern_covers},
    },
    issues::{DynamicKeyIssue, MissingKeyIssue, UnusedKeyIssue},
    rules::helpers::{compare_message_contexts, compare_source_contexts},
};

/// Everything the `keys` command reports.
pub struct KeyAnalysis {
    /// Files with at least one translation call, sorted by path.
    pub usages: Vec<FileKeyUsages>,
    pub files_scanned: usize,
    /// Distinct literal keys used in code.
    pub keys_used: usize,
    pub keys_defined: usize,
    pub missing: Vec<MissingKeyIssue>,
    pub unused: Vec<UnusedKeyIssue>,
    pub dynamic: Vec<DynamicKeyIssue>,
}

pub fn analyze_keys(ctx: &CheckContext) -> Result<KeyAnalysis> {
    let (sources, messages) = ctx.load_all()?;
    let usages = scan_key_usages(sources);
    let primary = &messages.primary_messages;
    let used_keys = build_used_keys(&usages, primary);
    let whitelist = Whitelist::new(&ctx.config.whitelist);

    let keys_used = usages
        .iter()
        .flat_map(|file| file.keys.iter().map(|usage| usage.key.as_str()))
        .collect::<HashSet<_>>()
        .len();

    Ok(KeyAnalysis {
        files_scanned: sources.len(),
        keys_used,
        keys_defined: primary.len(),
        missing: check_missing_keys(&usages, &messages.all_messages),
        unused: check_unused_keys(&used_keys, primary, &whitelist),
        dynamic: check_dynamic_keys(&usages),
        usages,
    })
}

/// Unused keys plus the dynamic calls that may still reach them; shared
/// with `clean`.
pub fn check_unused_keys_issues(
    ctx: &CheckContext,
) -> Result<(Vec<UnusedKeyIssue>, Vec<DynamicKeyIssue>)> {
    let (sources, messages) = ctx.load_all()?;
    let usages = scan_key_usages(sources);
    let primary = &messages.primary_messages;
    let used_keys = build_used_keys(&usages, primary);
    let whitelist = Whitelist::new(&ctx.config.whitelist);
    Ok((
        check_unused_keys(&used_keys, primary, &whitelist),
        check_dynamic_keys(&usages),
    ))
}

/// Resolve translation calls in every file, in parallel.
///
/// Files without any call are dropped. Order follows `sources`.
pub fn scan_key_usages(sources: &[SourceFile]) -> Vec<FileKeyUsages> {
    sources
        .par_iter()
        .map(scan_translation_calls)
        .filter(|usages| !usages.is_empty())
        .collect()
}

/// Primary-locale keys covered by the code.
///
/// A used key marks its nested keys as used (`t.raw('steps')`), and a
/// template pattern marks every key it covers.
pub fn build_used_keys(usages: &[FileKeyUsages], primary: &LocaleMessages) -> HashSet<String> {
    let literal: HashSet<&str> = usages
        .iter()
        .flat_map(|file| file.keys.iter().map(|usage| usage.key.as_str()))
        .collect();
    let patterns: BTreeSet<&str> = usages
        .iter()
        .flat_map(|file| file.patterns.iter().map(|usage| usage.key.as_str()))
        .collect();

    primary
        .keys()
        .filter(|key| {
            is_used_literally(key, &literal)
                || patterns.iter().any(|pattern| pattern_covers(pattern, key))
        })
        .cloned()
        .collect()
}

fn is_used_literally(key: &str, literal: &HashSet<&str>) -> bool {
    if literal.contains(key) {
        return true;
    }
    key.match_indices('.')
        .any(|(dot, _)| literal.contains(&key[..dot]))
}

/// Check for used keys absent from at least one locale.
///
/// A key is present in a locale when it is a leaf or the parent of nested
/// keys. Suppressed usages are skipped. One issue per usage.
///
/// # Arguments
/// * `usages` - Resolved translation calls per file
/// * `all_messages` - Messages from every locale
///
/// # Returns
/// Vector of MissingKeyIssue sorted by file, line and column
pub fn check_missing_keys(
    usages: &[FileKeyUsages],
    all_messages: &AllLocaleMessages,
) -> Vec<MissingKeyIssue> {
    let mut issues: Vec<MissingKeyIssue> = usages
        .iter()
        .flat_map(|file| file.keys.iter())
        .filter(|usage| !usage.suppressed)
        .filter_map(|usage| {
            let missing_in: Vec<String> = all_messages
                .values()
                .filter(|messages| !messages.has_key_or_children(&usage.key))
                .map(|messages| messages.locale.clone())
                .collect();
            (!missing_in.is_empty()).then(|| MissingKeyIssue {
                context: usage.context.clone(),
                key: usage.key.clone(),
                missing_in,
            })
        })
        .collect();

    issues.sort_by(|a, b| {
        compare_source_contexts(&a.context, &b.context).then_with(|| a.key.cmp(&b.key))
    });
    issues
}

/// Check for primary-locale keys that nothing uses.
///
/// # Arguments
/// * `used_keys` - Keys covered by code, from `build_used_keys`
/// * `primary_messages` - Messages from the primary locale
/// * `whitelist` - Keys that are never reported
///
/// # Returns
/// Vector of UnusedKeyIssue sorted by file, line and key
pub fn check_unused_keys(
    used_keys: &HashSet<String>,
    primary_messages: &LocaleMessages,
    whitelist: &Whitelist,
) -> Vec<UnusedKeyIssue> {
    let mut issues: Vec<UnusedKeyIssue> = primary_messages
        .entries
        .iter()
        .filter(|(key, _)| !used_keys.contains(*key) && !whitelist.contains(key))
        .map(|(_, entry)| UnusedKeyIssue {
            context: entry.context.clone(),
        })
        .collect();

    issues.sort_by(|a, b| compare_message_contexts(&a.context, &b.context));
    issues
}

pub fn check_dynamic_keys(usages: &[FileKeyUsages]) -> Vec<DynamicKeyIssue> {
    let mut issues: Vec<DynamicKeyIssue> = usages
        .iter()
        .flat_map(|file| file.dynamic.iter())
        .map(|usage| DynamicKeyIssue {
            context: usage.context.clone(),
            expression: usage.expression.clone(),
        })
        .collect();

    issues.sort_by(|a, b| compare_source_contexts(&a.context, &b.context));
    issues
}
