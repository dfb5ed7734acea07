//! InsertAlt action, used by `i18nkit fix-alt --apply`.

use super::{operation::Operation, traits::Action};
use crate::rules::images::{AltEdit, AltFix};

/// Writes generated alt text into image tags.
pub struct InsertAlt;

impl Action<AltFix> for InsertAlt {
    fn to_operations(fixes: &[AltFix]) -> Vec<Operation> {
        fixes
            .iter()
            .map(|fix| Operation::InsertAlt { fix: fix.clone() })
            .collect()
    }
}

/// Apply the fixes of one file to its content.
///
/// Edits are applied from the end of the file so earlier offsets stay valid.
/// An edit whose offsets no longer fit the content, or whose empty alt has
/// since been filled in, is skipped. Returns the new content and the number
/// of edits applied.
pub(crate) fn apply_alt_fixes(content: &str, fixes: &[&AltFix]) -> (String, usize) {
    let mut edits: Vec<(usize, usize, &AltFix)> = fixes
        .iter()
        .map(|fix| match &fix.edit {
            AltEdit::Insert { at } => (*at, *at, *fix),
            AltEdit::Replace { range } => (range.start, range.end, *fix),
        })
        .collect();
    edits.sort_by(|a, b| b.0.cmp(&a.0).then(b.1.cmp(&a.1)));

    let mut out = content.to_string();
    let mut applied = 0;
    let mut limit = content.len();
    for (start, end, fix) in edits {
        if end > limit
            || !content.is_char_boundary(start)
            || !content.is_char_boundary(end)
        {
            continue;
        }
        match &fix.edit {
            AltEdit::Insert { .. } => {
                out.insert_str(start, &format!(" alt=\"{}\"", fix.alt));
            }
            AltEdit::Replace { .. } => {
                let still_empty = content[start..end].trim().is_empty()
                    && content[end..].starts_with(['"', '\'', '`']);
                if !still_empty {
                    continue;
                }
                let alt = if content[..start].ends_with('\'') {
                    fix.alt.replace('\'', "\u{2019}")
                } else {
                    fix.alt.clone()
                };
                out.replace_range(start..end, &alt);
            }
        }
        limit = start;
        applied += 1;
    }
    (out, applied)
}
