//! File edits behind `--apply`.
//!
//! ```text
//! Issue / AltFix (what was found)
//!     ↓
//! Action (conversion to operations)
//!     ↓
//! Operation (one edit in one file)
//!     ↓
//! execute (backup, then rewrite the file)
//! ```
//!
//! - [`DeleteKey`]: delete unused or orphan keys from locale files (clean)
//! - [`InsertAlt`]: write generated alt attributes into image tags (fix-alt)

mod backup;
mod delete_key;
mod insert_alt;
mod json_editor;
mod operation;
mod traits;

pub use delete_key::DeleteKey;
pub use insert_alt::InsertAlt;
pub use traits::{Action, ActionStats};
