//! Rule implementations for i18nkit.
//!
//! Pure functions that turn scanner output and loaded messages into issues.
//! Each function takes only the inputs it needs; the `check_*_issues`
//! wrappers pull those inputs from a `CheckContext`.
//!
//! - `helpers`: sorting and test fixtures shared by rules
//! - `hardcoded`: hardcoded text and medical-content compliance
//! - `urls`: hardcoded site URLs
//! - `keys`: missing, unused, and dynamic translation keys
//! - `validate`: locale consistency, values, and key naming
//! - `images`: alt-text audit and alt generation
//! - `seo`: article frontmatter and structure scoring
//! - `monitor`: observed metrics against the monitoring config

pub mod hardcoded;
pub mod helpers;
pub mod images;
pub mod keys;
pub mod monitor;
pub mod seo;
pub mod urls;
pub mod validate;
