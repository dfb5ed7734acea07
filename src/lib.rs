//! i18nkit - i18n, image and SEO audits for Next.js content sites
//!
//! i18nkit is a CLI tool and library for checking bilingual (next-intl style)
//! Next.js projects. It finds hardcoded text and URLs, checks translation keys
//! against the locale files, audits image alt text and article SEO, and
//! generates printable resources and a monitoring baseline.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands, file edits, console output)
//! - `config`: Configuration file loading and parsing
//! - `core`: File discovery, parsing and extraction
//! - `issues`: Issue type definitions
//! - `reports`: JSON and Markdown report files
//! - `rules`: Detection rules turning extracted data into issues
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod reports;
pub mod rules;
pub mod utils;
