//! Core data types shared by every scanner and rule.
//!
//! - `message`: locale file types (LocaleMessages, MessageEntry, ValueType)
//! - `source`: source code positions (SourceContext, SourceLocation)

pub mod message;
pub mod source;

pub use message::{
    AllLocaleMessages, LocaleMessages, LocaleTypeMismatch, MessageContext, MessageEntry,
    MessageLocation, ValueType,
};
pub use source::{SourceContext, SourceLocation};
