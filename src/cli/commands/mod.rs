pub mod clean;
mod command_result;
pub mod fix_alt;
pub mod hardcode;
pub mod helper;
pub mod images;
pub mod init;
pub mod keys;
pub mod monitor;
pub mod pdf;
pub mod seo;
pub mod urls;
pub mod validate;

pub use command_result::*;
