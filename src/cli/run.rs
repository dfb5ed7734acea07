//! Dispatches a parsed command line to its command handler.
//!
//! Returns `Err` only when a command cannot run at all (unreadable config,
//! missing messages directory, invalid input file). Findings are reported
//! through the returned `CommandResult`.
use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command, MonitorAction},
    commands::{
        CommandResult, clean::clean, fix_alt::fix_alt, hardcode::hardcode, images::images,
        init::init, keys::keys, monitor, pdf::pdf, seo::seo, urls::urls, validate::validate,
    },
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Hardcode(cmd)) => hardcode(cmd),
        Some(Command::Urls(cmd)) => urls(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Validate(cmd)) => validate(cmd),
        Some(Command::Clean(cmd)) => clean(cmd),
        Some(Command::Images(cmd)) => images(cmd),
        Some(Command::FixAlt(cmd)) => fix_alt(cmd),
        Some(Command::Seo(cmd)) => seo(cmd),
        Some(Command::Pdf(cmd)) => pdf(cmd),
        Some(Command::Monitor(cmd)) => match cmd.action {
            MonitorAction::Init(init) => monitor::monitor_init(init),
            MonitorAction::Check(check) => monitor::monitor_check(check),
        },
        None => bail!("No command provided. Use --help to see available commands."),
    }
}
