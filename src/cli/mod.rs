use anyhow::Result;

pub mod args;
pub mod commands;
mod comments_file;
mod exit_status;
mod logging;
pub mod report;

pub use args::{Arguments, CheckArgs, Command};
pub use comments_file::CommentsFile;
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    logging::init(args.verbose());

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Check(cmd)) => commands::check::check(&cmd),
        Some(Command::Init) => commands::init::init(),
        None => Ok(ExitStatus::Success),
    }
}
