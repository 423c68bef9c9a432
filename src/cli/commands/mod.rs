pub mod command_result;
pub mod export;
pub mod init;

pub use command_result::{CommandResult, CommandSummary, InitSummary};
