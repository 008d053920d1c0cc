//! 交互式命令行支持

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_menu_command, menu_text, parse_command, CommandResult, MenuCommand};
pub use completer::MenuHelper;
pub use printer::{PrintMode, Printer};
