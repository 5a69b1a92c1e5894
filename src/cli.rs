pub mod cli_parser;
pub use cli_parser::Cli;

pub mod commands;
pub use commands::{Commands, FixedArgs, LayoutArgs, OutputFormat};

pub mod help_template;
pub use help_template::HELP_TEMPLATE;

pub mod execute_command;
pub use execute_command::{execute_command, render_layout, render_sweep};
