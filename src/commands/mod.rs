// Command implementations behind the CLI subcommands

pub mod name;
pub mod plugin;
pub mod server;
