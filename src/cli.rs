//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; the route table dispatches to domain modules.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_merge_json, format_merge_text, format_render_json, format_render_text,
};
pub use route::RunContext;
