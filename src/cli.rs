//! CLI domain: parse, route, and output only.
//! No domain orchestration; the route table dispatches to the library.

mod output;
mod parse;
mod route;

pub use output::{format_scan_text, format_similarity_json, format_similarity_table, map_error};
pub use parse::{Cli, Commands};
pub use route::RunContext;
