//! CLI domain: parse, route, output, and presentation only.
//! Read-only inspection of a frame store directory.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_frame_json, format_frame_list, format_frame_text, format_members, format_path,
};
pub use route::RunContext;
