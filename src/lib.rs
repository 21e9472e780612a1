// uchat-tui — a keyboard-avoiding chat screen for the terminal
// Copyright (C) 2026  uchat-tui contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

pub mod anchor;
pub mod app;
pub mod error;
pub mod ui;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "uchat", about = "A keyboard-avoiding chat screen for the terminal")]
pub struct Cli {
    /// Write diagnostics to this file (tracing is disabled without it)
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,

    /// Tracing filter directives (falls back to RUST_LOG, then `info`)
    #[arg(long)]
    pub log_filter: Option<String>,

    /// Append to the log file instead of truncating it
    #[arg(long)]
    pub log_append: bool,

    /// Start with the header bar hidden
    #[arg(long)]
    pub no_header: bool,

    /// Height of the shortcuts panel, in rows
    #[arg(long, default_value_t = 8)]
    pub panel_rows: u16,
}
