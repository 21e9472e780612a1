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

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AppError {
    #[error("failed to open log file {path}: {reason}")]
    LogFile { path: String, reason: String },
    #[error("invalid tracing filter `{directives}`: {reason}")]
    LogFilter { directives: String, reason: String },
    #[error("failed to initialize tracing subscriber: {reason}")]
    TracingInit { reason: String },
}

impl AppError {
    pub const LOG_FILE_EXIT_CODE: i32 = 20;
    pub const LOG_FILTER_EXIT_CODE: i32 = 21;
    pub const TRACING_INIT_EXIT_CODE: i32 = 22;

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::LogFile { .. } => Self::LOG_FILE_EXIT_CODE,
            Self::LogFilter { .. } => Self::LOG_FILTER_EXIT_CODE,
            Self::TracingInit { .. } => Self::TRACING_INIT_EXIT_CODE,
        }
    }

    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LogFile { path, reason } => {
                format!("Could not open the log file at {path}: {reason}")
            }
            Self::LogFilter { directives, reason } => {
                format!("The tracing filter `{directives}` is invalid: {reason}")
            }
            Self::TracingInit { reason } => {
                format!("Diagnostics could not be initialized: {reason}")
            }
        }
    }
}
