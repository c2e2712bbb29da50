// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while loading or interpreting file assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The configuration file could not be read.
    ConfigUnreadable {
        /// The path that was read.
        path: String,
        /// The underlying I/O error message.
        error: String,
    },
    /// The configuration document is not valid for the assertion schema.
    ConfigMalformed {
        /// The parser error message.
        error: String,
    },
    /// A file assertion has an empty path.
    EmptyPath {
        /// The application owning the assertion.
        application: String,
    },
    /// A file assertion declares a mode `stat` can never report.
    InvalidMode {
        /// The application owning the assertion.
        application: String,
        /// The path being asserted.
        path: String,
        /// The declared mode.
        mode: String,
    },
    /// Two assertions produce the same generated test name.
    DuplicateTestName(String),
    /// Remote `stat` output was not exactly three tokens.
    MalformedStatOutput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigUnreadable { path, error } => {
                write!(f, "Failed to read file assertions from '{path}': {error}")
            }
            Self::ConfigMalformed { error } => {
                write!(f, "Malformed file assertion configuration: {error}")
            }
            Self::EmptyPath { application } => {
                write!(f, "File assertion for application '{application}' has an empty path")
            }
            Self::InvalidMode {
                application,
                path,
                mode,
            } => {
                write!(
                    f,
                    "Invalid mode '{mode}' for {path} in application '{application}': \
                     expected octal digits without a leading zero"
                )
            }
            Self::DuplicateTestName(name) => {
                write!(f, "Duplicate generated test name: {name}")
            }
            Self::MalformedStatOutput(output) => {
                write!(
                    f,
                    "Expected 'owner group mode' from stat, got '{}'",
                    output.trim()
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
