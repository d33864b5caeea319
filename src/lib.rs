// git-rules - Commit message rules for Git repositories.
// Copyright (C) 2025 Jean-Philippe Cugnet <jean-philippe@cugnet.eu>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, version 3 of the License.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Commit message rules for Git repositories.
//!
//! git-rules manages a per-repository rule set for commit messages. The
//! rule set is described by a `git-rules.toml` file at the root of the
//! repository, which extends built-in presets and overrides them with
//! local rules. Tools can then read the resolved rule set to check or
//! help write commit messages.

pub mod config;
pub mod helpers;
pub mod preset;
pub mod rules;
pub mod tracing;

mod command;

pub use self::command::GitRules;
