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

//! Configuration for git-rules.

use std::{fs, io, path::PathBuf, process::Command};

use indexmap::indexmap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    preset,
    rules::{Condition, Rule, RuleOptions, Rules, Severity},
    tracing::LogResult as _,
};

/// An error that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The configuration file path cannot be built.
    #[error("Failed to get the configuration file path")]
    ConfigFileError(#[from] ConfigFileError),
    /// The configuration file cannot be read.
    #[error("Failed to read {CONFIG_FILE_NAME}")]
    ReadError(#[from] io::Error),
    /// The configuration file cannot be parsed.
    #[error("Invalid configuration in {CONFIG_FILE_NAME}")]
    InvalidConfig(#[from] toml::de::Error),
}

/// An error that can occur when resolving the rule set.
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The configuration extends a preset that does not exist.
    #[error("Unknown preset {0}")]
    UnknownPreset(String),
}

/// An error that can occur when building the config file path.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// The Git repo root cannot be resolved.
    #[error("Failed to get the Git repo root")]
    RepoRootError(#[from] RepoRootError),
}

/// An error that can occur when getting the Git repo root.
#[derive(Debug, Error)]
pub enum RepoRootError {
    /// Git cannot be run.
    #[error("Failed to run the git command")]
    CannotRunGit(#[from] io::Error),
    /// Git has returned an error.
    #[error("{0}")]
    GitError(String),
    /// The output of git is not proper UTF-8.
    #[error("The output of the git command is not proper UTF-8")]
    EncodingError(#[from] std::string::FromUtf8Error),
}

/// The configuration for git-rules.
///
/// A configuration is only a list of presets to extend and a mapping of
/// local rules. It does not carry the full rule set: this one is built on
/// demand by [`Config::resolve`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The names of the presets to extend, in application order.
    pub extends: Vec<String>,
    /// The local rules, taking precedence over the extended presets.
    pub rules: Rules,
}

/// The name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "git-rules.toml";

impl Default for Config {
    fn default() -> Self {
        Self {
            extends: vec![String::from("conventional")],
            rules: indexmap! {
                "type-enum" => Rule::with_options(
                    Severity::Error,
                    Condition::Always,
                    RuleOptions::list(&[
                        "feat", "fix", "docs", "style", "refactor", "perf",
                        "test", "build", "ci", "chore", "revert",
                    ]),
                ),
                "type-case" => Rule::with_options(
                    Severity::Error,
                    Condition::Always,
                    RuleOptions::token("lower-case"),
                ),
                "subject-empty" =>
                    Rule::new(Severity::Error, Condition::Never),
                "type-empty" =>
                    Rule::new(Severity::Error, Condition::Never),
            }
            .into_iter()
            .map(|(name, rule)| (String::from(name), rule))
            .collect(),
        }
    }
}

impl Config {
    /// Loads the configuration of the repo or fallbacks to the default.
    #[tracing::instrument(name = "load_config", level = "trace")]
    pub fn load() -> Result<Self, LoadError> {
        let config_file = config_file()?;
        match fs::read_to_string(&config_file) {
            Ok(config) => {
                tracing::debug!(?config_file, "loading the configuration");
                Ok(Self::from_toml(&config).log_err()?)
            }

            Err(error) => {
                if error.kind() == io::ErrorKind::NotFound {
                    tracing::debug!(
                        "no configuration file, using the default"
                    );
                    Ok(Self::default())
                } else {
                    tracing::error!(
                        ?error,
                        ?config_file,
                        "cannot read the configuration"
                    );
                    Err(LoadError::ReadError(error))
                }
            }
        }
    }

    /// Builds the configuration from its TOML representation.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn from_toml(toml: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml)
    }

    /// Resolves the rule set described by the configuration.
    ///
    /// Presets are applied in the order they appear in `extends`, then the
    /// local rules are applied on top of them. A rule overriding another
    /// one replaces it entirely and keeps its place in the mapping.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn resolve(&self) -> Result<Rules, ResolveError> {
        let mut rules = Rules::new();

        for name in &self.extends {
            tracing::debug!(preset = name, "applying a preset");
            let preset = preset::find(name)
                .ok_or_else(|| ResolveError::UnknownPreset(name.clone()))
                .log_err()?;
            rules.extend(preset);
        }

        tracing::debug!(overrides = self.rules.len(), "applying local rules");
        for (name, rule) in &self.rules {
            rules.insert(name.clone(), rule.clone());
        }

        Ok(rules)
    }
}

/// Returns the path of the configuration file.
pub fn config_file() -> Result<PathBuf, ConfigFileError> {
    Ok(repo_root()?.join(CONFIG_FILE_NAME))
}

#[tracing::instrument(level = "trace")]
fn repo_root() -> Result<PathBuf, RepoRootError> {
    let git_rev_parse = Command::new("git")
        .args(["rev-parse", "--show-toplevel"])
        .output()
        .map_err(RepoRootError::CannotRunGit)
        .log_err()?;

    if git_rev_parse.status.success() {
        let repo_root = String::from_utf8(git_rev_parse.stdout)?;
        Ok(PathBuf::from(repo_root.trim()))
    } else {
        let git_error = String::from_utf8(git_rev_parse.stderr)?;
        Err(RepoRootError::GitError(git_error.trim().to_owned())).log_err()
    }
}
