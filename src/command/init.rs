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

//! The `init` subcommand.

use std::fs;

use askama::Template;
use clap::Parser;
use eyre::{bail, Result};
use inquire::Select;
use thiserror::Error;

use crate::{config::config_file, hint, success};

use super::helpers::ensure_in_git_worktree;

/// The init command.
#[derive(Debug, Parser)]
pub struct Init {
    /// Use the default configuration.
    #[arg(long, short = 'd')]
    default: bool,
    /// Force the init process.
    #[arg(long, short = 'f')]
    force: bool,
}

/// Usage errors of `git rules init`.
#[derive(Debug, Error)]
pub enum InitError {
    /// A configuration already exists.
    #[error("There is already a git-rules.toml in the current repository")]
    ExistingConfig,
}

/// Parameters to generate a `git-rules.toml`.
#[derive(Debug, Default, Template)]
#[template(path = "git-rules.toml.jinja")]
struct Config {
    /// The preset the rule set extends.
    preset: Preset,
    /// The local rules to write.
    rules: LocalRules,
}

/// The preset the rule set extends.
#[derive(Debug, Default)]
enum Preset {
    /// Extend the conventional preset.
    #[default]
    Conventional,
    /// Do not extend any preset.
    None,
}

/// The local rules to write.
#[derive(Debug, Default)]
enum LocalRules {
    /// Pin the usual rules in the configuration.
    #[default]
    Pinned,
    /// Only write commented examples.
    Examples,
}

impl super::Command for Init {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        let config_file = config_file()?;

        if !self.force && config_file.exists() {
            bail!(InitError::ExistingConfig);
        }

        let config = if self.default {
            Config::default()
        } else {
            Config::run_wizard()?
        };

        fs::write(config_file, format!("{config}\n"))?;

        success!("A git-rules.toml has been created!");
        hint!("You can now edit it to adjust the rules.");

        Ok(())
    }
}

impl Config {
    /// Runs the wizard to fill the parameters for the configuration.
    fn run_wizard() -> Result<Self> {
        Ok(Self {
            preset: Preset::run_wizard()?,
            rules: LocalRules::run_wizard()?,
        })
    }
}

impl Preset {
    /// Runs the wizard for preset configuration.
    fn run_wizard() -> Result<Self> {
        let options = vec![
            "Extend the conventional preset",
            "Start from an empty rule set",
        ];

        let choice =
            Select::new("Which preset should the rule set extend?", options)
                .with_starting_cursor(0)
                .prompt()?;

        let choice = match choice {
            "Extend the conventional preset" => Self::Conventional,
            _ => Self::None,
        };

        Ok(choice)
    }
}

impl LocalRules {
    /// Runs the wizard for the local rules.
    fn run_wizard() -> Result<Self> {
        let options = vec![
            "Pin the usual rules (types, type case, non-empty subject)",
            "Start with commented examples",
        ];

        let choice =
            Select::new("Which rules should be written to the file?", options)
                .with_starting_cursor(0)
                .prompt()?;

        let choice = match choice {
            "Start with commented examples" => Self::Examples,
            _ => Self::Pinned,
        };

        Ok(choice)
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::indoc;

    use super::*;

    #[test]
    fn the_default_template_matches_the_default_configuration() {
        let rendered = format!("{}\n", Config::default());
        let config = crate::config::Config::from_toml(&rendered).unwrap();

        assert_eq!(config, crate::config::Config::default());
    }

    #[test]
    fn the_example_template_writes_no_active_rule() {
        let template = Config {
            preset: Preset::Conventional,
            rules: LocalRules::Examples,
        };

        let rendered = format!("{template}\n");
        let config = crate::config::Config::from_toml(&rendered).unwrap();

        assert_eq!(config.extends, vec![String::from("conventional")]);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn the_standalone_template_extends_nothing() {
        let template = Config {
            preset: Preset::None,
            rules: LocalRules::Pinned,
        };

        let rendered = format!("{template}\n");
        let config = crate::config::Config::from_toml(&rendered).unwrap();

        assert!(config.extends.is_empty());
    }

    #[test]
    fn the_default_template_renders_the_documented_layout() {
        let rendered = format!("{}\n", Config::default());

        assert_eq!(
            rendered,
            indoc! {r#"
                # The configuration for git-rules.
                #
                # A rule is [severity, condition] or [severity, condition, options]:
                #
                #   - severity: 0 (off), 1 (warn) or 2 (error)
                #   - condition: "always" to apply the rule as stated, "never" to invert it
                #   - options: a limit, a single token or a list of tokens

                # The presets the rule set extends, applied in order.
                extends = ["conventional"]

                # The local rules, taking precedence over the extended presets.
                [rules]
                type-enum = [2, "always", [
                    "feat", "fix", "docs", "style", "refactor", "perf", "test", "build",
                    "ci", "chore", "revert",
                ]]
                type-case = [2, "always", "lower-case"]
                subject-empty = [2, "never"]
                type-empty = [2, "never"]
            "#}
        );
    }
}
