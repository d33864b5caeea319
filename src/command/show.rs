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

//! The `show` subcommand.

use clap::{Parser, ValueEnum};
use eyre::Result;
use itertools::Itertools as _;

use crate::{
    config::{config_file, Config, CONFIG_FILE_NAME},
    hint,
    rules::{RuleOptions, Rules},
};

use super::helpers::ensure_in_git_worktree;

/// The show command.
#[derive(Debug, Parser)]
pub struct Show {
    /// The output format.
    #[arg(long, short = 'f', value_enum, default_value = "pretty")]
    format: Format,
}

/// The output formats of `git rules show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// An aligned, human-readable listing.
    Pretty,
    /// The resolved rule set as TOML.
    Toml,
    /// The resolved rule set as JSON.
    Json,
}

impl super::Command for Show {
    fn run(&self) -> Result<()> {
        ensure_in_git_worktree()?;

        if !config_file()?.exists() {
            hint!(
                "There is no {CONFIG_FILE_NAME} in this repository, showing \
                the default rule set."
            );
        }

        let rules = Config::load()?.resolve()?;

        match self.format {
            Format::Pretty => print_pretty(&rules),
            Format::Toml => print_toml(&rules)?,
            Format::Json => print_json(&rules)?,
        }

        Ok(())
    }
}

/// Prints the rules as an aligned listing.
fn print_pretty(rules: &Rules) {
    for line in format_rules(rules) {
        println!("{line}");
    }
}

/// Prints the rules as TOML.
fn print_toml(rules: &Rules) -> Result<()> {
    print!("{}", toml::to_string(rules)?);
    Ok(())
}

/// Prints the rules as JSON.
fn print_json(rules: &Rules) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(rules)?);
    Ok(())
}

/// Formats the list of rules with aligned columns.
fn format_rules(rules: &Rules) -> Vec<String> {
    let Some(max_name_len) = rules.keys().map(String::len).max() else {
        return vec![];
    };

    rules
        .iter()
        .map(|(name, rule)| {
            let padding = " ".repeat(max_name_len - name.len());
            let severity = rule.severity.to_string();
            let condition = rule.condition.to_string();

            match &rule.options {
                None => {
                    format!("{name}{padding}  {severity:<5}  {condition}")
                }
                Some(options) => format!(
                    "{name}{padding}  {severity:<5}  {condition:<6}  {}",
                    format_options(options)
                ),
            }
        })
        .collect()
}

/// Formats the options of a rule.
fn format_options(options: &RuleOptions) -> String {
    match options {
        RuleOptions::Limit(limit) => limit.to_string(),
        RuleOptions::Token(token) => token.clone(),
        RuleOptions::List(tokens) => tokens.iter().join(", "),
    }
}
