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

//! The built-in rule set presets.

use indexmap::indexmap;

use crate::rules::{Condition, Rule, RuleOptions, Rules, Severity};

/// The names of the built-in presets.
pub const NAMES: &[&str] = &["conventional"];

/// Returns the rules of the given preset, if it exists.
pub fn find(name: &str) -> Option<Rules> {
    match name {
        "conventional" => Some(conventional()),
        _ => None,
    }
}

/// Builds the `conventional` preset.
///
/// This preset enforces the [Conventional
/// Commits](https://www.conventionalcommits.org) specification: a typed
/// header with a concise subject, line lengths that fit in a terminal, and
/// blank lines before the body and the footer.
fn conventional() -> Rules {
    indexmap! {
        "body-leading-blank" =>
            Rule::new(Severity::Warn, Condition::Always),
        "body-max-line-length" => Rule::with_options(
            Severity::Error,
            Condition::Always,
            RuleOptions::Limit(100),
        ),
        "footer-leading-blank" =>
            Rule::new(Severity::Warn, Condition::Always),
        "footer-max-line-length" => Rule::with_options(
            Severity::Error,
            Condition::Always,
            RuleOptions::Limit(100),
        ),
        "header-max-length" => Rule::with_options(
            Severity::Error,
            Condition::Always,
            RuleOptions::Limit(100),
        ),
        "header-trim" => Rule::new(Severity::Error, Condition::Always),
        "subject-case" => Rule::with_options(
            Severity::Error,
            Condition::Never,
            RuleOptions::list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ]),
        ),
        "subject-empty" => Rule::new(Severity::Error, Condition::Never),
        "subject-full-stop" => Rule::with_options(
            Severity::Error,
            Condition::Never,
            RuleOptions::token("."),
        ),
        "type-case" => Rule::with_options(
            Severity::Error,
            Condition::Always,
            RuleOptions::token("lower-case"),
        ),
        "type-empty" => Rule::new(Severity::Error, Condition::Never),
        "type-enum" => Rule::with_options(
            Severity::Error,
            Condition::Always,
            RuleOptions::list(&[
                "build", "chore", "ci", "docs", "feat", "fix", "perf",
                "refactor", "revert", "style", "test",
            ]),
        ),
    }
    .into_iter()
    .map(|(name, rule)| (String::from(name), rule))
    .collect()
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use super::*;

    #[test]
    fn every_name_resolves_to_a_preset() {
        for name in NAMES {
            assert!(find(name).is_some(), "preset {name} does not resolve");
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert!(find("angular").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn the_conventional_preset_is_sorted_by_rule_name() {
        let rules = conventional();
        let mut names: Vec<_> = rules.keys().collect();
        names.sort();

        assert_eq!(rules.keys().collect::<Vec<_>>(), names);
    }

    #[test]
    fn the_conventional_preset_allows_the_conventional_types() {
        let rules = conventional();
        let rule = &rules["type-enum"];

        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.condition, Condition::Always);
        assert_eq!(
            rule.options,
            Some(RuleOptions::list(&[
                "build", "chore", "ci", "docs", "feat", "fix", "perf",
                "refactor", "revert", "style", "test",
            ]))
        );
    }

    #[test]
    fn the_conventional_preset_rejects_shouty_subjects() {
        let rules = conventional();
        let rule = &rules["subject-case"];

        assert_eq!(rule.severity, Severity::Error);
        assert_eq!(rule.condition, Condition::Never);
        assert_eq!(
            rule.options,
            Some(RuleOptions::list(&[
                "sentence-case",
                "start-case",
                "pascal-case",
                "upper-case",
            ]))
        );
    }
}
