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

//! The commit message rule model.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A mapping from rule names to rule entries.
///
/// The mapping keeps its insertion order, so a rule set always renders in
/// a stable order. Inserting an entry under an existing name replaces the
/// previous entry and keeps its position.
pub type Rules = IndexMap<String, Rule>;

/// A commit message rule.
///
/// A rule is a severity, an applicability condition and optional options.
/// On the wire it keeps the historical tuple form, so a rule entry reads
/// either `[severity, condition]` or `[severity, condition, options]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RuleRepr", into = "RuleRepr")]
pub struct Rule {
    /// How a violation of the rule is reported.
    pub severity: Severity,
    /// Whether the rule applies as stated or inverted.
    pub condition: Condition,
    /// The options of the rule, if it takes any.
    pub options: Option<RuleOptions>,
}

/// The severity of a rule.
///
/// Severities serialise as their historical numeric levels: `0` is off,
/// `1` is a warning and `2` is an error. Any other level is rejected when
/// parsing a rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Severity {
    /// The rule is disabled.
    Off,
    /// A violation is reported, but does not fail the check.
    Warn,
    /// A violation fails the check.
    Error,
}

/// The applicability of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// The rule applies as stated.
    Always,
    /// The rule applies inverted.
    ///
    /// For instance, `subject-empty = [2, "never"]` reads as “the subject
    /// must never be empty”.
    Never,
}

/// The options of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleOptions {
    /// A numeric limit, like a maximum line length.
    Limit(i64),
    /// A single token, like a case name.
    Token(String),
    /// A list of allowed tokens.
    List(Vec<String>),
}

/// An error that can occur when parsing a severity level.
#[derive(Debug, Error)]
#[error("Invalid severity level {0}, expected 0 (off), 1 (warn) or 2 (error)")]
pub struct InvalidSeverity(pub u8);

/// The wire representation of a rule.
///
/// Deserialisation tries the two-element form first, so an entry with
/// options falls through to the three-element variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RuleRepr {
    /// A `[severity, condition]` entry.
    Switch(Severity, Condition),
    /// A `[severity, condition, options]` entry.
    WithOptions(Severity, Condition, RuleOptions),
}

impl Rule {
    /// Builds a rule without options.
    pub fn new(severity: Severity, condition: Condition) -> Self {
        Self {
            severity,
            condition,
            options: None,
        }
    }

    /// Builds a rule with options.
    pub fn with_options(
        severity: Severity,
        condition: Condition,
        options: RuleOptions,
    ) -> Self {
        Self {
            severity,
            condition,
            options: Some(options),
        }
    }
}

impl RuleOptions {
    /// Builds list options from a slice of tokens.
    pub fn list(tokens: &[&str]) -> Self {
        Self::List(tokens.iter().map(|token| String::from(*token)).collect())
    }

    /// Builds token options.
    pub fn token(token: &str) -> Self {
        Self::Token(String::from(token))
    }
}

impl From<RuleRepr> for Rule {
    fn from(repr: RuleRepr) -> Self {
        match repr {
            RuleRepr::Switch(severity, condition) => {
                Self::new(severity, condition)
            }
            RuleRepr::WithOptions(severity, condition, options) => {
                Self::with_options(severity, condition, options)
            }
        }
    }
}

impl From<Rule> for RuleRepr {
    fn from(rule: Rule) -> Self {
        match rule.options {
            None => Self::Switch(rule.severity, rule.condition),
            Some(options) => {
                Self::WithOptions(rule.severity, rule.condition, options)
            }
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = InvalidSeverity;

    fn try_from(level: u8) -> Result<Self, InvalidSeverity> {
        match level {
            0 => Ok(Self::Off),
            1 => Ok(Self::Warn),
            2 => Ok(Self::Error),
            level => Err(InvalidSeverity(level)),
        }
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::Warn => f.write_str("warn"),
            Self::Error => f.write_str("error"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Always => f.write_str("always"),
            Self::Never => f.write_str("never"),
        }
    }
}

#[cfg(test)]
mod test {
    #![allow(clippy::pedantic, clippy::restriction)]

    use indoc::indoc;

    use super::*;

    fn sample_rules() -> Rules {
        let mut rules = Rules::new();
        rules.insert(
            String::from("subject-empty"),
            Rule::new(Severity::Error, Condition::Never),
        );
        rules.insert(
            String::from("type-case"),
            Rule::with_options(
                Severity::Error,
                Condition::Always,
                RuleOptions::token("lower-case"),
            ),
        );
        rules.insert(
            String::from("header-max-length"),
            Rule::with_options(
                Severity::Error,
                Condition::Always,
                RuleOptions::Limit(100),
            ),
        );
        rules.insert(
            String::from("type-enum"),
            Rule::with_options(
                Severity::Error,
                Condition::Always,
                RuleOptions::list(&["feat", "fix"]),
            ),
        );
        rules
    }

    #[test]
    fn severity_levels_match_the_wire_numbers() {
        assert_eq!(Severity::try_from(0).unwrap(), Severity::Off);
        assert_eq!(Severity::try_from(1).unwrap(), Severity::Warn);
        assert_eq!(Severity::try_from(2).unwrap(), Severity::Error);
        assert_eq!(u8::from(Severity::Off), 0);
        assert_eq!(u8::from(Severity::Warn), 1);
        assert_eq!(u8::from(Severity::Error), 2);
    }

    #[test]
    fn severity_levels_out_of_range_are_rejected() {
        let error = Severity::try_from(3).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Invalid severity level 3, expected 0 (off), 1 (warn) or 2 (error)"
        );
    }

    #[test]
    fn toml_representation_keeps_the_tuple_form() {
        assert_eq!(
            toml::to_string(&sample_rules()).unwrap(),
            indoc! {r#"
                subject-empty = [2, "never"]
                type-case = [2, "always", "lower-case"]
                header-max-length = [2, "always", 100]
                type-enum = [2, "always", ["feat", "fix"]]
            "#}
        );
    }

    #[test]
    fn rules_parse_from_the_tuple_form() {
        let rules: Rules = toml::from_str(indoc! {r#"
            subject-empty = [2, "never"]
            type-case = [2, "always", "lower-case"]
            header-max-length = [2, "always", 100]
            type-enum = [2, "always", ["feat", "fix"]]
        "#})
        .unwrap();

        assert_eq!(rules, sample_rules());
    }

    #[test]
    fn rules_with_an_invalid_severity_do_not_parse() {
        let result = toml::from_str::<Rules>(r#"type-empty = [3, "never"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rules_with_an_unknown_condition_do_not_parse() {
        let result =
            toml::from_str::<Rules>(r#"type-empty = [2, "sometimes"]"#);
        assert!(result.is_err());
    }

    #[test]
    fn rules_without_a_condition_do_not_parse() {
        let result = toml::from_str::<Rules>("type-empty = [2]");
        assert!(result.is_err());
    }

    #[test]
    fn severities_and_conditions_display_as_words() {
        assert_eq!(Severity::Off.to_string(), "off");
        assert_eq!(Severity::Warn.to_string(), "warn");
        assert_eq!(Severity::Error.to_string(), "error");
        assert_eq!(Condition::Always.to_string(), "always");
        assert_eq!(Condition::Never.to_string(), "never");
    }
}
