//! Declarative validation rules for [`Record`]s.
//!
//! Rules deserialize from configuration, tagged by `kind`:
//!
//! ```toml
//! [[rules]]
//! attribute = "name"
//! kind = "presence"
//!
//! [[rules]]
//! attribute = "name"
//! kind = "length"
//! min = 2
//! max = 40
//! ```

use serde::{Deserialize, Serialize};

use active_services_core::domain::{ValidationErrors, humanize};

use crate::record::Record;

/// A single check applied to one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rule {
    /// Value must be present and not whitespace-only.
    Presence,
    /// Character count bounds. Blank values are left to `Presence`.
    Length {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    /// Value must be one of the listed options.
    Inclusion {
        #[serde(rename = "in")]
        options: Vec<String>,
    },
    /// Value must parse as a finite number.
    Numericality,
    /// Value must equal the value of another attribute. An absent value is
    /// left to `Presence`.
    Confirmation { of: String },
}

impl Rule {
    /// Messages this rule produces for `value` (empty when it holds).
    pub fn check(&self, value: Option<&str>, record: &Record) -> Vec<String> {
        let blank = value.is_none_or(|v| v.trim().is_empty());

        match self {
            Self::Presence => {
                if blank {
                    vec!["can't be blank".into()]
                } else {
                    Vec::new()
                }
            }
            Self::Length { min, max } => {
                let Some(v) = value.filter(|_| !blank) else {
                    return Vec::new();
                };
                let count = v.chars().count();
                let mut messages = Vec::new();
                if let Some(min) = min.filter(|min| count < *min) {
                    messages.push(format!("is too short (minimum is {min} characters)"));
                }
                if let Some(max) = max.filter(|max| count > *max) {
                    messages.push(format!("is too long (maximum is {max} characters)"));
                }
                messages
            }
            Self::Inclusion { options } => match value.filter(|_| !blank) {
                Some(v) if !options.iter().any(|o| o == v) => {
                    vec!["is not included in the list".into()]
                }
                _ => Vec::new(),
            },
            Self::Numericality => match value.filter(|_| !blank) {
                Some(v) if !v.trim().parse::<f64>().is_ok_and(f64::is_finite) => {
                    vec!["is not a number".into()]
                }
                _ => Vec::new(),
            },
            Self::Confirmation { of } => {
                if value.is_some() && value != record.get(of) {
                    vec![format!("doesn't match {}", humanize(of))]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

/// A rule bound to the attribute it checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRule {
    pub attribute: String,
    #[serde(flatten)]
    pub rule: Rule,
}

impl AttributeRule {
    pub fn new(attribute: impl Into<String>, rule: Rule) -> Self {
        Self {
            attribute: attribute.into(),
            rule,
        }
    }
}

/// Ordered rules; errors are reported in rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<AttributeRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: AttributeRule) {
        self.rules.push(rule);
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, attribute: impl Into<String>, rule: Rule) -> Self {
        self.push(AttributeRule::new(attribute, rule));
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &AttributeRule> {
        self.rules.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Run every rule against `record`.
    pub fn apply(&self, record: &Record) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        for AttributeRule { attribute, rule } in &self.rules {
            for message in rule.check(record.get(attribute), record) {
                errors.add(attribute.as_str(), message);
            }
        }
        errors
    }
}

impl FromIterator<AttributeRule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = AttributeRule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(attrs: &[(&str, &str)]) -> Record {
        Record::new("user").with_attributes(attrs.iter().copied())
    }

    #[test]
    fn presence_rejects_missing_and_whitespace() {
        let rules = RuleSet::new().with("name", Rule::Presence);

        assert_eq!(
            rules.apply(&user(&[])).full_messages(),
            vec!["Name can't be blank"]
        );
        assert_eq!(
            rules.apply(&user(&[("name", "   ")])).full_messages(),
            vec!["Name can't be blank"]
        );
        assert!(rules.apply(&user(&[("name", "Ada")])).is_empty());
    }

    #[test]
    fn length_counts_characters_and_skips_blank() {
        let rules = RuleSet::new().with(
            "name",
            Rule::Length {
                min: Some(2),
                max: Some(4),
            },
        );

        assert_eq!(
            rules.apply(&user(&[("name", "A")])).full_messages(),
            vec!["Name is too short (minimum is 2 characters)"]
        );
        assert_eq!(
            rules.apply(&user(&[("name", "Adelaide")])).full_messages(),
            vec!["Name is too long (maximum is 4 characters)"]
        );
        assert!(rules.apply(&user(&[("name", "Zoë")])).is_empty());
        assert!(rules.apply(&user(&[])).is_empty());
    }

    #[test]
    fn inclusion_checks_membership() {
        let rules = RuleSet::new().with(
            "role",
            Rule::Inclusion {
                options: vec!["admin".into(), "member".into()],
            },
        );

        assert!(rules.apply(&user(&[("role", "member")])).is_empty());
        assert_eq!(
            rules.apply(&user(&[("role", "root")])).full_messages(),
            vec!["Role is not included in the list"]
        );
    }

    #[test]
    fn numericality_accepts_integers_and_decimals() {
        let rules = RuleSet::new().with("age", Rule::Numericality);

        assert!(rules.apply(&user(&[("age", "42")])).is_empty());
        assert!(rules.apply(&user(&[("age", "4.2")])).is_empty());
        assert_eq!(
            rules.apply(&user(&[("age", "forty")])).full_messages(),
            vec!["Age is not a number"]
        );
        for raw in ["NaN", "inf", "infinity", "-inf"] {
            assert_eq!(
                rules.apply(&user(&[("age", raw)])).full_messages(),
                vec!["Age is not a number"],
                "{raw} should not count as a number"
            );
        }
    }

    #[test]
    fn confirmation_compares_attributes() {
        let rules = RuleSet::new().with(
            "password_confirmation",
            Rule::Confirmation {
                of: "password".into(),
            },
        );

        assert!(
            rules
                .apply(&user(&[
                    ("password", "hunter2"),
                    ("password_confirmation", "hunter2")
                ]))
                .is_empty()
        );
        assert_eq!(
            rules
                .apply(&user(&[
                    ("password", "hunter2"),
                    ("password_confirmation", "hunter3")
                ]))
                .full_messages(),
            vec!["Password confirmation doesn't match Password"]
        );
    }

    #[test]
    fn confirmation_skips_absent_value() {
        let rules = RuleSet::new().with(
            "password_confirmation",
            Rule::Confirmation {
                of: "password".into(),
            },
        );

        assert!(rules.apply(&user(&[("password", "hunter2")])).is_empty());
    }

    #[test]
    fn errors_follow_rule_order() {
        let rules = RuleSet::new()
            .with("email", Rule::Presence)
            .with("name", Rule::Presence);

        assert_eq!(
            rules.apply(&user(&[])).full_messages(),
            vec!["Email can't be blank", "Name can't be blank"]
        );
    }

    #[test]
    fn rules_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Model {
            rules: RuleSet,
        }

        let model: Model = toml::from_str(
            r#"
            [[rules]]
            attribute = "name"
            kind = "presence"

            [[rules]]
            attribute = "name"
            kind = "length"
            max = 40

            [[rules]]
            attribute = "role"
            kind = "inclusion"
            in = ["admin", "member"]
            "#,
        )
        .unwrap();

        let rules: Vec<_> = model.rules.iter().cloned().collect();
        assert_eq!(
            rules,
            vec![
                AttributeRule::new("name", Rule::Presence),
                AttributeRule::new(
                    "name",
                    Rule::Length {
                        min: None,
                        max: Some(40)
                    }
                ),
                AttributeRule::new(
                    "role",
                    Rule::Inclusion {
                        options: vec!["admin".into(), "member".into()]
                    }
                ),
            ]
        );
    }
}
