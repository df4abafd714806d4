//! User profile shown on the progress view.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_tagline")]
    pub tagline: String,
    #[serde(default = "default_major")]
    pub major: String,
    #[serde(default = "default_year")]
    pub year: String,
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_name() -> String {
    "Student".into()
}
fn default_tagline() -> String {
    "Grinding XP every semester.".into()
}
fn default_major() -> String {
    "Undeclared".into()
}
fn default_year() -> String {
    "1st".into()
}
fn default_goal() -> String {
    "Stay consistent".into()
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: default_name(),
            tagline: default_tagline(),
            major: default_major(),
            year: default_year(),
            goal: default_goal(),
        }
    }
}

impl Profile {
    /// Up to two uppercase initials for the avatar badge.
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "CP".to_string()
        } else {
            initials
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_from_two_names() {
        let profile = Profile {
            name: "ada lovelace".into(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "AL");
    }

    #[test]
    fn initials_cap_at_two() {
        let profile = Profile {
            name: "Jean Luc Picard".into(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "JL");
    }

    #[test]
    fn blank_name_falls_back() {
        let profile = Profile {
            name: "   ".into(),
            ..Profile::default()
        };
        assert_eq!(profile.initials(), "CP");
    }
}
