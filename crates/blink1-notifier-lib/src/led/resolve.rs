//! Outcome → color mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::outcome::BuildOutcome;

/// Which color a successful build is signalled with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessColor {
    #[default]
    Green,
    Blue,
}

impl SuccessColor {
    pub fn color(self) -> Color {
        match self {
            SuccessColor::Green => Color::GREEN,
            SuccessColor::Blue => Color::BLUE,
        }
    }
}

impl fmt::Display for SuccessColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SuccessColor::Green => f.write_str("green"),
            SuccessColor::Blue => f.write_str("blue"),
        }
    }
}

impl FromStr for SuccessColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(SuccessColor::Green),
            "blue" => Ok(SuccessColor::Blue),
            other => Err(format!(
                "unknown success color \"{other}\" (expected green or blue)"
            )),
        }
    }
}

/// Resolve the signal color for a build outcome.
///
/// Unstable is yellow, failure is red, success follows `success`; every other
/// outcome falls back to white.
pub fn resolve_color(outcome: BuildOutcome, success: SuccessColor) -> Color {
    match outcome {
        BuildOutcome::Success => success.color(),
        BuildOutcome::Unstable => Color::YELLOW,
        BuildOutcome::Failure => Color::RED,
        BuildOutcome::Aborted | BuildOutcome::NotBuilt | BuildOutcome::Unknown => Color::WHITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_is_red() {
        assert_eq!(
            resolve_color(BuildOutcome::Failure, SuccessColor::Green),
            Color::RED
        );
    }

    #[test]
    fn unstable_is_yellow() {
        let c = resolve_color(BuildOutcome::Unstable, SuccessColor::Green);
        assert_eq!(c, Color::new(255, 200, 0));
    }

    #[test]
    fn success_follows_policy() {
        assert_eq!(
            resolve_color(BuildOutcome::Success, SuccessColor::Green),
            Color::GREEN
        );
        assert_eq!(
            resolve_color(BuildOutcome::Success, SuccessColor::Blue),
            Color::BLUE
        );
    }

    #[test]
    fn default_policy_is_green() {
        assert_eq!(SuccessColor::default(), SuccessColor::Green);
    }

    #[test]
    fn success_color_from_str() {
        assert_eq!("Blue".parse::<SuccessColor>(), Ok(SuccessColor::Blue));
        assert_eq!("green".parse::<SuccessColor>(), Ok(SuccessColor::Green));
        assert!("red".parse::<SuccessColor>().is_err());
    }

    #[test]
    fn everything_else_is_white() {
        for outcome in [
            BuildOutcome::Aborted,
            BuildOutcome::NotBuilt,
            BuildOutcome::Unknown,
        ] {
            for policy in [SuccessColor::Green, SuccessColor::Blue] {
                assert_eq!(resolve_color(outcome, policy), Color::WHITE, "{outcome}");
            }
        }
    }

    #[test]
    fn policy_does_not_affect_non_success() {
        assert_eq!(
            resolve_color(BuildOutcome::Failure, SuccessColor::Blue),
            Color::RED
        );
        assert_eq!(
            resolve_color(BuildOutcome::Unstable, SuccessColor::Blue),
            Color::YELLOW
        );
    }
}
