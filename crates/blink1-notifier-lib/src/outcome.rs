//! Build outcomes as reported by the CI server.

use std::fmt;

/// Final result of a build.
///
/// `Unknown` is the catch-all for anything the notifier does not recognise;
/// it is signalled the same way as `Aborted` and `NotBuilt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildOutcome {
    Success,
    Unstable,
    Failure,
    Aborted,
    NotBuilt,
    Unknown,
}

impl BuildOutcome {
    /// Parse a Jenkins result name or ball color. Never fails.
    ///
    /// - Result names: `SUCCESS`, `UNSTABLE`, `FAILURE`, `ABORTED`, `NOT_BUILT`
    /// - Ball colors: `blue`, `yellow`, `red`, `aborted`, `grey`, `disabled`,
    ///   `notbuilt`, optionally suffixed with `_anime` (build in progress)
    ///
    /// Matching is case-insensitive; anything else is [`BuildOutcome::Unknown`].
    pub fn parse(s: &str) -> Self {
        let s = s.trim().to_ascii_lowercase();
        let s = s.strip_suffix("_anime").unwrap_or(&s);
        match s {
            "success" | "blue" | "green" => BuildOutcome::Success,
            "unstable" | "yellow" => BuildOutcome::Unstable,
            "failure" | "red" => BuildOutcome::Failure,
            "aborted" | "grey" | "disabled" => BuildOutcome::Aborted,
            "not_built" | "notbuilt" => BuildOutcome::NotBuilt,
            other => {
                log::debug!("unrecognised build outcome {other:?}, treating as unknown");
                BuildOutcome::Unknown
            }
        }
    }

    /// Jenkins result name (`SUCCESS`, `FAILURE`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildOutcome::Success => "SUCCESS",
            BuildOutcome::Unstable => "UNSTABLE",
            BuildOutcome::Failure => "FAILURE",
            BuildOutcome::Aborted => "ABORTED",
            BuildOutcome::NotBuilt => "NOT_BUILT",
            BuildOutcome::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for BuildOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_result_names() {
        assert_eq!(BuildOutcome::parse("SUCCESS"), BuildOutcome::Success);
        assert_eq!(BuildOutcome::parse("UNSTABLE"), BuildOutcome::Unstable);
        assert_eq!(BuildOutcome::parse("FAILURE"), BuildOutcome::Failure);
        assert_eq!(BuildOutcome::parse("ABORTED"), BuildOutcome::Aborted);
        assert_eq!(BuildOutcome::parse("NOT_BUILT"), BuildOutcome::NotBuilt);
    }

    #[test]
    fn parse_is_case_insensitive_and_trims() {
        assert_eq!(BuildOutcome::parse("failure"), BuildOutcome::Failure);
        assert_eq!(BuildOutcome::parse("  Success\n"), BuildOutcome::Success);
    }

    #[test]
    fn parse_ball_colors() {
        assert_eq!(BuildOutcome::parse("blue"), BuildOutcome::Success);
        assert_eq!(BuildOutcome::parse("yellow"), BuildOutcome::Unstable);
        assert_eq!(BuildOutcome::parse("red"), BuildOutcome::Failure);
        assert_eq!(BuildOutcome::parse("grey"), BuildOutcome::Aborted);
        assert_eq!(BuildOutcome::parse("disabled"), BuildOutcome::Aborted);
        assert_eq!(BuildOutcome::parse("notbuilt"), BuildOutcome::NotBuilt);
    }

    #[test]
    fn parse_anime_ball_colors() {
        assert_eq!(BuildOutcome::parse("red_anime"), BuildOutcome::Failure);
        assert_eq!(BuildOutcome::parse("blue_anime"), BuildOutcome::Success);
    }

    #[test]
    fn parse_garbage_is_unknown() {
        assert_eq!(BuildOutcome::parse(""), BuildOutcome::Unknown);
        assert_eq!(BuildOutcome::parse("purple"), BuildOutcome::Unknown);
        assert_eq!(BuildOutcome::parse("_anime"), BuildOutcome::Unknown);
    }

    #[test]
    fn display_uses_result_name() {
        assert_eq!(BuildOutcome::NotBuilt.to_string(), "NOT_BUILT");
        assert_eq!(BuildOutcome::Unknown.to_string(), "UNKNOWN");
    }
}
