use std::fmt;

/// Tri-state label shown next to each job in the dashboard.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum JobStatus {
    Success, // blue, blue_anime
    Failure, // red, red_anime
    Unstable, // everything else: yellow, grey, disabled, aborted, notbuilt...
}

impl JobStatus {
    /// Classifies a Jenkins ball color. "blue" is checked before "red", and
    /// the match is a case-sensitive substring test.
    pub fn from_color(color: &str) -> JobStatus {
        if color.contains("blue") {
            JobStatus::Success
        } else if color.contains("red") {
            JobStatus::Failure
        } else {
            JobStatus::Unstable
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            JobStatus::Success => "SUCCESS",
            JobStatus::Failure => "FAILURE",
            JobStatus::Unstable => "UNSTABLE",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSummary {
    pub name: String,
    pub status: JobStatus,
}

impl JobSummary {
    pub fn new(name: &str, color: &str) -> JobSummary {
        JobSummary {
            name: name.to_string(),
            status: JobStatus::from_color(color),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blue_colors_are_success() {
        for color in &["blue", "blue_anime", "xbluex", "red_blue", "bluered"] {
            assert_eq!(JobStatus::from_color(color), JobStatus::Success, "{}", color);
        }
    }

    #[test]
    fn red_without_blue_is_failure() {
        for color in &["red", "red_anime", "shred"] {
            assert_eq!(JobStatus::from_color(color), JobStatus::Failure, "{}", color);
        }
    }

    #[test]
    fn anything_else_is_unstable() {
        let others = [
            "yellow",
            "grey",
            "disabled",
            "aborted",
            "notbuilt_anime",
            "",
            "BLUE",
            "Red",
        ];
        for color in &others {
            assert_eq!(JobStatus::from_color(color), JobStatus::Unstable, "{}", color);
        }
    }

    #[test]
    fn labels_match_dashboard_text() {
        assert_eq!(JobStatus::Success.to_string(), "SUCCESS");
        assert_eq!(JobStatus::Failure.to_string(), "FAILURE");
        assert_eq!(JobStatus::Unstable.to_string(), "UNSTABLE");
    }
}
