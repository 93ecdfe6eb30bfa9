//! Quality rating of the most recent play.

/// How promising a play was, judged by the follow-up plays it leaves
/// open through the cell it claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PlayEvaluation {
    /// No follow-up play left open.
    Bad,
    /// One follow-up.
    Ordinary,
    /// Two follow-ups.
    Great,
    /// Three follow-ups.
    Impressive,
    /// Four or more follow-ups.
    Awesome,
}

impl PlayEvaluation {
    /// Rates a play by its number of open follow-ups.
    pub fn from_follow_ups(count: usize) -> Self {
        match count {
            0 => Self::Bad,
            1 => Self::Ordinary,
            2 => Self::Great,
            3 => Self::Impressive,
            _ => Self::Awesome,
        }
    }

    /// The phrase shown in the title bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Bad => "bad...",
            Self::Ordinary => "ordinary.",
            Self::Great => "great :)",
            Self::Impressive => "impressive!",
            Self::Awesome => "awesome !!!",
        }
    }
}

impl std::fmt::Display for PlayEvaluation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
