//! Display modes for the board view.

/// How much assistance the board view offers.
///
/// Modes cycle in order on each toggle, starting from [`Sober`].
///
/// [`Sober`]: DisplayMode::Sober
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayMode {
    /// Plain board, no assistance.
    #[default]
    Sober,
    /// Rates each play as it is made.
    Visual,
    /// Marks every playable segment on the board.
    Help,
}

impl DisplayMode {
    /// The mode the toggle key switches to next.
    pub fn next(self) -> Self {
        match self {
            Self::Sober => Self::Visual,
            Self::Visual => Self::Help,
            Self::Help => Self::Sober,
        }
    }

    /// Short name shown in the title bar.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sober => "sober",
            Self::Visual => "visual",
            Self::Help => "help",
        }
    }

    /// Whether playable segments are drawn on the board.
    pub fn shows_hints(self) -> bool {
        self != Self::Sober
    }
}
