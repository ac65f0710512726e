//! Reveal-on-scroll animations and skill bars

use std::collections::HashSet;
use std::time::Duration;

/// Fraction of an element that must be visible before it is revealed
pub const REVEAL_THRESHOLD: f64 = 0.15;

/// Observer root margin; reveals trigger a bit before the bottom edge
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";

/// Class added to revealed elements
pub const REVEALED_CLASS: &str = "aos-animate";

/// Delay before skill bars grow to their level
pub const SKILL_BAR_DELAY: Duration = Duration::from_millis(150);

/// Animation requested by an element's `data-aos` attribute
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RevealKind {
    FadeUp,
    FadeDown,
    FadeRight,
    FadeLeft,
    /// Any other animation name; fades in place
    Fade,
}

impl RevealKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "fade-up" => RevealKind::FadeUp,
            "fade-down" => RevealKind::FadeDown,
            "fade-right" => RevealKind::FadeRight,
            "fade-left" => RevealKind::FadeLeft,
            _ => RevealKind::Fade,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            RevealKind::FadeUp => "fade-up",
            RevealKind::FadeDown => "fade-down",
            RevealKind::FadeRight => "fade-right",
            RevealKind::FadeLeft => "fade-left",
            RevealKind::Fade => "fade",
        }
    }

    /// Transform applied before the element is revealed
    pub fn initial_transform(&self) -> Option<&'static str> {
        match self {
            RevealKind::FadeUp => Some("translateY(50px)"),
            RevealKind::FadeDown => Some("translateY(-50px)"),
            RevealKind::FadeRight => Some("translateX(-50px)"),
            RevealKind::FadeLeft => Some("translateX(50px)"),
            RevealKind::Fade => None,
        }
    }
}

/// Ids of elements already revealed. Revealing never reverts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RevealSet {
    revealed: HashSet<String>,
}

impl RevealSet {
    /// Record an intersection; returns `true` the first time an id is seen
    pub fn mark(&mut self, id: impl Into<String>) -> bool {
        self.revealed.insert(id.into())
    }

    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }

    /// Inline style for an element that has not been revealed yet
    pub fn style(&self, id: &str, kind: RevealKind) -> String {
        match kind.initial_transform() {
            Some(transform) if !self.is_revealed(id) => format!("transform: {};", transform),
            _ => String::new(),
        }
    }

    pub fn class(&self, id: &str) -> &'static str {
        if self.is_revealed(id) {
            REVEALED_CLASS
        } else {
            ""
        }
    }
}

/// A skill with its proficiency bar
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, if known
    pub level: Option<u8>,
}

impl Skill {
    /// Bar width once the animation has run; unknown levels stay at 0%
    pub fn target_width(&self) -> String {
        format!("{}%", self.level.unwrap_or(0).min(100))
    }
}
