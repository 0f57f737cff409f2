//! Support Conditions
//!
//! Each end of the span is either pinned (displacement restrained, rotation
//! free) or fixed (displacement and rotation restrained). The four end
//! combinations reduce to three structural cases: simple beam, fixed-fixed
//! beam, and propped cantilever in either orientation.

use serde::{Deserialize, Serialize};

/// Support condition at one end of the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SupportCondition {
    /// Pinned/hinged support - restrains vertical displacement, allows rotation
    ///
    /// - Vertical displacement: restrained (Δ = 0)
    /// - Rotation: free
    #[default]
    Pinned,

    /// Fixed support - restrains both displacement and rotation
    ///
    /// - Vertical displacement: restrained (Δ = 0)
    /// - Rotation: restrained (θ = 0)
    /// - Creates moment reaction at support
    Fixed,
}

impl SupportCondition {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SupportCondition::Pinned => "Pinned",
            SupportCondition::Fixed => "Fixed",
        }
    }
}

impl std::fmt::Display for SupportCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Structural case implied by a pair of end conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// Simple beam (pinned at both ends)
    PinnedPinned,
    /// Fixed at both ends
    FixedFixed,
    /// Propped cantilever, fixed at the left end
    FixedPinned,
    /// Propped cantilever, fixed at the right end
    PinnedFixed,
}

/// Support conditions at both ends of the span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SupportConfiguration {
    /// Condition at x = 0
    pub left: SupportCondition,
    /// Condition at x = L
    pub right: SupportCondition,
}

impl SupportConfiguration {
    /// Create a configuration from left and right end conditions
    pub fn new(left: SupportCondition, right: SupportCondition) -> Self {
        Self { left, right }
    }

    /// Pinned at both ends
    pub fn pinned_pinned() -> Self {
        Self::new(SupportCondition::Pinned, SupportCondition::Pinned)
    }

    /// Fixed at both ends
    pub fn fixed_fixed() -> Self {
        Self::new(SupportCondition::Fixed, SupportCondition::Fixed)
    }

    /// Fixed at the left end, pinned at the right end
    pub fn fixed_pinned() -> Self {
        Self::new(SupportCondition::Fixed, SupportCondition::Pinned)
    }

    /// Pinned at the left end, fixed at the right end
    pub fn pinned_fixed() -> Self {
        Self::new(SupportCondition::Pinned, SupportCondition::Fixed)
    }

    /// Classify the end conditions
    pub fn kind(&self) -> SupportKind {
        use SupportCondition::*;
        match (self.left, self.right) {
            (Pinned, Pinned) => SupportKind::PinnedPinned,
            (Fixed, Fixed) => SupportKind::FixedFixed,
            (Fixed, Pinned) => SupportKind::FixedPinned,
            (Pinned, Fixed) => SupportKind::PinnedFixed,
        }
    }
}

impl std::fmt::Display for SupportConfiguration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.left, self.right)
    }
}
