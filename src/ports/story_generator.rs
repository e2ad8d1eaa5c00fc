//! Story generation port.

use crate::domain::StorySegment;

/// Produces story segments. Implementations cannot fail.
pub trait StoryGenerator {
    /// Opening segment.
    fn initial(&self, theme: Option<&str>) -> StorySegment;

    /// Segment following the player's `choice` from `segment`.
    fn continuation(&self, segment: &StorySegment, choice: &str) -> StorySegment;
}
