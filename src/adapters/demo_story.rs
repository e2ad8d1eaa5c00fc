//! Canned story content for running without any completion API.

use std::thread;
use std::time::Duration;

use tracing::info;

use crate::domain::{DemoConfig, StorySegment};
use crate::ports::StoryGenerator;

/// Branch keywords in priority order; the first one contained in the choice wins.
const CAVE_KEYWORD: &str = "Enter the cave";
const SYMBOLS_KEYWORD: &str = "Examine the glowing";
const POUCH_KEYWORD: &str = "Pick up";

/// Fixed-table story generator with simulated latency.
#[derive(Debug, Clone)]
pub struct DemoStoryGenerator {
    initial_delay: Duration,
    continuation_delay: Duration,
}

impl Default for DemoStoryGenerator {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default())
    }
}

impl DemoStoryGenerator {
    pub fn from_config(config: &DemoConfig) -> Self {
        Self {
            initial_delay: Duration::from_millis(config.initial_delay_ms),
            continuation_delay: Duration::from_millis(config.continuation_delay_ms),
        }
    }

    /// Generator that answers without delay.
    pub fn instant() -> Self {
        Self { initial_delay: Duration::ZERO, continuation_delay: Duration::ZERO }
    }
}

impl StoryGenerator for DemoStoryGenerator {
    fn initial(&self, theme: Option<&str>) -> StorySegment {
        info!(theme = theme.unwrap_or(""), "serving demo opening");
        thread::sleep(self.initial_delay);
        cave_entrance()
    }

    fn continuation(&self, _segment: &StorySegment, choice: &str) -> StorySegment {
        info!(choice, "serving demo continuation");
        thread::sleep(self.continuation_delay);
        branch_for(choice)
    }
}

fn branch_for(choice: &str) -> StorySegment {
    if choice.contains(CAVE_KEYWORD) {
        cave_interior()
    } else if choice.contains(SYMBOLS_KEYWORD) {
        glowing_symbols()
    } else if choice.contains(POUCH_KEYWORD) {
        leather_pouch()
    } else {
        singing_grove()
    }
}

fn cave_entrance() -> StorySegment {
    StorySegment::new(
        "You find yourself standing at the entrance of a mysterious cave. The wind howls through the opening, carrying whispers of adventure and danger. Strange glowing symbols are etched into the stone around the entrance, and you notice a small leather pouch lying on the ground nearby. In the distance, you hear what sounds like singing, though the language is unfamiliar.",
        [
            "Enter the cave cautiously",
            "Examine the glowing symbols",
            "Pick up the leather pouch",
            "Follow the distant singing",
        ],
    )
}

fn cave_interior() -> StorySegment {
    StorySegment::new(
        "You step carefully into the cave, the temperature dropping noticeably as you venture deeper. Your eyes adjust to the dimness, revealing a passage that branches in two directions. The left path glimmers with the same strange symbols you saw outside, pulsing with an ethereal blue light. The right path is darker, but you detect the faint sound of running water. A small, curious creature scurries across the floor and disappears into a crevice.",
        [
            "Follow the glowing symbols",
            "Take the path with water",
            "Investigate the crevice",
            "Call out a greeting",
        ],
    )
}

fn glowing_symbols() -> StorySegment {
    StorySegment::new(
        "As you study the symbols, they begin to shift and rearrange under your gaze. With astonishment, you realize they're forming words you can understand. 'Speak truth to enter, speak lies to be lost.' The symbols pulse brighter, and you feel a strange tingling sensation in your fingertips. A small section of the stone beside the symbols looks different, with a handprint indentation that seems to be waiting for something.",
        [
            "Place your hand on the imprint",
            "Speak a truth aloud",
            "Tell a deliberate lie",
            "Back away from the entrance",
        ],
    )
}

fn leather_pouch() -> StorySegment {
    StorySegment::new(
        "You pick up the leather pouch, which is heavier than it looks. Opening it reveals three items: a smooth stone with a hole through the center, a small brass key with intricate engravings, and a folded piece of parchment. The parchment contains a crude map showing the cave and three marked locations within, labeled in an unfamiliar script. As you examine these items, the singing in the distance grows momentarily louder before fading again.",
        [
            "Enter the cave with the items",
            "Look through the holed stone",
            "Try to decipher the map",
            "Call toward the singing",
        ],
    )
}

fn singing_grove() -> StorySegment {
    StorySegment::new(
        "You follow the haunting melody, moving away from the cave and into a grove of ancient trees you hadn't noticed before. The singing grows clearer: a woman's voice, ethereal and mesmerizing. Through the trees, you glimpse a small clearing where a figure in flowing white garments sits beside a spring. She seems unaware of your presence, though when the wind shifts, her singing pauses momentarily. Near the edge of the clearing, a worn path leads around the grove, back toward the cave but from a different angle.",
        [
            "Approach the singing woman",
            "Hide and observe her",
            "Return to the cave entrance",
            "Follow the worn path",
        ],
    )
}
