use dialoguer::Select;

use crate::app::api::{self, StoryOptions};
use crate::domain::AppError;

pub fn run_play(options: &StoryOptions, theme: Option<&str>) -> Result<(), AppError> {
    let teller = api::story_teller(options)?;
    let mut segment = teller.start(theme);

    loop {
        println!("\n{}\n", segment.text);

        let selection = Select::new()
            .with_prompt("What do you do? (Esc to quit)")
            .items(&segment.options)
            .default(0)
            .interact_opt()
            .map_err(|err| AppError::Interaction(format!("Failed to select option: {}", err)))?;

        let Some(index) = selection else {
            println!("The story pauses here.");
            return Ok(());
        };

        let choice = segment.options[index].clone();
        segment = teller.continue_story(&segment, &choice);
    }
}
