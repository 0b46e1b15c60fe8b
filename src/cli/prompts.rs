//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::pipeline::{
    CrimeTypeFilter, Granularity, IncomeBracket, IncomeLevelFilter, Scene, Selection, YearFilter,
};

/// What to do after a scene is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoryAction {
    Next,
    Previous,
    ChangeFilters,
    ToggleGranularity,
    Quit,
}

/// Actions offered on a scene, in menu order
pub fn story_actions(scene: Scene) -> Vec<StoryAction> {
    let mut actions = vec![StoryAction::Next, StoryAction::Previous];
    if scene != Scene::Intro {
        actions.push(StoryAction::ChangeFilters);
    }
    if scene == Scene::Line {
        actions.push(StoryAction::ToggleGranularity);
    }
    actions.push(StoryAction::Quit);
    actions
}

fn action_label(action: StoryAction, granularity: Granularity) -> &'static str {
    match action {
        StoryAction::Next => "Next scene",
        StoryAction::Previous => "Previous scene",
        StoryAction::ChangeFilters => "Change filters",
        StoryAction::ToggleGranularity => match granularity {
            Granularity::Yearly => "Switch to Monthly View",
            Granularity::Monthly => "Switch to Yearly View",
        },
        StoryAction::Quit => "Quit",
    }
}

/// Ask what to do next on the current scene
pub fn select_story_action(scene: Scene, granularity: Granularity) -> Result<StoryAction> {
    let actions = story_actions(scene);
    let labels: Vec<&str> = actions
        .iter()
        .map(|a| action_label(*a, granularity))
        .collect();

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("What next?")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[choice])
}

/// Pick a crime type, with "All Crimes" first
pub fn select_crime_type(crime_types: &[String]) -> Result<CrimeTypeFilter> {
    let mut labels = vec!["All Crimes"];
    labels.extend(crime_types.iter().map(String::as_str));

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select Crime Type")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Selection::All,
        n => Selection::Only(crime_types[n - 1].clone()),
    })
}

/// Pick a year, with "All Years" first
pub fn select_year(years: &[i32]) -> Result<YearFilter> {
    let mut labels = vec!["All Years".to_string()];
    labels.extend(years.iter().map(|y| y.to_string()));

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select Year")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Selection::All,
        n => Selection::Only(years[n - 1]),
    })
}

/// Pick an income level for the heatmap
pub fn select_income_level() -> Result<IncomeLevelFilter> {
    let levels = [IncomeBracket::Low, IncomeBracket::Medium, IncomeBracket::High];
    let mut labels = vec!["All Income Levels"];
    labels.extend(levels.iter().map(IncomeBracket::label));

    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Select Income Level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(match choice {
        0 => Selection::All,
        n => Selection::Only(levels[n - 1]),
    })
}
