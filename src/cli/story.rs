//! Story mode: walk the scenes in narrative order
//!
//! The scene cursor and the filters live in plain values owned by the loop
//! and are passed to each render call.

use anyhow::Result;

use super::prompts::{
    select_crime_type, select_income_level, select_story_action, select_year, StoryAction,
};
use super::views::{show_bar, show_heatmap, show_line, show_scatter};
use crate::pipeline::{
    crime_types, years, CrimeTypeFilter, Dataset, HeatmapFilters, LocationBucketer, Scene,
    ViewState, YearFilter,
};
use crate::utils::{print_info, print_scene_header};

/// Filter state for every scene
#[derive(Debug, Clone, Default)]
pub struct StoryFilters {
    pub line_crime_type: CrimeTypeFilter,
    pub scatter_crime_type: CrimeTypeFilter,
    pub scatter_year: YearFilter,
    pub heatmap: HeatmapFilters,
    pub bar_year: YearFilter,
}

/// Show one scene for the given view state and filters
pub fn render_scene(
    dataset: &Dataset,
    bucketer: &LocationBucketer,
    state: ViewState,
    filters: &StoryFilters,
) -> Result<()> {
    let position = Scene::ALL.iter().position(|s| *s == state.scene).unwrap_or(0) + 1;
    print_scene_header(position, Scene::ALL.len(), state.scene.title());

    match state.scene {
        Scene::Intro => {
            print_info(&format!(
                "{} crimes across {} community areas. Use Next to begin.",
                dataset.crimes.len(),
                dataset.geo.len()
            ));
            Ok(())
        }
        Scene::Line => show_line(dataset, &filters.line_crime_type, state.granularity, None),
        Scene::Scatterplot => show_scatter(
            dataset,
            &filters.scatter_crime_type,
            &filters.scatter_year,
            None,
        ),
        Scene::Heatmap => show_heatmap(dataset, &filters.heatmap, None),
        Scene::Bar => show_bar(dataset, bucketer, &filters.bar_year, None),
    }
}

/// Prompt for the filters of one scene
fn change_filters(scene: Scene, dataset: &Dataset, filters: &mut StoryFilters) -> Result<()> {
    let types = crime_types(&dataset.crimes);
    let years = years(&dataset.crimes);

    match scene {
        Scene::Intro => {}
        Scene::Line => filters.line_crime_type = select_crime_type(&types)?,
        Scene::Scatterplot => {
            filters.scatter_crime_type = select_crime_type(&types)?;
            filters.scatter_year = select_year(&years)?;
        }
        Scene::Heatmap => {
            filters.heatmap.year = select_year(&years)?;
            filters.heatmap.crime_type = select_crime_type(&types)?;
            filters.heatmap.income_level = select_income_level()?;
        }
        Scene::Bar => filters.bar_year = select_year(&years)?,
    }
    Ok(())
}

/// Run the interactive scene loop until the user quits
pub fn run_story(dataset: &Dataset) -> Result<()> {
    let bucketer = LocationBucketer::default();
    let mut state = ViewState::default();
    let mut filters = StoryFilters::default();

    loop {
        render_scene(dataset, &bucketer, state, &filters)?;

        match select_story_action(state.scene, state.granularity)? {
            StoryAction::Next => state = state.next(),
            StoryAction::Previous => state = state.prev(),
            StoryAction::ChangeFilters => change_filters(state.scene, dataset, &mut filters)?,
            StoryAction::ToggleGranularity => state = state.toggle_granularity(),
            StoryAction::Quit => return Ok(()),
        }
    }
}
