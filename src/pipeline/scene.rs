//! Scene cursor for the narrative walk-through

use serde::Serialize;

use super::filter::Granularity;

/// The five scenes, in narrative order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    #[default]
    Intro,
    Line,
    Scatterplot,
    Heatmap,
    Bar,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Intro,
        Scene::Line,
        Scene::Scatterplot,
        Scene::Heatmap,
        Scene::Bar,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Following scene, wrapping from the last back to the first
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Preceding scene, wrapping from the first to the last
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn title(self) -> &'static str {
        match self {
            Scene::Intro => "Chicago Crime Visualization from 2019 to 2023",
            Scene::Line => "Crime Trends Over Time",
            Scene::Scatterplot => "Crime Rate vs Income by Community",
            Scene::Heatmap => "Crime Heatmap by Community Area",
            Scene::Bar => "Crime Counts by Type",
        }
    }
}

/// Everything the story mode needs to know about what is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewState {
    pub scene: Scene,
    pub granularity: Granularity,
}

impl ViewState {
    pub fn next(self) -> Self {
        Self {
            scene: self.scene.next(),
            ..self
        }
    }

    pub fn prev(self) -> Self {
        Self {
            scene: self.scene.prev(),
            ..self
        }
    }

    pub fn toggle_granularity(self) -> Self {
        Self {
            granularity: self.granularity.toggled(),
            ..self
        }
    }
}
