use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::drag::gesture::DEFAULT_ACTIVATION_DISTANCE;

const MIN_ACTIVATION_DISTANCE: u16 = 1;
const MAX_ACTIVATION_DISTANCE: u16 = 20;
const MIN_COLUMN_WIDTH: u16 = 16;
const MAX_COLUMN_WIDTH: u16 = 80;
const DEFAULT_COLUMN_WIDTH: u16 = 24;
const MIN_CARD_HEIGHT: u16 = 3;
const MAX_CARD_HEIGHT: u16 = 8;
const DEFAULT_CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub drag_activation_distance: u16,
    pub min_column_width: u16,
    pub card_height: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            drag_activation_distance: DEFAULT_ACTIVATION_DISTANCE,
            min_column_width: DEFAULT_COLUMN_WIDTH,
            card_height: DEFAULT_CARD_HEIGHT,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push("kanban-dnd");
        path.push("settings.toml");
        Some(path)
    }

    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };

        Self::load_from_path(&path)
    }

    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Self>(&contents) {
                Ok(mut settings) => {
                    settings.validate();
                    settings
                }
                Err(error) => {
                    warn!(
                        "failed to parse settings config '{}': {}",
                        path.display(),
                        error
                    );
                    Self::default()
                }
            },
            Err(error) => {
                warn!(
                    "failed to read settings config '{}': {}",
                    path.display(),
                    error
                );
                Self::default()
            }
        }
    }

    pub fn with_activation_distance(mut self, distance: Option<u16>) -> Self {
        if let Some(distance) = distance {
            self.drag_activation_distance = distance;
            self.validate();
        }
        self
    }

    fn validate(&mut self) {
        self.drag_activation_distance = self
            .drag_activation_distance
            .clamp(MIN_ACTIVATION_DISTANCE, MAX_ACTIVATION_DISTANCE);
        self.min_column_width = self
            .min_column_width
            .clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);
        self.card_height = self.card_height.clamp(MIN_CARD_HEIGHT, MAX_CARD_HEIGHT);
    }
}
