use std::{
    fs, io,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use gridmaze::{difficulty::Difficulty, walls::EmitMode, Algorithm};
use ron::{self, extensions::Extensions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::base_path;

const DEFAULT_SETTINGS: &str = include_str!("./default_settings.ron");

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read/write settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("No preference directory available on this platform")]
    NoConfigDir,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazePreset {
    pub difficulty: Difficulty,
    pub size: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub default_algorithm: Option<Algorithm>,
    #[serde(default)]
    pub default_difficulty: Option<Difficulty>,
    #[serde(default)]
    pub presets: Option<Vec<MazePreset>>,
    #[serde(default)]
    pub player_char: Option<char>,
    #[serde(default)]
    pub frame_delay_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(default)]
    pub emit_mode: Option<EmitMode>,
}

impl Settings {
    pub fn default_path() -> Result<PathBuf, SettingsError> {
        base_path()
            .map(|dir| dir.join("settings.ron"))
            .ok_or(SettingsError::NoConfigDir)
    }

    fn options() -> ron::Options {
        ron::Options::default().with_default_extension(Extensions::IMPLICIT_SOME)
    }

    pub fn from_ron(text: &str, path: &Path) -> Result<Self, SettingsError> {
        Self::options()
            .from_str(text)
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })
    }

    /// Reads the settings file, writing the bundled defaults first if it does not exist.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        match fs::read_to_string(path) {
            Ok(text) => Self::from_ron(&text, path),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!("Creating default settings at {:?}", path);
                Self::reset_config(path)?;
                Self::from_ron(DEFAULT_SETTINGS, path)
            }
            Err(source) => Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    pub fn reset_config(path: &Path) -> Result<(), SettingsError> {
        let io_err = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(path, DEFAULT_SETTINGS).map_err(io_err)
    }

    pub fn get_default_algorithm(&self) -> Algorithm {
        self.default_algorithm.unwrap_or_default()
    }

    pub fn get_default_difficulty(&self) -> Difficulty {
        self.default_difficulty.unwrap_or_default()
    }

    pub fn get_presets(&self) -> Vec<MazePreset> {
        self.presets.clone().unwrap_or_else(|| {
            Difficulty::ALL
                .into_iter()
                .map(|difficulty| MazePreset {
                    difficulty,
                    size: difficulty.default_size(),
                })
                .collect()
        })
    }

    /// Size of the first preset for `difficulty`, falling back to its built-in size.
    pub fn preset_size(&self, difficulty: Difficulty) -> usize {
        self.get_presets()
            .into_iter()
            .find(|preset| preset.difficulty == difficulty)
            .map(|preset| preset.size)
            .unwrap_or_else(|| difficulty.default_size())
    }

    /// Maze side length: an explicit size wins, then the preset of the chosen difficulty,
    /// then the preset of the default difficulty.
    pub fn resolve_size(&self, size: Option<usize>, difficulty: Option<Difficulty>) -> usize {
        size.unwrap_or_else(|| {
            self.preset_size(difficulty.unwrap_or_else(|| self.get_default_difficulty()))
        })
    }

    pub fn get_player_char(&self) -> char {
        self.player_char.unwrap_or('O')
    }

    pub fn get_frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms.unwrap_or(45))
    }

    pub fn get_log_level(&self) -> log::LevelFilter {
        const DEFAULT: log::LevelFilter = log::LevelFilter::Warn;

        match self.log_level.as_deref().map(log::LevelFilter::from_str) {
            None => DEFAULT,
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                log::warn!("Invalid log level in settings, using {}", DEFAULT);
                DEFAULT
            }
        }
    }

    pub fn get_emit_mode(&self) -> EmitMode {
        self.emit_mode.unwrap_or_default()
    }
}
