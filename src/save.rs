use crate::character::CharacterBuild;
use crate::error::BuildError;

use chrono::{DateTime, Local};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs::{File, create_dir_all, read_dir, remove_file, write};
use std::path::{Path, PathBuf};

pub const SAVE_DIR: &str = "./data/save";

// One group of players working through the wizard together: the shared group
// selections plus every character in progress.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Party {
    pub save_name: String,
    pub group_concept: String,
    pub group_talent: String,
    pub characters: Vec<CharacterBuild>,
    #[serde(default)]
    pub saved_at: Option<DateTime<Local>>,
}

impl Party {
    pub fn new(save_name: impl Into<String>) -> Self {
        Party {
            save_name: save_name.into(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SaveManager {
    pub available_saves: Vec<String>,
    pub current_save: Option<Party>,
    save_dir: PathBuf,
}

impl Default for SaveManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SaveManager {
    pub fn new() -> Self {
        Self::with_dir(SAVE_DIR)
    }

    // Alternate save location, used by the tests.
    pub fn with_dir(dir: impl Into<PathBuf>) -> Self {
        let save_dir = dir.into();
        Self {
            available_saves: Self::scan_save_files(&save_dir),
            current_save: None,
            save_dir,
        }
    }

    pub fn scan_save_files(save_dir: &Path) -> Vec<String> {
        if !save_dir.exists() {
            return Vec::new();
        }

        read_dir(save_dir)
            .map(|entries| {
                entries
                    .filter_map(|entry| {
                        let entry = entry.ok()?;
                        let path = entry.path();
                        if path.is_file() && path.extension()? == "json" {
                            path.file_stem()?.to_str().map(String::from)
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn load_from_file(mut self, save_name: &str) -> Result<Self, BuildError> {
        let path = self.save_dir.join(format!("{save_name}.json"));
        let file =
            File::open(&path).map_err(|_| BuildError::SaveNotFound(save_name.to_string()))?;

        self.current_save = Some(serde_json::from_reader(file)?);
        debug!("loaded party '{save_name}' from {}", path.display());
        Ok(self)
    }

    pub fn save(mut self) -> Result<Self, BuildError> {
        create_dir_all(&self.save_dir)?;
        let mut party = self
            .current_save
            .take()
            .ok_or_else(|| BuildError::Incomplete("there is no party to save".into()))?;
        party.saved_at = Some(Local::now());

        let save_path = self.save_dir.join(format!("{}.json", party.save_name));
        let serialized = serde_json::to_string_pretty(&party)?;
        write(&save_path, serialized)?;
        debug!("saved party '{}' to {}", party.save_name, save_path.display());

        self.current_save = Some(party);
        self.available_saves = Self::scan_save_files(&self.save_dir);
        Ok(self)
    }

    pub fn delete_save(mut self, save_name: &str) -> Result<Self, BuildError> {
        let path = self.save_dir.join(format!("{save_name}.json"));
        remove_file(path)?;
        self.available_saves = Self::scan_save_files(&self.save_dir);
        Ok(self)
    }
}
