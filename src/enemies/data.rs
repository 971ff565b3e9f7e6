//! Species definition loading from RON files.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use super::config::{SpeciesConfig, SpeciesDefinition};
use super::error::SpeciesLoadError;
use crate::core::GameState;

/// Resource holding all loaded species behavior tables.
#[derive(Resource, Default)]
pub struct SpeciesRegistry {
    definitions: HashMap<String, Arc<SpeciesConfig>>,
}

impl SpeciesRegistry {
    /// Get a species table by name.
    pub fn get(&self, species: &str) -> Option<Arc<SpeciesConfig>> {
        self.definitions.get(species).cloned()
    }

    /// Register a table directly (spawning code and tests).
    pub fn insert(&mut self, species: impl Into<String>, config: SpeciesConfig) {
        self.definitions.insert(species.into(), Arc::new(config));
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

/// Parse a single species definition file.
pub fn load_species_file(path: &Path) -> Result<SpeciesDefinition, SpeciesLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| SpeciesLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;
    ron::from_str(&contents).map_err(|e| SpeciesLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Load all species definitions from `assets/data/enemies/`.
///
/// A missing directory or a malformed file degrades with a log line; the
/// simulation starts with whatever parsed.
pub fn load_species_definitions(mut registry: ResMut<SpeciesRegistry>) {
    let enemies_dir = Path::new("assets/data/enemies");

    if !enemies_dir.exists() {
        warn!("Species definitions directory not found: {:?}", enemies_dir);
        return;
    }

    let Ok(entries) = fs::read_dir(enemies_dir) else {
        warn!("Failed to read species definitions directory");
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !path.extension().is_some_and(|ext| ext == "ron") {
            continue;
        }

        let species = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        match load_species_file(&path) {
            Ok(definition) => {
                let config = definition.into_config();
                info!("Loaded species definition: {} ({})", config.name, species);
                registry.insert(species, config);
            }
            Err(e) => {
                error!("Failed to load species definition: {}", e);
            }
        }
    }

    info!("Loaded {} species definitions", registry.len());
}

/// Leave `Loading` once the registry is populated.
pub fn finish_loading(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::InGame);
}
