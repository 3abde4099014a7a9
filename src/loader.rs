//! Seed-file loading: reads the location, creature, and item record lists
//! from JSON files and hands validated records to world construction.
//! Malformed data is fatal at startup, never mid-session.

use log::info;
use std::fs;
use std::path::Path;

use crate::game::{CreatureRecord, GameError, ItemRecord, LocationRecord, WorldSeed};

/// Load location records from a JSON file.
pub fn load_locations<P: AsRef<Path>>(path: P) -> Result<Vec<LocationRecord>, GameError> {
    load_records(path.as_ref())
}

/// Load creature records from a JSON file.
pub fn load_creatures<P: AsRef<Path>>(path: P) -> Result<Vec<CreatureRecord>, GameError> {
    load_records(path.as_ref())
}

/// Load item records from a JSON file.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<ItemRecord>, GameError> {
    load_records(path.as_ref())
}

fn load_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, GameError> {
    let contents = fs::read_to_string(path).map_err(|e| GameError::InvalidInputFormat {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let records: Vec<T> =
        serde_json::from_str(&contents).map_err(|e| GameError::InvalidInputFormat {
            file: path.display().to_string(),
            reason: e.to_string(),
        })?;
    Ok(records)
}

/// Load a full world seed from the three record files.
pub fn load_seed<P: AsRef<Path>>(
    locations: P,
    creatures: P,
    items: P,
) -> Result<WorldSeed, GameError> {
    let seed = WorldSeed {
        locations: load_locations(&locations)?,
        creatures: load_creatures(&creatures)?,
        items: load_items(&items)?,
    };
    info!(
        "seed loaded: {} locations, {} creatures, {} items",
        seed.locations.len(),
        seed.creatures.len(),
        seed.items.len()
    );
    Ok(seed)
}

/// Write a seed out as the three JSON record files, creating parent
/// directories as needed. Used by `pymon init` to materialize the built-in
/// world for editing.
pub fn write_seed(
    seed: &WorldSeed,
    locations: &Path,
    creatures: &Path,
    items: &Path,
) -> Result<(), GameError> {
    write_records(locations, &seed.locations)?;
    write_records(creatures, &seed.creatures)?;
    write_records(items, &seed.items)?;
    Ok(())
}

fn write_records<T: serde::Serialize>(path: &Path, records: &[T]) -> Result<(), GameError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(records).map_err(|e| {
        GameError::InvalidInputFormat {
            file: path.display().to_string(),
            reason: e.to_string(),
        }
    })?;
    fs::write(path, contents)?;
    Ok(())
}
