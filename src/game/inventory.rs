//! Item pickup and use. Effects are dispatched through an explicit
//! name→effect table so new items are data, not code branches.

use log::debug;

use super::errors::GameError;
use super::types::{Item, Pymon, ENERGY_MAX};
use super::world::WorldGraph;

/// What a named item does when used. Looked up case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemEffect {
    /// Restore one energy charge when below the cap (apple).
    RestoreEnergy,
    /// Arm battle immunity for the next battle (magic potion).
    BattleImmunity,
    /// Reveal a location's contents without moving (binocular).
    Inspect,
}

/// The effect table. Names the only items with behavior; anything else found
/// in the inventory is inert.
const EFFECTS: &[(&str, ItemEffect)] = &[
    ("apple", ItemEffect::RestoreEnergy),
    ("magic potion", ItemEffect::BattleImmunity),
    ("binocular", ItemEffect::Inspect),
];

/// Look an item's effect up by case-insensitive name.
pub fn effect_for(name: &str) -> Option<ItemEffect> {
    let wanted = name.trim();
    EFFECTS
        .iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(wanted))
        .map(|(_, effect)| *effect)
}

/// Outcome of trying to pick an item up. Misses are reported, not raised:
/// the player keeps playing either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The item moved from the location into the inventory.
    Taken { name: String },
    /// Present here, but nailed down.
    NotPickable { name: String },
    /// Nothing by that name lies here.
    NotHere { name: String },
}

/// Outcome of using an inventory item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UseOutcome {
    /// An apple was eaten; energy rose to the given level.
    EnergyRestored { energy: u8 },
    /// Energy already at the cap; the apple stays in the inventory.
    EnergyAlreadyFull,
    /// A magic potion armed immunity for the next battle.
    ImmunityArmed,
    /// A binocular is raised; the caller must supply a viewing target
    /// before the item is consumed.
    InspectionReady,
    /// The item exists but has no defined effect. It stays where it is.
    Inert { name: String },
}

/// Try to move a named item from the Pymon's current location into its
/// inventory. Case-insensitive; an atomic transfer when it succeeds.
pub fn pick_item(world: &mut WorldGraph, pymon: &mut Pymon, name: &str) -> PickOutcome {
    let Some(location) = world.location(&pymon.location) else {
        return PickOutcome::NotHere {
            name: name.trim().to_string(),
        };
    };
    let Some(found) = location.items.iter().find(|item| item.matches(name)) else {
        return PickOutcome::NotHere {
            name: name.trim().to_string(),
        };
    };
    if !found.pickable {
        return PickOutcome::NotPickable {
            name: found.name.clone(),
        };
    }

    // The lookup above guarantees the take succeeds.
    let Some(item) = world.take_item(&pymon.location, name) else {
        return PickOutcome::NotHere {
            name: name.trim().to_string(),
        };
    };
    let taken = item.name.clone();
    debug!("{} picked up '{}'", pymon.nickname, taken);
    pymon.inventory.push(item);
    PickOutcome::Taken { name: taken }
}

/// Use an inventory item by name. Unknown names in the inventory are inert
/// and deliberately *not* consumed; only the table above removes items.
/// Inspect-effect items are consumed later, once a viewing target arrives.
pub fn use_item(pymon: &mut Pymon, name: &str) -> Result<UseOutcome, GameError> {
    let index = pymon
        .find_item(name)
        .ok_or_else(|| GameError::InvalidSelection(format!("'{name}' is not in the inventory")))?;
    let item_name = pymon.inventory[index].name.clone();

    match effect_for(&item_name) {
        Some(ItemEffect::RestoreEnergy) => {
            if pymon.energy < ENERGY_MAX {
                pymon.energy += 1;
                pymon.inventory.remove(index);
                debug!("{} ate an apple, energy now {}", pymon.nickname, pymon.energy);
                Ok(UseOutcome::EnergyRestored {
                    energy: pymon.energy,
                })
            } else {
                Ok(UseOutcome::EnergyAlreadyFull)
            }
        }
        Some(ItemEffect::BattleImmunity) => {
            pymon.immunity = true;
            pymon.inventory.remove(index);
            debug!("{} armed battle immunity", pymon.nickname);
            Ok(UseOutcome::ImmunityArmed)
        }
        Some(ItemEffect::Inspect) => Ok(UseOutcome::InspectionReady),
        None => Ok(UseOutcome::Inert { name: item_name }),
    }
}

/// Consume the first inspect-effect item in the inventory. Called once the
/// pending inspection has actually been performed.
pub fn consume_inspect_item(pymon: &mut Pymon) -> Option<Item> {
    let index = pymon
        .inventory
        .iter()
        .position(|item| effect_for(&item.name) == Some(ItemEffect::Inspect))?;
    Some(pymon.inventory.remove(index))
}
