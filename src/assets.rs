//! Shapes of the JSON assets written for each model.

use indexmap::IndexMap;
use serde::Serialize;

/// `data/<mod_id>/loot_tables/blocks/<name>.json`: the block drops itself
/// unless destroyed by an explosion.
#[derive(Debug, Serialize)]
pub struct LootTable {
    #[serde(rename = "type")]
    pub table_type: &'static str,
    pub pools: Vec<LootPool>,
}

#[derive(Debug, Serialize)]
pub struct LootPool {
    pub rolls: u32,
    pub entries: Vec<LootEntry>,
    pub conditions: Vec<LootCondition>,
}

#[derive(Debug, Serialize)]
pub struct LootEntry {
    #[serde(rename = "type")]
    pub entry_type: &'static str,
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct LootCondition {
    pub condition: &'static str,
}

impl LootTable {
    pub fn self_drop(mod_id: &str, name: &str) -> Self {
        Self {
            table_type: "minecraft:block",
            pools: vec![LootPool {
                rolls: 1,
                entries: vec![LootEntry {
                    entry_type: "minecraft:item",
                    name: format!("{}:{}", mod_id, name),
                }],
                conditions: vec![LootCondition {
                    condition: "minecraft:survives_explosion",
                }],
            }],
        }
    }
}

/// Rotation around the vertical axis for each horizontal facing.
/// South is the model's own orientation and carries no rotation.
pub const FACINGS: [(&str, u16); 4] = [("north", 180), ("south", 0), ("west", 90), ("east", 270)];

/// `assets/<mod_id>/blockstates/<name>.json`
#[derive(Debug, Serialize)]
pub struct Blockstate {
    pub variants: IndexMap<String, Variant>,
}

#[derive(Debug, Serialize)]
pub struct Variant {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<u16>,
}

impl Blockstate {
    /// One variant per horizontal facing, all sharing the block's model.
    pub fn horizontal_facing(mod_id: &str, name: &str) -> Self {
        let variants = FACINGS
            .iter()
            .map(|&(facing, degrees)| {
                let variant = Variant {
                    model: format!("{}:block/{}", mod_id, name),
                    y: (degrees != 0).then_some(degrees),
                };
                (format!("facing={}", facing), variant)
            })
            .collect();
        Self { variants }
    }
}

/// `assets/<mod_id>/models/item/<name>.json`, reusing the block model of the same name.
#[derive(Debug, Serialize)]
pub struct ItemModel {
    pub parent: String,
}

impl ItemModel {
    pub fn from_block(mod_id: &str, name: &str) -> Self {
        Self {
            parent: format!("{}:block/{}", mod_id, name),
        }
    }
}
