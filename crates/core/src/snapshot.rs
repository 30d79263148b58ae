//! Snapshot module - serializable board views for collaborators
//!
//! The rendering layer consumes the board as a flat, ordered list of tile
//! records; this module builds that view and owns the string mapping for
//! variants and colors at the serialization boundary. Variant-specific fields
//! (`ice_level`, `counter_value`, `is_plus`) appear only when they apply.

use serde::{Deserialize, Serialize};

use crate::board::Board;
use tilepop_types::{Tile, TileColor, TileVariant};

/// One tile as exposed to the rendering collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub id: u32,
    #[serde(with = "variant_str")]
    pub variant: TileVariant,
    #[serde(with = "color_str")]
    pub color: TileColor,
    pub x: i8,
    pub y: i8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ice_level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_value: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_plus: Option<bool>,
}

impl From<&Tile> for TileSnapshot {
    fn from(tile: &Tile) -> Self {
        Self {
            id: tile.id.0,
            variant: tile.variant,
            color: tile.color,
            x: tile.x,
            y: tile.y,
            ice_level: tile.variant.ice_level(),
            counter_value: tile.counter_value,
            is_plus: tile.variant.is_counter().then(|| tile.variant.is_plus()),
        }
    }
}

/// The whole board as exposed to the rendering collaborator, row-major order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub width: u8,
    pub height: u8,
    pub tiles: Vec<TileSnapshot>,
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            tiles: board.tiles().map(|tile| TileSnapshot::from(&tile)).collect(),
        }
    }
}

/// Serialize a [`TileVariant`] as its snake_case name
pub(crate) mod variant_str {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use tilepop_types::TileVariant;

    pub fn serialize<S: Serializer>(v: &TileVariant, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(v.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TileVariant, D::Error> {
        let name = String::deserialize(d)?;
        TileVariant::from_str(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown tile variant `{name}`")))
    }
}

/// Serialize a [`TileColor`] as its lowercase name
pub(crate) mod color_str {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use tilepop_types::TileColor;

    pub fn serialize<S: Serializer>(c: &TileColor, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(c.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<TileColor, D::Error> {
        let name = String::deserialize(d)?;
        TileColor::from_str(&name)
            .ok_or_else(|| de::Error::custom(format!("unknown tile color `{name}`")))
    }
}

/// Optional-color variant of [`color_str`] for spec fields that may be omitted
pub(crate) mod color_str_opt {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use tilepop_types::TileColor;

    pub fn serialize<S: Serializer>(c: &Option<TileColor>, s: S) -> Result<S::Ok, S::Error> {
        match c {
            Some(color) => s.serialize_str(color.as_str()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<TileColor>, D::Error> {
        let name = Option::<String>::deserialize(d)?;
        match name {
            None => Ok(None),
            Some(name) => TileColor::from_str(&name)
                .map(Some)
                .ok_or_else(|| de::Error::custom(format!("unknown tile color `{name}`"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepop_types::TileId;

    #[test]
    fn test_normal_tile_omits_variant_fields() {
        let tile = Tile::normal(TileId(3), TileColor::Blue, 1, 2);
        let json = serde_json::to_value(TileSnapshot::from(&tile)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 3,
                "variant": "normal",
                "color": "blue",
                "x": 1,
                "y": 2,
            })
        );
    }

    #[test]
    fn test_counter_tile_exposes_payload() {
        let tile = Tile::counter(TileId(4), TileVariant::IceCounterPlus, TileColor::Red, 0, 0, 6);
        let json = serde_json::to_value(TileSnapshot::from(&tile)).unwrap();
        assert_eq!(json["variant"], "ice_counter_plus");
        assert_eq!(json["ice_level"], 1);
        assert_eq!(json["counter_value"], 6);
        assert_eq!(json["is_plus"], true);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let tile = Tile::counter(TileId(9), TileVariant::Counter, TileColor::Green, 5, 5, 4);
        let board = Board::from_tiles([tile]);
        let snapshot = BoardSnapshot::from(&board);
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: BoardSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
