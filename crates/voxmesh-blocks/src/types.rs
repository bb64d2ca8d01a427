use serde::{Deserialize, Serialize};

/// Compact voxel value. `Air` is the only empty type; every other variant is solid
/// and owns one rectangle of the texture atlas.
#[repr(u8)]
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    #[default]
    Air = 0,
    DarkDirt = 1,
    Dirt = 2,
    Grass = 3,
    Gold = 4,
}

impl BlockType {
    /// Number of codes, air included.
    pub const COUNT: usize = 5;

    /// Solid types in code order.
    pub const SOLID: [BlockType; 4] = [
        BlockType::DarkDirt,
        BlockType::Dirt,
        BlockType::Grass,
        BlockType::Gold,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[inline]
    pub const fn from_code(code: u8) -> Option<BlockType> {
        match code {
            0 => Some(BlockType::Air),
            1 => Some(BlockType::DarkDirt),
            2 => Some(BlockType::Dirt),
            3 => Some(BlockType::Grass),
            4 => Some(BlockType::Gold),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_solid(self) -> bool {
        !matches!(self, BlockType::Air)
    }

    pub const fn name(self) -> &'static str {
        match self {
            BlockType::Air => "air",
            BlockType::DarkDirt => "dark_dirt",
            BlockType::Dirt => "dirt",
            BlockType::Grass => "grass",
            BlockType::Gold => "gold",
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_roundtrip_and_air_is_only_empty() {
        for code in 0..BlockType::COUNT as u8 {
            let b = BlockType::from_code(code).unwrap();
            assert_eq!(b.code(), code);
            assert_eq!(b.is_solid(), code != 0);
        }
        assert_eq!(BlockType::from_code(BlockType::COUNT as u8), None);
        assert!(BlockType::SOLID.iter().all(|b| b.is_solid()));
        assert_eq!(BlockType::default(), BlockType::Air);
    }

    #[test]
    fn serde_names_are_snake_case() {
        #[derive(Deserialize)]
        struct W {
            b: BlockType,
        }
        let w: W = toml::from_str("b = \"dark_dirt\"").unwrap();
        assert_eq!(w.b, BlockType::DarkDirt);
        assert_eq!(w.b.to_string(), "dark_dirt");
    }
}
