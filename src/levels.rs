/// Player level names and colors, indexed by level number
///
/// Unknown levels fall back to level 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelInfo {
    pub level: u32,
    pub name: &'static str,
    pub color: &'static str,
}

const LEVELS: [LevelInfo; 10] = [
    LevelInfo { level: 1, name: "Rookie", color: "#9CA3AF" },
    LevelInfo { level: 2, name: "Amateur", color: "#10B981" },
    LevelInfo { level: 3, name: "Rising Star", color: "#3B82F6" },
    LevelInfo { level: 4, name: "Professional", color: "#8B5CF6" },
    LevelInfo { level: 5, name: "Elite", color: "#F59E0B" },
    LevelInfo { level: 6, name: "Master", color: "#EF4444" },
    LevelInfo { level: 7, name: "Legend", color: "#EC4899" },
    LevelInfo { level: 8, name: "Champion", color: "#14B8A6" },
    LevelInfo { level: 9, name: "Icon", color: "#F97316" },
    LevelInfo { level: 10, name: "Immortal", color: "#EAB308" },
];

pub const MAX_LEVEL: u32 = LEVELS.len() as u32;

pub fn level_info(level: u32) -> LevelInfo {
    LEVELS
        .iter()
        .find(|info| info.level == level)
        .copied()
        .unwrap_or(LEVELS[0])
}

pub fn level_name(level: u32) -> &'static str {
    level_info(level).name
}

pub fn level_color(level: u32) -> &'static str {
    level_info(level).color
}
