use std::fs;
use std::path::Path;

use macroquad::prelude::*;

use crate::actors::player::Player;
use crate::error::DataError;
use crate::world::level::{LevelConfig, Platform};

pub mod level;

// 世界状态：当前关卡布局
pub struct World {
    level: LevelConfig,
}

impl Default for World {
    fn default() -> Self {
        Self::new(LevelConfig::default())
    }
}

impl World {
    pub fn new(level: LevelConfig) -> Self {
        Self { level }
    }

    // 从JSON文件加载关卡配置
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let level: LevelConfig = serde_json::from_str(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(level))
    }

    // 加载失败时记录警告并回退到内置关卡
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path) {
            Ok(world) => {
                log::info!(
                    "loaded level '{}' ({} platforms)",
                    world.level.name,
                    world.level.platforms.len()
                );
                world
            }
            Err(err) => {
                log::warn!("{err}, using built-in level");
                Self::default()
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.level.name
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.level.platforms
    }

    pub fn spawn(&self) -> Vec2 {
        self.level.spawn.to_vec2()
    }

    pub fn width(&self) -> f32 {
        self.level.width
    }

    pub fn height(&self) -> f32 {
        self.level.height
    }

    // 玩家掉出关卡底部
    pub fn fell_out<S>(&self, player: &Player<S>) -> bool {
        player.y > self.level.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_io_error() {
        let err = World::load_from_file("data/does-not-exist.json").err().unwrap();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn bad_json_is_parse_error() {
        let path = std::env::temp_dir().join("on-edge-bad-level.json");
        fs::write(&path, "{ not json").unwrap();
        let err = World::load_from_file(&path).err().unwrap();
        assert!(matches!(err, DataError::Parse { .. }));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn load_or_default_falls_back() {
        let world = World::load_or_default("data/does-not-exist.json");
        assert_eq!(world.platforms().len(), LevelConfig::default().platforms.len());
    }

    #[test]
    fn fell_out_only_past_level_height() {
        let world = World::default();
        let mut player: Player<()> = Player::new(0.0, world.height(), None, None);
        assert!(!world.fell_out(&player));
        player.y = world.height() + 0.5;
        assert!(world.fell_out(&player));
    }

    #[test]
    fn bundled_level_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/level.json");
        let world = World::load_from_file(path).unwrap();
        assert!(!world.platforms().is_empty());
        assert!(world.spawn().y < world.height());
    }
}
