use std::fs;
use std::path::Path;

use macroquad::prelude::Conf;
use serde::Deserialize;

use crate::error::DataError;

pub const SCREEN_W: f32 = 960.0;
pub const SCREEN_H: f32 = 540.0;

// 降低内部渲染分辨率，放大时呈现像素风画面
pub const INTERNAL_RENDER_SCALE: f32 = 0.5;

pub const LEVEL_PATH: &str = "data/level.json";
pub const TUNING_PATH: &str = "data/tuning.json";

// 配置窗口标题、尺寸与可变大小选项
pub fn window_conf() -> Conf {
    let resizable = cfg!(any(target_os = "windows", target_os = "macos", target_os = "linux"));
    Conf {
        window_title: "On Edge".to_string(),
        window_width: SCREEN_W as i32,
        window_height: SCREEN_H as i32,
        high_dpi: true,
        window_resizable: resizable,
        ..Default::default()
    }
}

// 手感调参（单位：像素/秒，像素/秒²）
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub gravity: f32,
    pub player_speed: f32,
    // 负值向上
    pub jump_force: f32,
    // 单帧最大步长，防止卡顿后穿透平台
    pub max_frame_time: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: 1800.0,
            player_speed: 260.0,
            jump_force: -720.0,
            max_frame_time: 1.0 / 20.0,
        }
    }
}

impl Tuning {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, DataError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    // 读取失败时使用默认手感
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load_from_file(path) {
            Ok(tuning) => {
                log::debug!("tuning: {tuning:?}");
                tuning
            }
            Err(err) => {
                log::warn!("{err}, using default tuning");
                Self::default()
            }
        }
    }

    // 限制单帧步长
    pub fn frame_delta(&self, frame_time: f32) -> f32 {
        frame_time.min(self.max_frame_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "gravity": 900 }"#).unwrap();
        assert_eq!(tuning.gravity, 900.0);
        assert_eq!(tuning.player_speed, Tuning::default().player_speed);
        assert_eq!(tuning.jump_force, Tuning::default().jump_force);
    }

    #[test]
    fn frame_delta_is_capped() {
        let tuning = Tuning::default();
        assert_eq!(tuning.frame_delta(0.01), 0.01);
        assert_eq!(tuning.frame_delta(1.0), tuning.max_frame_time);
    }

    #[test]
    fn missing_tuning_file_falls_back() {
        assert_eq!(Tuning::load_or_default("data/nope.json"), Tuning::default());
    }

    #[test]
    fn bundled_tuning_file_parses() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/tuning.json");
        let tuning = Tuning::load_from_file(path).unwrap();
        assert!(tuning.jump_force < 0.0);
        assert!(tuning.gravity > 0.0);
    }
}
