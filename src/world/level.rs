use serde::Deserialize;

use crate::physics::Aabb;

// 关卡配置（数据驱动入口）
#[derive(Clone, Debug, Deserialize)]
pub struct LevelConfig {
    pub name: String,
    pub width: f32,
    pub height: f32,
    pub spawn: Vec2Def,
    pub platforms: Vec<Platform>,
}

impl Default for LevelConfig {
    // 默认关卡：缺失配置文件时的兜底，带两处断崖
    fn default() -> Self {
        Self {
            name: "边缘".to_string(),
            width: 2400.0,
            height: 540.0,
            spawn: Vec2Def::new(64.0, 380.0),
            platforms: vec![
                Platform::new(0.0, 460.0, 520.0, 80.0),
                Platform::new(300.0, 360.0, 120.0, 20.0),
                Platform::new(600.0, 460.0, 360.0, 80.0),
                Platform::new(720.0, 300.0, 96.0, 20.0),
                Platform::new(880.0, 380.0, 40.0, 80.0),
                Platform::new(1040.0, 400.0, 160.0, 20.0),
                Platform::new(1280.0, 460.0, 640.0, 80.0),
                Platform::new(1400.0, 340.0, 128.0, 20.0),
                Platform::new(1600.0, 260.0, 128.0, 20.0),
                Platform::new(1760.0, 380.0, 48.0, 80.0),
                Platform::new(2000.0, 460.0, 400.0, 80.0),
            ],
        }
    }
}

// 序列化用的二维坐标
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct Vec2Def {
    pub x: f32,
    pub y: f32,
}

impl Vec2Def {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    // 转换为 macroquad::Vec2
    pub fn to_vec2(self) -> macroquad::prelude::Vec2 {
        macroquad::prelude::vec2(self.x, self.y)
    }
}

// 静态平台：左上角坐标与尺寸，运行期间不变
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct Platform {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}
