use macroquad::prelude::{Color, Texture2D, RED};

use crate::physics::{Aabb, Axis};
use crate::render::surface::RenderSurface;
use crate::world::level::Platform;

pub const PLAYER_W: f32 = 32.0;
pub const PLAYER_H: f32 = 42.0;

// 按键标识（与浏览器 KeyboardEvent.code 命名一致）
pub const KEY_LEFT: &str = "ArrowLeft";
pub const KEY_RIGHT: &str = "ArrowRight";
pub const KEY_JUMP: &str = "Space";
pub const KEY_UP: &str = "ArrowUp";

// 贴边判定容差，避免离散步长导致落地抖动
const EDGE_TOLERANCE: f32 = 1.0;

// 精灵未加载时的占位颜色
const FALLBACK_COLOR: Color = RED;

// 输入能力：只关心某个键当前是否按下
pub trait InputSource {
    fn is_pressed(&self, key: &str) -> bool;
}

// 起跳音效触发器，返回值被忽略
pub type JumpSound = Box<dyn FnMut()>;

// 单步模拟所需的调参与关卡尺寸
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepParams {
    pub gravity: f32,
    pub player_speed: f32,
    pub jump_force: f32,
    pub level_width: f32,
    // 底部掉落由调用方处理，这里不使用
    pub level_height: f32,
}

// 玩家实体：位置、速度、朝向与共享精灵句柄
pub struct Player<S = Texture2D> {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub on_ground: bool,
    pub facing_right: bool,
    width: f32,
    height: f32,
    start_x: f32,
    start_y: f32,
    sprite: Option<S>,
    jump_sound: Option<JumpSound>,
}

impl<S> Player<S> {
    // 创建玩家，记录出生点
    pub fn new(x: f32, y: f32, sprite: Option<S>, jump_sound: Option<JumpSound>) -> Self {
        Self {
            x,
            y,
            vx: 0.0,
            vy: 0.0,
            on_ground: false,
            facing_right: true,
            width: PLAYER_W,
            height: PLAYER_H,
            start_x: x,
            start_y: y,
            sprite,
            jump_sound,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    // 构造时的出生点，不会被自动套用
    pub fn start(&self) -> (f32, f32) {
        (self.start_x, self.start_y)
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }

    // 绘制玩家；朝左时在翻转坐标系中绘制，世界包围盒不变
    pub fn draw<R>(&self, surface: &mut R)
    where
        R: RenderSurface<Sprite = S>,
    {
        let Some(sprite) = self.sprite.as_ref() else {
            surface.fill_rect(self.x, self.y, self.width, self.height, FALLBACK_COLOR);
            return;
        };

        if self.facing_right {
            surface.draw_sprite(sprite, self.x, self.y, self.width, self.height);
        } else {
            surface.push_flip_x();
            surface.draw_sprite(sprite, -self.x - self.width, self.y, self.width, self.height);
            surface.pop_transform();
        }
    }

    // 推进一步：水平输入、重力积分、逐平台碰撞、起跳、水平边界
    pub fn update<I>(&mut self, dt: f32, input: &I, platforms: &[Platform], params: &StepParams)
    where
        I: InputSource + ?Sized,
    {
        // 同时按下时左优先
        if input.is_pressed(KEY_LEFT) {
            self.vx = -params.player_speed;
            self.facing_right = false;
        } else if input.is_pressed(KEY_RIGHT) {
            self.vx = params.player_speed;
            self.facing_right = true;
        } else {
            self.vx = 0.0;
        }
        self.x += self.vx * dt;

        self.vy += params.gravity * dt;
        self.y += self.vy * dt;
        self.on_ground = false;

        // 按顺序逐个修正，后面的平台看到的是已修正的位置
        for platform in platforms {
            self.resolve_platform(platform);
        }

        if (input.is_pressed(KEY_JUMP) || input.is_pressed(KEY_UP)) && self.on_ground {
            self.vy = params.jump_force;
            self.on_ground = false;
            if let Some(play) = self.jump_sound.as_mut() {
                play();
            }
        }

        self.clamp_to_level(params.level_width);
    }

    // 回到指定位置并清空速度与落地状态
    pub fn reset_state(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.on_ground = false;
    }

    fn resolve_platform(&mut self, platform: &Platform) {
        let solid = platform.bounds();
        let Some(overlap) = self.bounds().overlap(&solid) else {
            return;
        };

        // 方向或容差条件不满足时本帧不修正
        match overlap.resolve_axis() {
            Axis::Vertical => {
                if self.vy > 0.0 && self.y + self.height - overlap.y <= solid.y + EDGE_TOLERANCE {
                    self.y = solid.y - self.height;
                    self.vy = 0.0;
                    self.on_ground = true;
                } else if self.vy < 0.0 && self.y + overlap.y >= solid.bottom() - EDGE_TOLERANCE {
                    self.y = solid.bottom();
                    self.vy = 0.0;
                }
            }
            Axis::Horizontal => {
                if self.vx > 0.0 && self.x + self.width - overlap.x <= solid.x + EDGE_TOLERANCE {
                    self.x = solid.x - self.width;
                    self.vx = 0.0;
                } else if self.vx < 0.0 && self.x + overlap.x >= solid.right() - EDGE_TOLERANCE {
                    self.x = solid.right();
                    self.vx = 0.0;
                }
            }
        }
    }

    fn clamp_to_level(&mut self, level_width: f32) {
        if self.x < 0.0 {
            self.x = 0.0;
            self.vx = 0.0;
        }
        if self.x + self.width > level_width {
            self.x = level_width - self.width;
            self.vx = 0.0;
        }
    }
}
