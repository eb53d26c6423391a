use macroquad::prelude::*;

use crate::actors::player::Player;
use crate::render::surface::MacroquadSurface;
use crate::world::World;

pub mod hud;
pub mod surface;

const SKY: Color = Color::new(0.07, 0.08, 0.14, 1.0);
const ROCK: Color = Color::new(0.28, 0.25, 0.30, 1.0);
const GRASS: Color = Color::new(0.35, 0.72, 0.38, 1.0);

// 绘制背景与所有平台
pub fn draw_level(world: &World) {
    clear_background(SKY);
    for platform in world.platforms() {
        draw_rectangle(platform.x, platform.y, platform.width, platform.height, ROCK);
        draw_rectangle(platform.x, platform.y, platform.width, 3.0, GRASS);
    }
}

// 绘制玩家
pub fn draw_player(surface: &mut MacroquadSurface, player: &Player<Texture2D>) {
    player.draw(surface);
}

// 镜头横向跟随玩家中心，并限制在关卡范围内
pub fn camera_x(focus_x: f32, level_width: f32, view_w: f32) -> f32 {
    let max_x = (level_width - view_w).max(0.0);
    (focus_x - view_w * 0.5).clamp(0.0, max_x)
}

// 世界层相机，渲染到低分辨率目标
pub fn world_camera(left: f32, view: Vec2, target: &RenderTarget) -> Camera2D {
    let mut camera = Camera2D::from_display_rect(Rect::new(left, 0.0, view.x, view.y));
    camera.render_target = Some(target.clone());
    camera
}
