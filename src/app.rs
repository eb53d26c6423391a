use macroquad::prelude::*;

use crate::actors::player::Player;
use crate::assets::{load_jump_sound, load_player_texture, load_ui_font};
use crate::config::{Tuning, INTERNAL_RENDER_SCALE, LEVEL_PATH, SCREEN_H, SCREEN_W, TUNING_PATH};
use crate::render::hud::Hud;
use crate::render::surface::MacroquadSurface;
use crate::render::{camera_x, draw_level, draw_player, world_camera};
use crate::systems::{jump_sound, step_player, Keyboard};
use crate::world::World;

// 游戏主循环：加载关卡与资源，推进玩家并渲染
pub async fn run() {
    let hud = Hud {
        font: load_ui_font().await,
    };

    // 数据驱动的关卡与手感
    let world = World::load_or_default(LEVEL_PATH);
    let tuning = Tuning::load_or_default(TUNING_PATH);

    let spawn = world.spawn();
    let mut player = Player::new(
        spawn.x,
        spawn.y,
        load_player_texture().await,
        jump_sound(load_jump_sound().await),
    );
    let keyboard = Keyboard;
    let mut surface = MacroquadSurface::new();
    let mut falls: u32 = 0;

    // 低分辨率渲染目标，用于像素风画面
    let rt_w = (SCREEN_W * INTERNAL_RENDER_SCALE).max(1.0) as u32;
    let rt_h = (SCREEN_H * INTERNAL_RENDER_SCALE).max(1.0) as u32;
    let rt_w_f = rt_w as f32;
    let rt_h_f = rt_h as f32;
    let render_target = render_target(rt_w, rt_h);
    render_target.texture.set_filter(FilterMode::Nearest);
    let view = vec2(SCREEN_W, SCREEN_H);

    loop {
        if step_player(&mut player, &world, &tuning, &keyboard, get_frame_time()) {
            falls += 1;
        }

        let (scale, offset_x, offset_y) = compute_viewport();

        // 世界层跟随玩家
        let left = camera_x(player.x + player.width() * 0.5, world.width(), SCREEN_W);
        set_camera(&world_camera(left, view, &render_target));
        draw_level(&world);
        draw_player(&mut surface, &player);

        // HUD 层固定在屏幕上
        set_camera(&world_camera(0.0, view, &render_target));
        hud.draw(world.name(), falls);

        // 回到默认相机并放大显示
        set_default_camera();
        clear_background(BLACK);
        draw_texture_ex(
            &render_target.texture,
            offset_x,
            offset_y,
            WHITE,
            DrawTextureParams {
                // RenderTarget 在纹理坐标系中是倒置的，这里做一次垂直翻转
                source: Some(Rect::new(0.0, rt_h_f, rt_w_f, -rt_h_f)),
                dest_size: Some(vec2(SCREEN_W * scale, SCREEN_H * scale)),
                ..Default::default()
            },
        );

        next_frame().await;
    }
}

// 根据窗口尺寸计算缩放比例与居中偏移
fn compute_viewport() -> (f32, f32, f32) {
    let sw = screen_width();
    let sh = screen_height();
    let scale = (sw / SCREEN_W).min(sh / SCREEN_H).max(0.1);
    let offset_x = (sw - SCREEN_W * scale) * 0.5;
    let offset_y = (sh - SCREEN_H * scale) * 0.5;
    (scale, offset_x, offset_y)
}
