use std::path::Path;

use macroquad::audio::{load_sound, Sound};
use macroquad::prelude::*;

pub const PLAYER_TEXTURE_PATH: &str = "assets/player.png";
pub const JUMP_SOUND_PATH: &str = "assets/jump.wav";

// 加载玩家精灵；缺失时返回 None，由玩家绘制红色占位
pub async fn load_player_texture() -> Option<Texture2D> {
    if !Path::new(PLAYER_TEXTURE_PATH).exists() {
        log::warn!("{PLAYER_TEXTURE_PATH} not found, drawing placeholder");
        return None;
    }
    match load_texture(PLAYER_TEXTURE_PATH).await {
        Ok(texture) => {
            // 像素风精灵放大时保持清晰
            texture.set_filter(FilterMode::Nearest);
            Some(texture)
        }
        Err(err) => {
            log::warn!("failed to load {PLAYER_TEXTURE_PATH}: {err:?}");
            None
        }
    }
}

// 加载起跳音效；缺失时静音
pub async fn load_jump_sound() -> Option<Sound> {
    if !Path::new(JUMP_SOUND_PATH).exists() {
        log::warn!("{JUMP_SOUND_PATH} not found, jumping silently");
        return None;
    }
    match load_sound(JUMP_SOUND_PATH).await {
        Ok(sound) => Some(sound),
        Err(err) => {
            log::warn!("failed to load {JUMP_SOUND_PATH}: {err:?}");
            None
        }
    }
}

// 加载HUD字体，优先使用项目资源中的字体，其次尝试系统字体
pub async fn load_ui_font() -> Option<Font> {
    let candidates = [
        "assets/NotoSansSC-Regular.ttf",
        "assets/NotoSansSC-Regular.otf",
        "/System/Library/Fonts/PingFang.ttc",
        "/Library/Fonts/Arial Unicode.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc",
        "C:/Windows/Fonts/msyh.ttc",
        "C:/Windows/Fonts/simhei.ttf",
    ];

    for path in candidates.iter().filter(|p| Path::new(p).exists()) {
        match load_ttf_font(path).await {
            Ok(font) => {
                log::debug!("hud font: {path}");
                return Some(font);
            }
            Err(err) => log::debug!("skipping font {path}: {err:?}"),
        }
    }

    log::warn!("no CJK font found, falling back to the default font");
    None
}
