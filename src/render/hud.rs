use macroquad::prelude::*;

use crate::config::{SCREEN_H, SCREEN_W};

#[derive(Default)]
pub struct Hud {
    pub font: Option<Font>,
}

impl Hud {
    // 有字体时用字体绘制，否则退回默认字体
    pub fn text(&self, text: &str, x: f32, y: f32, size: u16, color: Color) {
        match self.font.as_ref() {
            Some(font) => {
                draw_text_ex(
                    text,
                    x,
                    y,
                    TextParams {
                        font: Some(font),
                        font_size: size,
                        color,
                        ..Default::default()
                    },
                );
            }
            None => {
                draw_text(text, x, y, size as f32, color);
            }
        }
    }

    pub fn text_right(&self, text: &str, y: f32, size: u16, color: Color) {
        let dims = measure_text(text, self.font.as_ref(), size, 1.0);
        self.text(text, SCREEN_W - dims.width - 16.0, y, size, color);
    }

    // 关卡名、掉落次数与操作提示
    pub fn draw(&self, level_name: &str, falls: u32) {
        self.text(level_name, 16.0, 36.0, 28, WHITE);
        self.text_right(&format!("坠落 {falls}"), 36.0, 24, ORANGE);
        self.text("←/→ 或 A/D 移动  空格/↑ 跳跃", 16.0, SCREEN_H - 20.0, 20, GRAY);
    }
}
