use macroquad::prelude::*;

// 绘制表面：填充矩形、绘制精灵、水平翻转变换的压栈与恢复
pub trait RenderSurface {
    type Sprite;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color);
    fn draw_sprite(&mut self, sprite: &Self::Sprite, x: f32, y: f32, w: f32, h: f32);
    fn push_flip_x(&mut self);
    fn pop_transform(&mut self);
}

// macroquad 实现：翻转状态用栈记录，绘制时把翻转坐标映射回世界坐标
#[derive(Debug, Default)]
pub struct MacroquadSurface {
    flips: Vec<bool>,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mirrored(&self) -> bool {
        self.flips.last().copied().unwrap_or(false)
    }

    // 翻转空间中 [x, x + w] 对应世界空间 [-x - w, -x]
    pub fn world_x(&self, x: f32, w: f32) -> f32 {
        if self.mirrored() {
            -x - w
        } else {
            x
        }
    }
}

impl RenderSurface for MacroquadSurface {
    type Sprite = Texture2D;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Color) {
        draw_rectangle(self.world_x(x, w), y, w, h, color);
    }

    fn draw_sprite(&mut self, sprite: &Texture2D, x: f32, y: f32, w: f32, h: f32) {
        draw_texture_ex(
            sprite,
            self.world_x(x, w),
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(w, h)),
                flip_x: self.mirrored(),
                ..Default::default()
            },
        );
    }

    fn push_flip_x(&mut self) {
        let next = !self.mirrored();
        self.flips.push(next);
    }

    fn pop_transform(&mut self) {
        self.flips.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flip_maps_back_to_world_bounds() {
        let mut surface = MacroquadSurface::new();
        assert_eq!(surface.world_x(10.0, 32.0), 10.0);
        surface.push_flip_x();
        assert!(surface.mirrored());
        assert_eq!(surface.world_x(-10.0 - 32.0, 32.0), 10.0);
        surface.pop_transform();
        assert!(!surface.mirrored());
    }

    #[test]
    fn nested_flips_cancel() {
        let mut surface = MacroquadSurface::new();
        surface.push_flip_x();
        surface.push_flip_x();
        assert!(!surface.mirrored());
        assert_eq!(surface.world_x(5.0, 8.0), 5.0);
        surface.pop_transform();
        assert!(surface.mirrored());
    }

    #[test]
    fn unbalanced_pop_is_harmless() {
        let mut surface = MacroquadSurface::new();
        surface.pop_transform();
        assert!(!surface.mirrored());
    }
}
