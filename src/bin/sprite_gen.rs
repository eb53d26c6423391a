use image::{ImageBuffer, Rgba, RgbaImage};

// 与游戏内玩家包围盒一致
const WIDTH: u32 = 32;
const HEIGHT: u32 = 42;
const OUT_PATH: &str = "assets/player.png";

#[derive(Clone, Copy)]
struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

const OUTLINE: Color = Color::rgba(24, 20, 37, 255);
const SKIN: Color = Color::rgba(241, 194, 150, 255);
const HAIR: Color = Color::rgba(70, 44, 32, 255);
const SCARF: Color = Color::rgba(214, 60, 60, 255);
const COAT: Color = Color::rgba(52, 101, 164, 255);
const COAT_SHADE: Color = Color::rgba(38, 74, 124, 255);
const BOOTS: Color = Color::rgba(60, 48, 40, 255);
const EYE: Color = Color::rgba(255, 255, 255, 255);

// 半透明像素按 alpha 叠加
fn blend(dst: Rgba<u8>, src: Color) -> Rgba<u8> {
    if src.a == 255 {
        return Rgba([src.r, src.g, src.b, src.a]);
    }
    let sa = src.a as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);
    if out_a <= 0.0 {
        return Rgba([0, 0, 0, 0]);
    }
    let mix = |s: u8, d: u8| ((s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a) as u8;
    Rgba([
        mix(src.r, dst[0]),
        mix(src.g, dst[1]),
        mix(src.b, dst[2]),
        (out_a * 255.0) as u8,
    ])
}

fn set_px(img: &mut RgbaImage, x: i32, y: i32, color: Color) {
    if x < 0 || y < 0 || x as u32 >= img.width() || y as u32 >= img.height() {
        return;
    }
    let out = blend(*img.get_pixel(x as u32, y as u32), color);
    img.put_pixel(x as u32, y as u32, out);
}

// 闭区间矩形
fn fill_rect(img: &mut RgbaImage, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
    for y in y0..=y1 {
        for x in x0..=x1 {
            set_px(img, x, y, color);
        }
    }
}

// 给所有不透明像素外围描一圈边
fn outline(img: &mut RgbaImage, color: Color) {
    let src = img.clone();
    let (w, h) = src.dimensions();
    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if src.get_pixel(x as u32, y as u32)[3] != 0 {
                continue;
            }
            let touches = [(-1, 0), (1, 0), (0, -1), (0, 1)].iter().any(|(dx, dy)| {
                let nx = x + dx;
                let ny = y + dy;
                nx >= 0
                    && ny >= 0
                    && (nx as u32) < w
                    && (ny as u32) < h
                    && src.get_pixel(nx as u32, ny as u32)[3] != 0
            });
            if touches {
                set_px(img, x, y, color);
            }
        }
    }
}

// 朝右站立的角色，游戏内朝左时水平翻转
fn draw_runner(img: &mut RgbaImage) {
    // 头与头发
    fill_rect(img, 10, 2, 22, 13, SKIN);
    fill_rect(img, 9, 1, 22, 4, HAIR);
    fill_rect(img, 9, 5, 11, 9, HAIR);
    fill_rect(img, 18, 7, 19, 9, EYE);
    set_px(img, 19, 8, OUTLINE);

    // 围巾，尾巴飘向身后
    fill_rect(img, 9, 14, 23, 16, SCARF);
    fill_rect(img, 4, 15, 9, 17, SCARF);
    fill_rect(img, 2, 17, 5, 18, SCARF);

    // 躯干与手臂
    fill_rect(img, 10, 17, 22, 29, COAT);
    fill_rect(img, 10, 17, 12, 29, COAT_SHADE);
    fill_rect(img, 23, 18, 25, 26, COAT);
    fill_rect(img, 23, 27, 25, 28, SKIN);

    // 双腿与靴子
    fill_rect(img, 11, 30, 15, 36, COAT_SHADE);
    fill_rect(img, 18, 30, 22, 36, COAT_SHADE);
    fill_rect(img, 10, 37, 15, 40, BOOTS);
    fill_rect(img, 18, 37, 24, 40, BOOTS);

    outline(img, OUTLINE);
}

fn main() -> Result<(), String> {
    let mut img: RgbaImage = ImageBuffer::new(WIDTH, HEIGHT);
    draw_runner(&mut img);

    std::fs::create_dir_all("assets").map_err(|e| format!("create assets dir failed: {e}"))?;
    img.save(OUT_PATH)
        .map_err(|e| format!("save failed: {e}"))?;
    println!("wrote {OUT_PATH} ({WIDTH}x{HEIGHT})");
    Ok(())
}
