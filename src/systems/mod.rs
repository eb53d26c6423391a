use macroquad::audio::{play_sound_once, Sound};
use macroquad::prelude::*;

use crate::actors::player::{InputSource, JumpSound, Player, StepParams};
use crate::config::Tuning;
use crate::world::World;

// 键盘输入：按键标识映射到 macroquad 键位
#[derive(Clone, Copy, Debug, Default)]
pub struct Keyboard;

// 方向键同时接受 WASD 别名，未知标识视为未按下
pub fn key_codes(key: &str) -> &'static [KeyCode] {
    match key {
        "ArrowLeft" => &[KeyCode::Left, KeyCode::A],
        "ArrowRight" => &[KeyCode::Right, KeyCode::D],
        "ArrowUp" => &[KeyCode::Up, KeyCode::W],
        "Space" => &[KeyCode::Space],
        "KeyA" => &[KeyCode::A],
        "KeyD" => &[KeyCode::D],
        "KeyW" => &[KeyCode::W],
        _ => &[],
    }
}

impl InputSource for Keyboard {
    fn is_pressed(&self, key: &str) -> bool {
        key_codes(key).iter().any(|&code| is_key_down(code))
    }
}

// 包装起跳音效；没有音效时返回 None
pub fn jump_sound(sound: Option<Sound>) -> Option<JumpSound> {
    sound.map(|sound| Box::new(move || play_sound_once(&sound)) as JumpSound)
}

// 推进玩家一帧；掉出关卡底部时回到出生点并返回 true
pub fn step_player<S, I>(
    player: &mut Player<S>,
    world: &World,
    tuning: &Tuning,
    input: &I,
    frame_time: f32,
) -> bool
where
    I: InputSource + ?Sized,
{
    let params = StepParams {
        gravity: tuning.gravity,
        player_speed: tuning.player_speed,
        jump_force: tuning.jump_force,
        level_width: world.width(),
        level_height: world.height(),
    };
    player.update(tuning.frame_delta(frame_time), input, world.platforms(), &params);

    if !world.fell_out(player) {
        return false;
    }
    let spawn = world.spawn();
    log::info!(
        "player fell at x={:.1}, respawning at ({:.1}, {:.1})",
        player.x,
        spawn.x,
        spawn.y
    );
    player.reset_state(spawn.x, spawn.y);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::level::{LevelConfig, Platform, Vec2Def};

    struct Held(&'static [&'static str]);

    impl InputSource for Held {
        fn is_pressed(&self, key: &str) -> bool {
            self.0.contains(&key)
        }
    }

    fn pit_world() -> World {
        World::new(LevelConfig {
            name: "pit".to_string(),
            width: 400.0,
            height: 200.0,
            spawn: Vec2Def::new(20.0, 40.0),
            platforms: vec![Platform::new(0.0, 100.0, 100.0, 20.0)],
        })
    }

    #[test]
    fn arrows_and_wasd_share_actions() {
        assert_eq!(key_codes("ArrowLeft"), &[KeyCode::Left, KeyCode::A]);
        assert_eq!(key_codes("ArrowRight"), &[KeyCode::Right, KeyCode::D]);
        assert_eq!(key_codes("ArrowUp"), &[KeyCode::Up, KeyCode::W]);
        assert_eq!(key_codes("Space"), &[KeyCode::Space]);
        assert!(key_codes("Escape").is_empty());
    }

    #[test]
    fn missing_sound_gives_no_trigger() {
        assert!(jump_sound(None).is_none());
    }

    #[test]
    fn step_settles_on_ground() {
        let world = pit_world();
        let tuning = Tuning::default();
        let mut player: Player<()> = Player::new(20.0, 40.0, None, None);
        for _ in 0..120 {
            assert!(!step_player(&mut player, &world, &tuning, &Held(&[]), 1.0 / 60.0));
        }
        assert!(player.on_ground);
        assert_eq!(player.y, 100.0 - player.height());
    }

    #[test]
    fn falling_out_respawns_at_level_spawn() {
        let world = pit_world();
        let tuning = Tuning::default();
        let mut player: Player<()> = Player::new(300.0, 190.0, None, None);
        player.vy = 600.0;
        player.facing_right = false;
        assert!(step_player(&mut player, &world, &tuning, &Held(&[]), 1.0 / 60.0));
        assert_eq!((player.x, player.y, player.vx, player.vy), (20.0, 40.0, 0.0, 0.0));
        assert!(!player.facing_right);
    }

    #[test]
    fn long_frames_are_capped() {
        let world = pit_world();
        let tuning = Tuning::default();
        let mut player: Player<()> = Player::new(200.0, 0.0, None, None);
        step_player(&mut player, &world, &tuning, &Held(&["ArrowRight"]), 2.0);
        assert_eq!(player.x, 200.0 + tuning.player_speed * tuning.max_frame_time);
    }
}
