//! Canvas painting for the render loop
//!
//! Purely observational: reads simulation state, never mutates it. The wasm
//! frame pass paints flat rectangles on a 2D context; the palette is a pure
//! function of entity kind so it stays testable off-browser.

use crate::sim::MonsterKind;

/// Playfield background
pub const SKY_COLOR: &str = "#87CEEB";
/// Monster outline, shared by both kinds
pub const MONSTER_BORDER: &str = "#C70039";
pub const HUMAN_COLOR: &str = "#FFD700";
pub const HUMAN_BORDER: &str = "#FFA500";

/// Fill color for a monster, fixed by its kind at spawn
pub fn monster_color(kind: MonsterKind) -> &'static str {
    match kind {
        MonsterKind::Fast => "#FF5733",
        MonsterKind::Slow => "#28A745",
    }
}

/// Paint one frame: background, then every monster and human at its anchor.
#[cfg(target_arch = "wasm32")]
pub fn draw_frame(ctx: &web_sys::CanvasRenderingContext2d, state: &crate::sim::GameState) {
    use crate::consts::*;

    let (w, h) = (f64::from(WIDTH), f64::from(HEIGHT));
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str(SKY_COLOR);
    ctx.fill_rect(0.0, 0.0, w, h);

    let size = f64::from(MONSTER_SIZE);
    for monster in &state.monsters {
        ctx.set_fill_style_str(monster_color(monster.kind));
        ctx.fill_rect(f64::from(monster.pos.x), f64::from(monster.pos.y), size, size);
        ctx.set_stroke_style_str(MONSTER_BORDER);
        ctx.stroke_rect(f64::from(monster.pos.x), f64::from(monster.pos.y), size, size);
    }

    let size = f64::from(HUMAN_SIZE);
    for human in &state.humans {
        ctx.set_fill_style_str(HUMAN_COLOR);
        ctx.fill_rect(f64::from(human.pos.x), f64::from(human.pos.y), size, size);
        ctx.set_stroke_style_str(HUMAN_BORDER);
        ctx.stroke_rect(f64::from(human.pos.x), f64::from(human.pos.y), size, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monster_color_by_kind() {
        assert_eq!(monster_color(MonsterKind::Fast), "#FF5733");
        assert_eq!(monster_color(MonsterKind::Slow), "#28A745");
    }
}
