//! Canvas drawing. Reads the game state, never writes it.

use web_sys::CanvasRenderingContext2d;

use crate::assets::{ThemeImage, ThemeImages};
use crate::entities::Rect;
use crate::state::GameState;
use crate::theme::{AssetRole, Theme};

/// HUD text, top-left.
pub fn score_lines(state: &GameState) -> [String; 2] {
    [
        format!("Score: {}", state.score()),
        format!("High Score: {}", state.high_score()),
    ]
}

/// End screen text below the "Game Over!" title.
pub fn game_over_lines(state: &GameState) -> [String; 4] {
    [
        format!("Your Score: {}", state.score()),
        format!("High Score: {}", state.high_score()),
        "Press 'R' to Restart".to_string(),
        "Press 'T' to Change Theme".to_string(),
    ]
}

/// Flat fill used while an image is loading or after it failed.
fn placeholder_color(role: AssetRole) -> &'static str {
    match role {
        AssetRole::Player => "#3a86ff",
        AssetRole::Obstacle => "#8d5524",
        AssetRole::Background => "#cfe8ff",
    }
}

fn draw_sprite(ctx: &CanvasRenderingContext2d, theme: Theme, image: &ThemeImage, r: Rect) {
    image.report_if_broken(theme);
    let drawn = image.is_ready()
        && ctx
            .draw_image_with_html_image_element_and_dw_and_dh(&image.element, r.x, r.y, r.width, r.height)
            .is_ok();
    if !drawn {
        ctx.set_fill_style_str(placeholder_color(image.role()));
        ctx.fill_rect(r.x, r.y, r.width, r.height);
    }
}

/// One frame of the running game.
pub fn render_frame(ctx: &CanvasRenderingContext2d, state: &GameState, images: &ThemeImages) {
    let config = state.config();
    let (w, h) = (config.canvas_width, config.canvas_height);
    ctx.clear_rect(0.0, 0.0, w, h);

    // Two copies side by side so the wrap is seamless.
    let bx = state.background_x();
    let bg = images.get(AssetRole::Background);
    draw_sprite(ctx, images.theme, bg, Rect::new(bx, 0.0, w, h));
    draw_sprite(ctx, images.theme, bg, Rect::new(bx + w, 0.0, w, h));

    draw_sprite(ctx, images.theme, &images.player, state.player().bounds());
    for obstacle in state.obstacles() {
        draw_sprite(ctx, images.theme, &images.obstacle, obstacle.bounds());
    }

    ctx.set_fill_style_str("#000");
    ctx.set_font("20px Arial");
    ctx.set_text_align("left");
    let [score, high] = score_lines(state);
    ctx.fill_text(&score, 20.0, 30.0).ok();
    ctx.fill_text(&high, 20.0, 60.0).ok();
}

/// Dimmed end screen drawn over a cleared canvas.
pub fn render_game_over(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let config = state.config();
    let (w, h) = (config.canvas_width, config.canvas_height);
    ctx.clear_rect(0.0, 0.0, w, h);
    ctx.set_fill_style_str("rgba(0, 0, 0, 0.7)");
    ctx.fill_rect(0.0, 0.0, w, h);

    ctx.set_fill_style_str("#FFFFFF");
    ctx.set_text_align("center");
    ctx.set_font("40px Arial");
    ctx.fill_text("Game Over!", w / 2.0, h / 2.0 - 40.0).ok();

    ctx.set_font("20px Arial");
    for (i, line) in game_over_lines(state).iter().enumerate() {
        ctx.fill_text(line, w / 2.0, h / 2.0 + 30.0 * i as f64).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Obstacle;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn hud_text_tracks_scores() {
        let mut state = GameState::default();
        state.start(Theme::Space);
        assert_eq!(score_lines(&state), ["Score: 0".to_string(), "High Score: 0".to_string()]);

        let mut passed = Obstacle::spawn(state.config());
        passed.x = -39.0;
        state.push_obstacle(passed);
        state.advance_obstacles();
        state.end_game();
        let lines = game_over_lines(&state);
        assert_eq!(lines[0], "Your Score: 1");
        assert_eq!(lines[1], "High Score: 1");
        assert!(lines[2].contains("'R'"));

        // The HUD follows a fresh run while keeping the best score.
        state.restart();
        state.tick(&mut StdRng::seed_from_u64(0));
        assert_eq!(score_lines(&state)[1], "High Score: 1");
    }

    #[test]
    fn placeholders_are_distinct_per_role() {
        let colors = [
            placeholder_color(AssetRole::Player),
            placeholder_color(AssetRole::Obstacle),
            placeholder_color(AssetRole::Background),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}
