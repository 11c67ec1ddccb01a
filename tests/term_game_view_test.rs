use tick_tetris::core::{GameState, ScriptedPieces};
use tick_tetris::term::{GameView, Viewport};
use tick_tetris::types::{GameConfig, GameStatus, PieceKind};

fn o_game() -> GameState<ScriptedPieces> {
    GameState::with_source(GameConfig::default(), ScriptedPieces::repeat(PieceKind::O))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // 14 cells * 2 columns + border = 30 wide; 24 rows + border = 26 high.
    let fb = view.render(&snap, Viewport::new(30, 26));

    assert_eq!(fb.get(0, 0).unwrap().ch, '+');
    assert_eq!(fb.get(29, 0).unwrap().ch, '+');
    assert_eq!(fb.get(0, 25).unwrap().ch, '+');
    assert_eq!(fb.get(29, 25).unwrap().ch, '+');
    assert_eq!(fb.get(1, 0).unwrap().ch, '-');
    assert_eq!(fb.get(0, 1).unwrap().ch, '|');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[23][0] = 1;
    snap.active = None;

    let fb = GameView::default().render(&snap, Viewport::new(30, 26));

    let y = 1 + 23;
    assert_eq!(fb.get(1, y).unwrap().ch, '▓');
    assert_eq!(fb.get(2, y).unwrap().ch, '▓');
    assert_eq!(fb.get(3, y).unwrap().ch, ' ');
}

#[test]
fn term_view_renders_active_piece() {
    let snap = o_game().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(30, 26));

    // O at the spawn anchor covers board cells (6..=7, 1..=2).
    for y in [2, 3] {
        for x in 13..17 {
            assert_eq!(fb.get(x, y).unwrap().ch, '█', "({x}, {y})");
        }
    }
    assert_eq!(fb.get(12, 2).unwrap().ch, ' ');
}

#[test]
fn term_view_shows_title_score_and_legend_when_room() {
    let mut snap = o_game().snapshot();
    snap.score = 1200;

    let view = GameView::default();
    let vp = Viewport::new(80, 40);
    let (frame, title) = view.layout(vp);
    assert_eq!(title, Some(3));
    assert_eq!((frame.x, frame.y), (25, 11));

    let fb = view.render(&snap, vp);
    assert!(fb.row_string(3).contains("_____"));
    assert!(fb.row_string(frame.y).contains("Score: 1200"));

    let text: String = (0..fb.height()).map(|y| fb.row_string(y)).collect();
    assert!(text.contains("Controls:"));
    assert!(text.contains("Space - Hard Drop"));
    assert!(!text.contains("PAUSED"));
}

#[test]
fn term_view_paused_legend() {
    let mut snap = o_game().snapshot();
    snap.status = GameStatus::Paused;
    snap.paused = true;

    let fb = GameView::default().render(&snap, Viewport::new(80, 40));
    let text: String = (0..fb.height()).map(|y| fb.row_string(y)).collect();
    assert!(text.contains("*** PAUSED ***"));
    assert!(text.contains("P - Resume"));
    assert!(!text.contains("Space - Hard Drop"));
}

#[test]
fn term_view_game_over_overlay() {
    let mut snap = o_game().snapshot();
    snap.status = GameStatus::GameOver;
    snap.game_over = true;

    let fb = GameView::default().render(&snap, Viewport::new(30, 26));
    let text: String = (0..fb.height()).map(|y| fb.row_string(y)).collect();
    assert!(text.contains("GAME OVER"));
}

#[test]
fn term_view_reuses_framebuffer_across_sizes() {
    let snap = o_game().snapshot();
    let view = GameView::default();
    let mut fb = view.render(&snap, Viewport::new(30, 26));

    view.render_into(&snap, Viewport::new(60, 30), &mut fb);
    assert_eq!((fb.width(), fb.height()), (60, 30));
    let (frame, _) = view.layout(Viewport::new(60, 30));
    assert_eq!(fb.get(frame.x, frame.y).unwrap().ch, '+');
}
