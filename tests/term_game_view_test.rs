use tui_connect_four::core::{new_game, GameState};
use tui_connect_four::term::{AnchorY, FrameBuffer, GameView, Viewport};

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

fn play(columns: &[u32]) -> GameState {
    let mut state = new_game();
    for &c in columns {
        state.apply_move(c).unwrap();
    }
    state
}

#[test]
fn term_view_renders_border_corners() {
    let state = new_game();
    let view = GameView::default();

    // 4 cells * 2 chars + border => 10 wide, 4 rows + border => 6 tall,
    // plus the column numbers above and 4 status rows below => 11 rows.
    let fb = view.render(&state, "", Viewport::new(10, 11));

    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(9, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(9, 6).unwrap().ch, '┘');
    assert_eq!(fb.row_text(0), "  1 2 3 4 ");
}

#[test]
fn term_view_draws_stones_under_their_column_numbers() {
    let state = play(&[1, 4]);
    let view = GameView::default();
    let fb = view.render(&state, "", Viewport::new(10, 11));

    // Bottom board row is terminal row 5; column n's glyph sits at x = 2n.
    assert_eq!(fb.get(2, 0).unwrap().ch, '1');
    assert_eq!(fb.get(2, 5).unwrap().ch, 'o');
    assert_eq!(fb.get(8, 0).unwrap().ch, '4');
    assert_eq!(fb.get(8, 5).unwrap().ch, 'x');
    assert_eq!(fb.get(4, 5).unwrap().ch, '·');
}

#[test]
fn term_view_shows_player_to_move_and_info() {
    let state = play(&[2]);
    let view = GameView::default();
    let fb = view.render(&state, "column 2 already full", Viewport::new(60, 20));

    let all = screen_text(&fb);
    assert!(all.contains("player 2 (x) to move"));
    assert!(all.contains("column 2 already full"));
    assert!(all.contains("1-4: drop a stone"));
}

#[test]
fn term_view_highlights_winning_line() {
    let state = play(&[1, 2, 1, 2, 1, 2, 1]);
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&state, "", Viewport::new(10, 11));

    for y in 2..=5 {
        let cell = fb.get(2, y).unwrap();
        assert_eq!(cell.ch, 'o');
        assert!(cell.style.bold);
    }
    // Player2's stones are not part of the line.
    assert!(!fb.get(4, 5).unwrap().style.bold);

    let wide = view.render(&state, "", Viewport::new(60, 11));
    let all = screen_text(&wide);
    assert!(all.contains("player 1 (o) wins!"));
    assert!(all.contains("r: play again"));
}

#[test]
fn term_view_centers_board_by_default_on_large_viewports() {
    let state = new_game();
    let view = GameView::default();

    // Content is 10x11: start_x = (30 - 10) / 2 = 10, start_y = (21 - 11) / 2 = 5.
    let fb = view.render(&state, "", Viewport::new(30, 21));
    assert_eq!(fb.get(10, 6).unwrap().ch, '┌');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let state = play(&[1, 2, 3]);
    let view = GameView::default();
    let fb = view.render(&state, "some long message", Viewport::new(3, 2));
    assert_eq!(fb.width(), 3);
    assert_eq!(fb.height(), 2);
}
