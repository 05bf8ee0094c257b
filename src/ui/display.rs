//! Display generation for the board and the move list.
//!
//! This module transforms game state into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{Game, to_square};
use crate::models::GameModel;
use crate::ui::view_models::{CellView, MoveRow};

/// The 64 board cells, rank 8 to rank 1, file a to file h
pub fn board_cells(model: &GameModel) -> Vec<CellView> {
    let game = model.game();
    let selection = model.selection();
    let last_move = model.last_move();
    let checked_king = game.checked_king();

    let mut cells = Vec::with_capacity(64);
    for row in 0..8 {
        for col in 0..8 {
            let square = to_square(row, col);
            cells.push(CellView {
                square,
                is_light: (row + col) % 2 == 0,
                piece: game.piece_at(square),
                selected: selection.is_some_and(|s| s.square() == square),
                last_move_from: last_move.is_some_and(|m| m.from == square),
                last_move_to: last_move.is_some_and(|m| m.to == square),
                legal_destination: selection.is_some_and(|s| s.destinations().contains(&square)),
                in_check: checked_king == Some(square),
            });
        }
    }
    cells
}

/// Played moves paired into numbered White/Black rows
pub fn move_rows(game: &Game) -> Vec<MoveRow> {
    let sans: Vec<String> = game.history().map(|m| m.display_san()).collect();
    sans.chunks(2)
        .enumerate()
        .map(|(i, pair)| MoveRow {
            move_num: i + 1,
            white: pair[0].clone(),
            black: pair.get(1).cloned(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{PieceColor, PieceKind};
    use crate::models::Mode;
    use shakmaty::Square;

    fn sq(name: &str) -> Square {
        Square::from_ascii(name.as_bytes()).unwrap()
    }

    fn cell(cells: &[CellView], name: &str) -> CellView {
        let square = sq(name);
        *cells.iter().find(|c| c.square == square).unwrap()
    }

    fn play(model: &mut GameModel, from: &str, to: &str) {
        model.click_square(sq(from));
        model.click_square(sq(to));
    }

    #[test]
    fn test_cells_cover_board_in_order() {
        let model = GameModel::new();
        let cells = board_cells(&model);
        assert_eq!(cells.len(), 64);
        assert_eq!(cells[0].square, sq("a8"));
        assert_eq!(cells[7].square, sq("h8"));
        assert_eq!(cells[63].square, sq("h1"));
        assert!(cells[0].is_light);
        assert!(!cell(&cells, "a1").is_light);
        assert!(cell(&cells, "h1").is_light);
    }

    #[test]
    fn test_start_position_pieces() {
        let cells = board_cells(&GameModel::new());
        let king = cell(&cells, "e1").piece.unwrap();
        assert_eq!(king.kind, PieceKind::King);
        assert_eq!(king.color, PieceColor::White);
        let queen = cell(&cells, "d8").piece.unwrap();
        assert_eq!(queen.kind, PieceKind::Queen);
        assert_eq!(queen.color, PieceColor::Black);
        assert_eq!(cells.iter().filter(|c| c.piece.is_some()).count(), 32);
        assert!(cells.iter().all(|c| !c.selected && !c.legal_destination && !c.in_check));
    }

    #[test]
    fn test_selection_marks_destinations() {
        let mut model = GameModel::new();
        model.start(Mode::Local);
        model.click_square(sq("b1"));

        let cells = board_cells(&model);
        assert!(cell(&cells, "b1").selected);
        let destinations: Vec<_> = cells
            .iter()
            .filter(|c| c.legal_destination)
            .map(|c| c.square)
            .collect();
        assert_eq!(destinations.len(), 2);
        assert!(destinations.contains(&sq("a3")));
        assert!(destinations.contains(&sq("c3")));
    }

    #[test]
    fn test_last_move_and_check_flags() {
        let mut model = GameModel::new();
        model.start(Mode::Local);
        play(&mut model, "e2", "e4");
        play(&mut model, "f7", "f6");
        play(&mut model, "d1", "h5");

        let cells = board_cells(&model);
        assert!(cell(&cells, "d1").last_move_from);
        assert!(cell(&cells, "h5").last_move_to);
        assert!(cell(&cells, "e8").in_check);
        assert_eq!(cells.iter().filter(|c| c.in_check).count(), 1);
    }

    #[test]
    fn test_board_cells_is_idempotent() {
        let mut model = GameModel::new();
        model.start(Mode::Local);
        play(&mut model, "e2", "e4");
        model.click_square(sq("g8"));
        assert_eq!(board_cells(&model), board_cells(&model));
    }

    #[test]
    fn test_move_rows_pairs_moves() {
        let mut model = GameModel::new();
        model.start(Mode::Local);
        assert!(move_rows(model.game()).is_empty());

        play(&mut model, "e2", "e4");
        play(&mut model, "e7", "e5");
        play(&mut model, "g1", "f3");

        let rows = move_rows(model.game());
        assert_eq!(
            rows,
            vec![
                MoveRow {
                    move_num: 1,
                    white: "e4".to_string(),
                    black: Some("e5".to_string()),
                },
                MoveRow {
                    move_num: 2,
                    white: "Nf3".to_string(),
                    black: None,
                },
            ]
        );
    }

    #[test]
    fn test_move_rows_show_check_marks() {
        let mut model = GameModel::new();
        model.start(Mode::Local);
        play(&mut model, "f2", "f3");
        play(&mut model, "e7", "e5");
        play(&mut model, "g2", "g4");
        play(&mut model, "d8", "h4");

        let rows = move_rows(model.game());
        assert_eq!(rows[1].black.as_deref(), Some("Qh4#"));
    }
}
