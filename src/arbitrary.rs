use quickcheck::{Arbitrary, Gen};

use crate::game::{Board, Cell, Player, DEFAULT_COLS, DEFAULT_ROWS};

impl Arbitrary for Cell {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Cell::Empty, Cell::Red, Cell::Yellow]).unwrap()
    }
}

/// Any mix of cells, floating pieces included.
impl Arbitrary for Board {
    fn arbitrary(g: &mut Gen) -> Self {
        let data = (0..DEFAULT_ROWS)
            .map(|_| (0..DEFAULT_COLS).map(|_| Cell::arbitrary(g)).collect())
            .collect();
        Board::from_rows(DEFAULT_ROWS, DEFAULT_COLS, data)
    }
}

/// A board reached by legal play: Red first, strictly alternating, gravity
/// respected. The game may have been won along the way.
#[derive(Clone, Debug)]
pub struct PlayedBoard {
    pub board: Board,
    pub plies: usize,
}

impl Arbitrary for PlayedBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut board = Board::default();
        let target = usize::arbitrary(g) % (DEFAULT_ROWS * DEFAULT_COLS + 1);
        let mut player = Player::Red;
        let mut plies = 0;
        while plies < target && !board.is_full() {
            let col = usize::arbitrary(g) % DEFAULT_COLS;
            if board.drop_piece(col, player.to_cell()).is_ok() {
                player = player.other();
                plies += 1;
            }
        }
        PlayedBoard { board, plies }
    }
}
