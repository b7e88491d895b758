use crate::Board;
use std::io::Write;

/// How a board is rendered as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Printer {
    /// One line per `x`, `1` for alive and `0` for dead cells.
    Plain,
    /// Like `Plain`, followed on each line by two spaces and the same line of the next buffer.
    SideBySide,
}

impl Printer {
    pub fn render(self, board: &Board) -> String {
        match self {
            Self::Plain => render(board),
            Self::SideBySide => render_with_next(board),
        }
    }

    pub fn print(self, board: &Board, out: &mut impl Write) -> std::io::Result<()> {
        out.write_all(self.render(board).as_bytes())
    }
}

fn push_cell(buf: &mut String, state: bool) {
    buf.push(if state { '1' } else { '0' });
}

pub fn render(board: &Board) -> String {
    let (w, h) = board.size();
    let mut buf = String::with_capacity(w * (h + 1));
    for x in 0..w {
        for y in 0..h {
            push_cell(&mut buf, board.get(x, y));
        }
        buf.push('\n');
    }
    buf
}

pub fn render_with_next(board: &Board) -> String {
    let (w, h) = board.size();
    let mut buf = String::with_capacity(w * (2 * h + 3));
    for x in 0..w {
        for y in 0..h {
            push_cell(&mut buf, board.get(x, y));
        }
        buf.push_str("  ");
        for y in 0..h {
            push_cell(&mut buf, board.next_cell(x, y));
        }
        buf.push('\n');
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_rows_follow_first_axis() {
        let mut board = Board::blank(2, 3);
        board.seed(&[(0, 1), (1, 2)]);
        assert_eq!(render(&board), "010\n001\n");
    }

    #[test]
    fn test_render_with_next() {
        let mut board = Board::blank(2, 3);
        board.seed(&[(0, 0)]);
        board.swap();
        board.seed(&[(1, 1)]);
        assert_eq!(render_with_next(&board), "000  100\n010  000\n");
    }

    #[test]
    fn test_print_to_writer() {
        let mut board = Board::blank(1, 4);
        board.set(0, 3, true);
        let mut out = vec![];
        Printer::Plain.print(&board, &mut out).unwrap();
        assert_eq!(out, b"0001\n");
        assert_eq!(Printer::SideBySide.render(&board), "0001  0000\n");
    }
}
