use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use minimax_connect4::{Board, Cell};

/// Draws the board at the cursor with styled terminal output
pub fn display(board: &Board) -> Result<()> {
    let mut stdout = stdout();

    let cols: String = (1..=board.columns())
        .map(|x| (x % 10).to_string())
        .collect();
    stdout.queue(PrintStyledContent(style(cols + "\n")))?;
    for _ in 0..board.rows() {
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;

    // the cursor now sits on the line of the bottom row
    let (origin_x, origin_y) = crossterm::cursor::position()?;

    for (row, cells) in board.game_board().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            let (pos_x, pos_y) = (
                origin_x + column as u16,
                origin_y.saturating_sub((board.rows() - 1 - row) as u16),
            );

            stdout
                .queue(MoveTo(pos_x, pos_y))?
                .queue(PrintStyledContent(
                    style("O")
                        .attribute(Attribute::Bold)
                        .on(Color::DarkBlue)
                        .with(match cell {
                            Cell::PlayerOne => Color::Red,
                            Cell::PlayerTwo => Color::Yellow,
                            Cell::Empty => Color::DarkBlue,
                        }),
                ))?;
        }
    }
    stdout
        .queue(MoveTo(origin_x + board.columns() as u16, origin_y))?
        .queue(PrintStyledContent(style("\n")))?;
    stdout.flush()?;
    Ok(())
}
