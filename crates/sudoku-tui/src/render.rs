use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use sudoku_engine::Position;

// Grid design:
// +===+===+===+===+===+===+===+===+===+
// | 5 | 3 | . ║ . | 7 | . ║ . | . | . |
// +---+---+---+---+---+---+---+---+---+
// Each cell is 3 chars wide; thick borders at 3x3 boundaries.
const GRID_WIDTH: u16 = 37;
const GRID_HEIGHT: u16 = 19;

const THICK_SEPARATOR: &str = "+===+===+===+===+===+===+===+===+===+";
const THIN_SEPARATOR: &str = "+---+---+---+---+---+---+---+---+---+";

const BOX_BORDER: Color = Color::White;
const CELL_BORDER: Color = Color::DarkGrey;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, _) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let start_x = if term_width > GRID_WIDTH {
        (term_width - GRID_WIDTH) / 2
    } else {
        0
    };
    let start_y: u16 = 1;

    render_grid(stdout, app, start_x, start_y)?;
    render_message(stdout, app, start_x, start_y + GRID_HEIGHT + 1)?;
    render_controls(stdout, start_x, start_y + GRID_HEIGHT + 3)?;

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    // Top border (thick)
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(BOX_BORDER),
        Print(THICK_SEPARATOR)
    )?;

    for row in 0..9 {
        let cell_y = y + 1 + row as u16 * 2;
        execute!(stdout, MoveTo(x, cell_y))?;

        for col in 0..9 {
            // Left border - thick at 3x3 boundaries
            if col % 3 == 0 {
                execute!(stdout, SetForegroundColor(BOX_BORDER), Print("\u{2551}"))?;
            } else {
                execute!(stdout, SetForegroundColor(CELL_BORDER), Print("\u{2502}"))?;
            }

            render_cell(stdout, app, Position::new(row, col))?;
        }
        // Right border (thick)
        execute!(stdout, SetForegroundColor(BOX_BORDER), Print("\u{2551}"))?;

        // Horizontal separator - thick below each box band
        let sep_y = cell_y + 1;
        execute!(stdout, MoveTo(x, sep_y))?;
        if (row + 1) % 3 == 0 {
            execute!(stdout, SetForegroundColor(BOX_BORDER), Print(THICK_SEPARATOR))?;
        } else {
            execute!(stdout, SetForegroundColor(CELL_BORDER), Print(THIN_SEPARATOR))?;
        }
    }

    Ok(())
}

fn render_cell(stdout: &mut io::Stdout, app: &App, pos: Position) -> io::Result<()> {
    let value = app.board.get(pos);

    let fg = if app.is_given(pos) {
        Color::Cyan
    } else if value.is_some() {
        Color::White
    } else {
        Color::DarkGrey
    };
    let bg = if app.cursor == pos {
        Color::DarkBlue
    } else {
        Color::Reset
    };

    let text = match value {
        Some(d) => format!(" {} ", d),
        None => " . ".to_string(),
    };

    execute!(
        stdout,
        SetForegroundColor(fg),
        SetBackgroundColor(bg),
        Print(text),
        SetBackgroundColor(Color::Reset)
    )?;
    Ok(())
}

fn render_message(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    if let Some(msg) = &app.message {
        let color = if msg.is_error {
            Color::Red
        } else {
            Color::Green
        };
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(color),
            Print(&msg.text)
        )?;
    }
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, x: u16, y: u16) -> io::Result<()> {
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(Color::DarkGrey),
        Print("arrows move | 1-9 place | 0 erase | s solve"),
        MoveTo(x, y + 1),
        Print("r random | c clear | q quit")
    )?;
    Ok(())
}
