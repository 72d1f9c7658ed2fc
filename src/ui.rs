use std::io::{self, stdout, Write};
use crossterm::{queue, terminal, cursor, style};
use crossterm::event::{Event, KeyCode, KeyEventKind, MouseEventKind, MouseEvent, MouseButton, read, poll, EnableMouseCapture, DisableMouseCapture, KeyModifiers};
use crossterm::style::{Attribute, Stylize};
use crossterm::terminal::ClearType;
use sweeper_field::{Cell, Coord};

use crate::game::{Game, Status};
use crate::options::{IconSet, Theme};

/// Terminal columns per cell, so the board looks roughly square.
const CELL_WIDTH: isize = 2;

struct Board {
    game: Game,
    theme: Theme,
    icons: IconSet,
    w: u16,
    h: u16,
    highlighted: Option<Coord>,
}

impl Board {
    /// Screen position of cell (0, 0). The last line is kept for the status bar.
    fn origin(&self) -> (isize, isize) {
        let field = self.game.field();
        let height = field.rows() as isize;
        let width = field.cols() as isize * CELL_WIDTH;
        ((self.h as isize - 1 - height) / 2, (self.w as isize - width) / 2)
    }

    /// Grid position under a terminal position. May be off the field.
    fn point_at(&self, column: u16, row: u16) -> Coord {
        let (y0, x0) = self.origin();
        (row as isize - y0, (column as isize - x0).div_euclid(CELL_WIDTH))
    }

    fn show_cell(&self, point: Coord, cell: Cell) -> io::Result<()> {
        let theme = &self.theme;
        let bg_closed = if self.highlighted == Some(point) { theme.bg_highlight } else { theme.bg_hidden };
        let (bg, glyph) = if cell.is_opened && cell.has_mine {
            (theme.bg_exploded, self.icons.mine.with(theme.mine))
        } else if cell.is_opened {
            let glyph = match cell.adjacent_mine_count {
                0 => self.icons.empty.stylize(),
                n => char::from(b'0' + n).with(theme.number(n)).attribute(Attribute::Bold),
            };
            (theme.bg_opened, glyph)
        } else if cell.has_flag {
            (bg_closed, self.icons.flag.with(theme.flag))
        } else {
            (bg_closed, self.icons.hidden.with(theme.fg_hidden))
        };
        queue!(stdout(), style::SetBackgroundColor(bg), style::PrintStyledContent(glyph), style::Print(' '))
    }

    fn draw_status(&self) -> io::Result<()> {
        let text = match self.game.status() {
            Status::Playing => format!("mines left: {}", self.game.mines_left()),
            Status::Won => "You win! Press space for a new game.".to_string(),
            Status::Lost => "You lose! Press space to try again.".to_string(),
        };
        queue!(
            stdout(),
            style::ResetColor,
            cursor::MoveTo(0, self.h.saturating_sub(1)),
            terminal::Clear(ClearType::CurrentLine),
            style::PrintStyledContent(text.with(self.theme.status)),
        )
    }

    fn draw_entire_board(&self) -> io::Result<()> {
        queue!(stdout(), style::ResetColor, terminal::Clear(ClearType::All))?;
        let (y0, x0) = self.origin();
        for (point, cell) in self.game.field().cells() {
            let (y, x) = (y0 + point.0, x0 + point.1 * CELL_WIDTH);
            // whatever doesn't fit in the terminal is simply not drawn
            if y < 0 || x < 0 || y >= self.h as isize - 1 || x + CELL_WIDTH > self.w as isize {
                continue;
            }
            queue!(stdout(), cursor::MoveTo(x as u16, y as u16))?;
            self.show_cell(point, cell)?;
        }
        self.draw_status()
    }

    fn click(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.game.click(self.point_at(column, row));
        self.draw_entire_board()
    }

    fn flag(&mut self, column: u16, row: u16) -> io::Result<()> {
        self.game.flag(self.point_at(column, row));
        self.draw_entire_board()
    }

    fn hover(&mut self, column: u16, row: u16) -> io::Result<()> {
        let point = self.point_at(column, row);
        let highlighted = self.game.field().contains(point).then_some(point);
        if highlighted != self.highlighted {
            self.highlighted = highlighted;
            self.draw_entire_board()?;
        }
        Ok(())
    }

    fn restart(&mut self) -> io::Result<()> {
        self.game.restart();
        self.draw_entire_board()
    }
}

fn run(board: &mut Board) -> io::Result<()> {
    board.draw_entire_board()?;

    loop {
        stdout().flush()?;
        let mut ev;
        // skip stale motion events, only the latest position matters
        loop {
            ev = read()?;
            if matches!(ev, Event::Mouse(MouseEvent { kind: MouseEventKind::Moved, .. })) && poll(std::time::Duration::from_secs(0))? {
                continue;
            }
            break;
        }
        match ev {
            Event::Key(event) if event.kind == KeyEventKind::Press => match event.code {
                KeyCode::Esc => break,
                KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char(' ') => board.restart()?,
                _ => {},
            },
            Event::Resize(w, h) => {
                board.w = w;
                board.h = h;
                board.draw_entire_board()?;
            },
            Event::Mouse(event) => match event.kind {
                MouseEventKind::Down(MouseButton::Left) => board.click(event.column, event.row)?,
                MouseEventKind::Down(MouseButton::Right) => board.flag(event.column, event.row)?,
                MouseEventKind::Moved => board.hover(event.column, event.row)?,
                _ => {},
            },
            _ => {},
        }
    }
    Ok(())
}

pub fn game_loop(game: Game, theme: Theme, icons: IconSet) -> io::Result<()> {
    terminal::enable_raw_mode()?;
    queue!(stdout(), terminal::EnterAlternateScreen, terminal::DisableLineWrap, cursor::Hide, EnableMouseCapture)?;

    let (w, h) = terminal::size()?;
    let mut board = Board { game, theme, icons, w, h, highlighted: None };
    let result = run(&mut board);

    queue!(stdout(), style::ResetColor, cursor::Show, terminal::EnableLineWrap, terminal::LeaveAlternateScreen, DisableMouseCapture)?;
    stdout().flush()?;
    terminal::disable_raw_mode()?;
    result
}
