//! Raw-mode terminal with double-buffered diff output.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor, queue,
    style::{Attribute, Color, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::render::{Buffer, Rgb, TextStyle, char_width};

/// Owns the terminal while the application runs.
///
/// Only cells that differ from the previous frame are written. The terminal
/// is restored on drop and from a panic hook.
pub struct Terminal {
    stdout: io::Stdout,
    current: Buffer,
    previous: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = restore();
            original_hook(info);
        }));

        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        queue!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
        stdout.flush()?;

        let (width, height) = terminal::size()?;
        log::debug!("Terminal {width}x{height}");
        Ok(Self {
            stdout,
            current: Buffer::new(width, height),
            previous: Buffer::new(width, height),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current.width(), self.current.height())
    }

    /// Resets both buffers to the new size and clears the screen.
    pub fn resize(&mut self, width: u16, height: u16) -> io::Result<()> {
        if (width, height) == self.size() {
            return Ok(());
        }
        self.current = Buffer::new(width, height);
        self.previous = Buffer::new(width, height);
        queue!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        self.stdout.flush()
    }

    /// Paints a frame with `paint` and writes the changed cells.
    pub fn draw(&mut self, paint: impl FnOnce(&mut Buffer)) -> io::Result<()> {
        self.current.clear();
        paint(&mut self.current);
        self.flush_diff()?;
        std::mem::swap(&mut self.current, &mut self.previous);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_width: u16 = 1;
        let mut pen: Option<(Rgb, Rgb, TextStyle)> = None;

        for (x, y, cell) in self.current.diff(&self.previous) {
            if cell.wide_continuation {
                continue;
            }
            if y != last_y || x != last_x.wrapping_add(last_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            let wanted = (cell.fg, cell.bg, cell.style);
            if pen != Some(wanted) {
                set_pen(&mut self.stdout, cell.fg, cell.bg, cell.style)?;
                pen = Some(wanted);
            }

            write!(self.stdout, "{}", cell.char)?;
            last_x = x;
            last_y = y;
            last_width = char_width(cell.char).max(1) as u16;
        }

        queue!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore();
    }
}

/// Every pen change starts from a reset; bold and dim share one off switch.
fn set_pen(out: &mut impl Write, fg: Rgb, bg: Rgb, style: TextStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(color(fg)),
        SetBackgroundColor(color(bg)),
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

fn restore() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    let mut stdout = io::stdout();
    queue!(
        stdout,
        SetAttribute(Attribute::Reset),
        cursor::Show,
        terminal::LeaveAlternateScreen
    )?;
    stdout.flush()
}
