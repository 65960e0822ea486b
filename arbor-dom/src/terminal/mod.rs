//! Raw-mode terminal output with mouse capture.
//!
//! Each [`Terminal::render`] lays the element tree out over the whole screen,
//! paints it into a back buffer and writes only the cells that changed since
//! the previous frame.

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event as CrosstermEvent};
use crossterm::style::{Attribute, SetAttribute};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{execute, queue};

use crate::buffer::Buffer;
use crate::element::Element;
use crate::layout::{layout, LayoutResult, Rect};
use crate::render::render_to_buffer;
use crate::text::char_width;
use crate::types::TextStyle;

pub struct Terminal {
    out: Stdout,
    /// Frame being painted.
    back: Buffer,
    /// Frame currently on screen.
    front: Buffer,
    layout: LayoutResult,
}

impl Terminal {
    /// Enter raw mode and the alternate screen. Restored on drop.
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, Hide, EnableMouseCapture)?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            out,
            back: Buffer::new(width, height),
            front: Buffer::new(width, height),
            layout: LayoutResult::new(),
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.front.width(), self.front.height())
    }

    /// Wait up to `timeout` (forever with `None`) for input, then drain
    /// everything already queued.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<CrosstermEvent>> {
        let ready = match timeout {
            Some(timeout) => event::poll(timeout)?,
            None => true,
        };
        if !ready {
            return Ok(Vec::new());
        }

        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Lay out and draw `root`, returning the layout used for the frame.
    pub fn render(&mut self, root: &Element) -> io::Result<&LayoutResult> {
        let (width, height) = terminal::size()?;
        if (width, height) != self.size() {
            log::debug!("Terminal resized to {width}x{height}");
            self.back = Buffer::new(width, height);
            self.front = Buffer::new(width, height);
            execute!(self.out, Clear(ClearType::All))?;
        }

        self.back.reset();
        self.layout = layout(root, Rect::from_size(width, height));
        render_to_buffer(root, &self.layout, &mut self.back);
        self.flush()?;
        std::mem::swap(&mut self.back, &mut self.front);

        Ok(&self.layout)
    }

    /// Layout of the last frame.
    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    fn flush(&mut self) -> io::Result<()> {
        // Where the cursor ends up after the last write
        let mut cursor: Option<(u16, u16)> = None;
        let mut style = TextStyle::new();
        queue!(self.out, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.back.changes_since(&self.front) {
            if cell.continuation {
                continue;
            }
            if cursor != Some((x, y)) {
                queue!(self.out, MoveTo(x, y))?;
            }
            if cell.style != style {
                write_style(&mut self.out, cell.style)?;
                style = cell.style;
            }
            write!(self.out, "{}", cell.symbol)?;
            let advance = char_width(cell.symbol).max(1) as u16;
            cursor = Some((x.saturating_add(advance), y));
        }

        queue!(self.out, SetAttribute(Attribute::Reset))?;
        self.out.flush()
    }
}

fn write_style(out: &mut impl Write, style: TextStyle) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset))?;
    for (on, attribute) in [
        (style.bold, Attribute::Bold),
        (style.dim, Attribute::Dim),
        (style.underline, Attribute::Underlined),
        (style.reverse, Attribute::Reverse),
    ] {
        if on {
            queue!(out, SetAttribute(attribute))?;
        }
    }
    Ok(())
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.out, DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}
