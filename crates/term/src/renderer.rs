//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize) is a full redraw. After that
//! only runs of changed cells are written.

use std::io::{self, Write};

use anyhow::{Context, Result};

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    /// Whether key event types (press/repeat/release) were requested.
    enhanced_keys: bool,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            enhanced_keys: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("enabling raw mode")?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;

        // Lets the input mapper tell auto-repeat apart from fresh presses.
        if terminal::supports_keyboard_enhancement().unwrap_or(false) {
            self.stdout.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
            self.enhanced_keys = true;
        }
        tracing::debug!(enhanced_keys = self.enhanced_keys, "entered alternate screen");

        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        if self.enhanced_keys {
            self.stdout.queue(PopKeyboardEnhancementFlags)?;
            self.enhanced_keys = false;
        }
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode().context("disabling raw mode")?;
        tracing::debug!("left alternate screen");
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one.
    pub fn draw(&mut self, fb: FrameBuffer) -> Result<()> {
        match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                self.diff_redraw(&fb, &prev)?;
            }
            _ => self.full_redraw(&fb)?,
        }
        self.last = Some(fb);
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;

        let mut current_style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                let cell = fb.get(x, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.finish_frame()
    }

    fn diff_redraw(&mut self, next: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut current_style: Option<CellStyle> = None;

        for (x, y, len) in changed_runs(prev, next) {
            self.stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    self.apply_style(cell.style)?;
                    current_style = Some(cell.style);
                }
                self.stdout.queue(Print(cell.ch))?;
            }
        }

        self.finish_frame()
    }

    fn finish_frame(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_style(&mut self, style: CellStyle) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two
/// equally-sized frames, top to bottom, left to right.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let w = next.width();

    for y in 0..next.height() {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }

    runs
}
