// SPDX-License-Identifier: MIT
//
// glint-term demo — a short animation that shows the diff at work.
//
// A header bar, a bouncing ball, and a progress bar are painted into a fresh
// Grid every frame. The Renderer sends only what changed, and the status
// line reports how many cells and bytes each frame actually cost.
//
// Usage:
//   cargo run -p glint-term --example demo
//
// The screen size comes from COLUMNS and LINES (80×24 when unset). When
// stdout is not a terminal, the frames are rendered into memory and a
// summary of the per-frame statistics is printed instead.

// Demo coordinates are clamped to the grid before casting.
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]

use std::env;
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

use glint_term::ansi;
use glint_term::cell::{Attr, Cell};
use glint_term::color::Color;
use glint_term::grid::Grid;
use glint_term::renderer::{RenderOptions, RenderStats, Renderer};

const FRAMES: u32 = 240;
const FRAME_TIME: Duration = Duration::from_millis(16);

const HEADER_FG: Color = Color::Rgb(0, 0, 0);
const HEADER_BG: Color = Color::Rgb(100, 200, 255);
const BALL: Color = Color::Rgb(255, 200, 0);
const BAR_DONE: Color = Color::Rgb(80, 200, 120);
const BAR_TODO: Color = Color::Rgb(60, 60, 60);
const DIM_TEXT: Color = Color::Rgb(140, 140, 140);

/// Ball position and velocity, bouncing inside the play field.
struct Ball {
    x: i32,
    y: i32,
    dx: i32,
    dy: i32,
}

impl Ball {
    fn step(&mut self, width: u16, height: u16) {
        let (w, h) = (i32::from(width), i32::from(height));
        if !(0..w).contains(&(self.x + self.dx)) {
            self.dx = -self.dx;
        }
        if !(2..h - 2).contains(&(self.y + self.dy)) {
            self.dy = -self.dy;
        }
        self.x = (self.x + self.dx).clamp(0, (w - 1).max(0));
        self.y = (self.y + self.dy).clamp(2, (h - 3).max(2));
    }
}

fn paint(grid: &mut Grid, frame: u32, ball: &Ball, last: RenderStats) {
    let (w, h) = grid.size();
    if w < 20 || h < 6 {
        grid.put_str(0, 0, "window too small", Cell::EMPTY);
        return;
    }

    // ── Header ───────────────────────────────────────────────────────
    let header = Cell::styled(' ', HEADER_FG, HEADER_BG, Attr::empty());
    grid.fill_rect(0, 0, w, 1, header);
    grid.put_str(1, 0, "glint-term", header.with_attrs(Attr::BOLD));
    grid.put_str(12, 0, "differential rendering demo", header);

    // ── Ball ─────────────────────────────────────────────────────────
    grid.set(
        ball.x as u16,
        ball.y as u16,
        Cell::new('●').with_fg(BALL).with_attrs(Attr::BOLD),
    );

    // ── Progress bar ─────────────────────────────────────────────────
    let bar_y = h - 2;
    let done = (u32::from(w) * frame / FRAMES) as u16;
    grid.fill_rect(0, bar_y, done, 1, Cell::EMPTY.with_bg(BAR_DONE));
    grid.fill_rect(done, bar_y, w - done, 1, Cell::EMPTY.with_bg(BAR_TODO));

    // ── Status line ──────────────────────────────────────────────────
    let status = format!(
        "frame {frame:>3}/{FRAMES}  last: {} cells, {} moves, {} bytes",
        last.cells_rendered, last.cursor_moves, last.bytes_written
    );
    grid.put_str(0, h - 1, &status, Cell::EMPTY.with_fg(DIM_TEXT).with_attrs(Attr::ITALIC));
}

/// Screen size from the environment, 80×24 when unset or unparsable.
fn screen_size() -> (u16, u16) {
    let dim = |name, fallback| {
        env::var(name)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|&n: &u16| n > 0)
            .unwrap_or(fallback)
    };
    (dim("COLUMNS", 80), dim("LINES", 24))
}

fn run_terminal() -> io::Result<()> {
    let (cols, rows) = screen_size();
    {
        let mut stdout = io::stdout().lock();
        ansi::enter_alt_screen(&mut stdout)?;
        ansi::cursor_hide(&mut stdout)?;
        stdout.flush()?;
    }

    let options = RenderOptions::default().with_synchronized_output(true);
    let mut renderer = Renderer::with_options(cols, rows, options);
    let mut ball = Ball { x: 0, y: 2, dx: 1, dy: 1 };
    let mut last = RenderStats::default();

    // The clear goes out together with the first frame.
    renderer.clear();
    let result: io::Result<()> = (0..FRAMES).try_for_each(|frame| {
        let mut grid = Grid::new(cols, rows);
        ball.step(cols, rows);
        paint(&mut grid, frame, &ball, last);

        last = renderer.render(&grid);
        renderer.flush()?;
        thread::sleep(FRAME_TIME);
        Ok(())
    });

    let mut stdout = io::stdout().lock();
    ansi::reset(&mut stdout)?;
    ansi::cursor_show(&mut stdout)?;
    ansi::exit_alt_screen(&mut stdout)?;
    stdout.flush()?;
    result
}

fn run_headless() {
    let (cols, rows) = screen_size();
    let mut renderer = Renderer::new(cols, rows);
    let mut ball = Ball { x: 0, y: 2, dx: 1, dy: 1 };
    let mut last = RenderStats::default();
    let mut total_bytes = 0;

    for frame in 0..FRAMES {
        let mut grid = Grid::new(cols, rows);
        ball.step(cols, rows);
        paint(&mut grid, frame, &ball, last);
        last = renderer.render(&grid);
        renderer.flush_to(&mut io::sink()).ok();
        total_bytes += last.bytes_written;
    }

    let snapshot = renderer.retained().clone();
    let full = renderer.render_full(&snapshot);
    println!(
        "{FRAMES} frames, {total_bytes} bytes total, {:.0} bytes/frame (a full redraw costs {} bytes)",
        total_bytes as f64 / f64::from(FRAMES),
        full.bytes_written
    );
}

fn main() -> io::Result<()> {
    if io::stdout().is_terminal() {
        run_terminal()
    } else {
        run_headless();
        Ok(())
    }
}
