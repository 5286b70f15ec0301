//! TUI module for periwave
//!
//! Four graphics of the current waveform, the action palette, and the open
//! task form or harmonic list.

mod form;
mod graphics;
mod palette;
mod status;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use super::app::Explorer;

use form::render_form;
use graphics::{render_empty, render_path, render_paths};
use palette::{render_harmonics, render_palette};
use status::render_status;

/// Render the explorer
pub fn render(frame: &mut Frame, explorer: &Explorer) {
    let area = frame.area();

    // Main layout: status, graphics, controls, help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Status bar
            Constraint::Min(12),    // Graphics grid
            Constraint::Length(10), // Palette + form
            Constraint::Length(1),  // Help bar
        ])
        .split(area);

    render_status(frame, chunks[0], explorer);

    if explorer.waveform().is_empty() {
        render_empty(frame, chunks[1]);
    } else {
        render_graphics(frame, chunks[1], explorer);
    }

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(20)])
        .split(chunks[2]);
    render_palette(frame, controls[0], explorer);
    match explorer.task() {
        Some(task) => render_form(frame, controls[1], task),
        None => render_harmonics(frame, controls[1], explorer.waveform()),
    }

    // Help bar
    let help = match explorer.task() {
        Some(_) => " [Tab] Next field  [Enter] Submit  [Esc] Cancel",
        None => " [↑/↓] Select  [Enter] Run  [Q] Quit",
    };
    let help = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[3]);
}

/// Structure and timeloop on top, timelines below
fn render_graphics(frame: &mut Frame, area: Rect, explorer: &Explorer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let graphics = explorer.graphics();
    let canvas = explorer.canvas();
    render_paths(frame, top[0], " Structure ", &graphics.structure, canvas, Color::Cyan);
    render_path(frame, top[1], " Timeloop ", &graphics.timeloop, canvas, Color::Magenta);
    render_path(
        frame,
        bottom[0],
        " Cosine timeline ",
        &graphics.cosine_timeline,
        canvas,
        Color::Yellow,
    );
    render_path(
        frame,
        bottom[1],
        " Sine timeline ",
        &graphics.sine_timeline,
        canvas,
        Color::Green,
    );
}
