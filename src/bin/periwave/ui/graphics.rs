//! Canvas widgets for sampled waveform paths

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Line,
    widgets::{
        canvas::{Canvas, Line as CanvasLine},
        Block, Borders, Paragraph,
    },
    Frame,
};

use periodic_waveform::{Path, Region};

/// Render one path
pub fn render_path(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    path: &Path,
    canvas: Region,
    color: Color,
) {
    render_paths(frame, area, title, std::slice::from_ref(path), canvas, color);
}

/// Placeholder shown instead of the graphics when there are no harmonics
pub fn render_empty(frame: &mut Frame, area: Rect) {
    let block = Block::default().title(" Graphics ").borders(Borders::ALL);
    let notice = Paragraph::new(Line::styled(
        " empty waveform, push a harmonic to begin",
        Style::default().fg(Color::DarkGray),
    ))
    .block(block);
    frame.render_widget(notice, area);
}

/// Render paths in canvas coordinates. Canvas y grows downward, terminal
/// canvas y grows upward, so y is flipped.
pub fn render_paths(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    paths: &[Path],
    canvas: Region,
    color: Color,
) {
    let block = Block::default().title(title.to_string()).borders(Borders::ALL);

    let left = canvas.anchor.x;
    let bottom = canvas.anchor.y;
    let right = left + canvas.width;
    let top = bottom + canvas.height;

    let widget = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .x_bounds([left, right])
        .y_bounds([bottom, top])
        .paint(move |ctx| {
            for path in paths {
                for (from, to) in path.segments() {
                    ctx.draw(&CanvasLine::new(
                        from.x,
                        top + bottom - from.y,
                        to.x,
                        top + bottom - to.y,
                        color,
                    ));
                }
            }
        });

    frame.render_widget(widget, area);
}
