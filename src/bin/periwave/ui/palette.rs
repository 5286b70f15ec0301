//! Action palette and harmonic list

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use periodic_waveform::CompositeWaveform;

use super::super::app::{Explorer, ExplorerAction};

/// Render the action palette. Disabled actions are dimmed.
pub fn render_palette(frame: &mut Frame, area: Rect, explorer: &Explorer) {
    let block = Block::default().title(" Actions ").borders(Borders::ALL);

    let lines: Vec<Line> = ExplorerAction::ALL
        .iter()
        .map(|&action| {
            let selected = action == explorer.selected();
            let mut style = if explorer.is_disabled(action) {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            if selected {
                style = style.add_modifier(Modifier::REVERSED);
            }
            let marker = if selected { "▶ " } else { "  " };
            Line::from(Span::styled(format!("{marker}{}", action.label()), style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the harmonic table
pub fn render_harmonics(frame: &mut Frame, area: Rect, waveform: &CompositeWaveform) {
    let block = Block::default().title(" Harmonics ").borders(Borders::ALL);

    let header = Line::from(Span::styled(
        format!(" {:>3}  {:>10}  {:>10}  {:>8}", "#", "mag x", "mag y", "phase"),
        Style::default().fg(Color::DarkGray),
    ));
    let lines: Vec<Line> = std::iter::once(header)
        .chain(waveform.iter().enumerate().map(|(index, harmonic)| {
            Line::from(Span::styled(
                format!(
                    " {:>3}  {:>10.4}  {:>10.4}  {:>8.4}",
                    index,
                    harmonic.magnitude_x(),
                    harmonic.magnitude_y(),
                    harmonic.phase()
                ),
                Style::default().fg(Color::Cyan),
            ))
        }))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
