//! Status bar - harmonic count, playback state, last message

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::app::Explorer;
use super::super::oscillator::OscillatorStatus;

/// Render the status bar
pub fn render_status(frame: &mut Frame, area: Rect, explorer: &Explorer) {
    let block = Block::default().title(" periwave ").borders(Borders::ALL);

    let (play_symbol, play_state, play_color) = match explorer.oscillator().status() {
        OscillatorStatus::Playing { frequency } => {
            ("▶", format!("Playing {frequency} Hz"), Color::Green)
        }
        OscillatorStatus::Idle => ("⏸", "Idle".to_string(), Color::Yellow),
    };

    let mut spans = vec![
        Span::styled(
            format!(" Harmonics: {}  ", explorer.waveform().len()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("{play_symbol} {play_state}  "),
            Style::default().fg(play_color),
        ),
    ];
    if let Some(rate) = explorer.oscillator().sample_rate() {
        spans.push(Span::styled(
            format!("{:.1}kHz  ", rate as f64 / 1000.0),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if let Some(message) = explorer.status() {
        spans.push(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Magenta),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
