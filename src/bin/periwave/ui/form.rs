//! Task form widget

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::super::form::TaskForm;

/// Render the open form with a cursor on the focused field and each
/// field's validation message beside it
pub fn render_form(frame: &mut Frame, area: Rect, form: &TaskForm) {
    let block = Block::default()
        .title(format!(" {} ", form.kind().title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let lines: Vec<Line> = form
        .fields()
        .iter()
        .enumerate()
        .map(|(index, field)| {
            let focused = index == form.focus();
            let label_style = if focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let mut spans = vec![
                Span::styled(format!(" {:>12}: ", field.label), label_style),
                Span::raw(field.input.clone()),
            ];
            if focused {
                spans.push(Span::styled("_", Style::default().fg(Color::Yellow)));
            }
            if let Some(error) = field.error {
                spans.push(Span::styled(
                    format!("  {error}"),
                    Style::default().fg(Color::Red),
                ));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
