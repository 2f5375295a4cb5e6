//! Assistant overlay: transcript above a single input line.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::assistant::Speaker;

/// Render the assistant as a centered modal.
pub fn render_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let overlay = super::centered(area, 70, 20);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .title(" Assistant ")
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let lines: Vec<Line> = app
        .assistant
        .transcript()
        .iter()
        .map(|(speaker, text)| {
            let style = match speaker {
                Speaker::User => Style::default().add_modifier(Modifier::BOLD),
                Speaker::Assistant => Style::default().fg(app.theme.highlight),
            };
            Line::from(vec![
                Span::styled(format!("{}: ", speaker.label()), style),
                Span::raw(text.as_str()),
            ])
        })
        .collect();

    // Keep the newest lines visible
    let visible = chunks[0].height as usize;
    let skip = lines.len().saturating_sub(visible);
    let transcript = Paragraph::new(lines.into_iter().skip(skip).collect::<Vec<_>>())
        .wrap(Wrap { trim: true });
    frame.render_widget(transcript, chunks[0]);

    let input = Line::from(vec![
        Span::styled("> ", Style::default().fg(app.theme.highlight)),
        Span::raw(app.chat_input.as_str()),
        Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
    ]);
    frame.render_widget(Paragraph::new(input), chunks[1]);
}
