//! Common UI components shared across views.
//!
//! This module contains the header bar, tab bar, status bar, and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use glucowatch_types::UNIT;

use crate::app::{App, View};
use crate::data::duration::format_elapsed;
use crate::data::trend;

/// Render the header bar with the latest reading.
///
/// Displays: band indicator, value with trend arrow, band label, reading time.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref update) = app.latest else {
        let line = Line::from(vec![
            Span::styled(" GLUCOWATCH ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("│ Waiting for first reading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let band = update.band();
    let band_style = app.theme.band_style(band);
    let arrow = trend(&update.window).map(|t| t.arrow()).unwrap_or(" ");

    let mut spans = vec![
        Span::styled(" ● ", band_style),
        Span::styled("GLUCOWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            format!("{:.1} {} {}", update.reading.value, UNIT, arrow),
            band_style.add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(format!("{} {}", band.symbol(), band.label()), band_style),
        Span::raw(" │ "),
        Span::raw(update.reading.time_label()),
    ];

    if app.paused {
        spans.push(Span::styled(" │ PAUSED", Style::default().fg(app.theme.elevated)));
    }
    if app.muted {
        spans.push(Span::styled(" │ muted", app.theme.dim));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the tab bar showing available views.
///
/// Highlights the currently active view.
pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = vec![Line::from(" 1:Live "), Line::from(" 2:History ")];

    let selected = match app.current_view {
        View::Live => 0,
        View::History => 1,
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// Render the status bar at the bottom.
///
/// Shows: source, time since last reading, available controls.
/// Also displays temporary status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let controls = if app.show_chat {
        "Type a question | Enter:ask Esc:close"
    } else {
        "r:read p:pause e:export c:chat m:mute ?:help q:quit"
    };

    let status = if let Some(ref err) = app.last_error {
        format!(" {} | Error: {} | {}", app.source_description(), err, controls)
    } else if let Some(elapsed) = app.since_update() {
        format!(
            " {} | Updated {} ago | {}",
            app.source_description(),
            format_elapsed(elapsed),
            controls,
        )
    } else {
        format!(" {} | Waiting... | {}", app.source_description(), controls)
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Views",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  Tab ←/→     Switch views"),
        Line::from("  1 / 2       Live / History"),
        Line::from("  h           Toggle history"),
        Line::from("  Esc         Back to live"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Readings",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Take a reading now"),
        Line::from("  p         Pause / resume"),
        Line::from("  m         Mute / unmute alerts"),
        Line::from("  e         Export window to CSV"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  c         Open assistant"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);
    let help_area = super::centered(area, 42, 22);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
