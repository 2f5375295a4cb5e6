//! History view: one panel per loggable band, oldest reading first.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use glucowatch_types::{Reading, SeverityBand, UNIT};

use crate::app::App;

/// Placeholder for a band with no readings yet.
const EMPTY: &str = "--";

/// Render the three history panels side by side.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let ledger = app.monitor().ledger_all();
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);

    for (band, column) in SeverityBand::LOGGABLE.iter().zip(columns.iter()) {
        let readings = ledger.get(band).map(Vec::as_slice).unwrap_or(&[]);
        render_panel(frame, app, *band, readings, *column);
    }
}

fn render_panel(
    frame: &mut Frame,
    app: &App,
    band: SeverityBand,
    readings: &[Reading],
    area: Rect,
) {
    let style = app.theme.band_style(band);
    let block = Block::default()
        .title(format!(" {} ", band.history_title()))
        .title_style(style)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines: Vec<Line> = if readings.is_empty() {
        vec![Line::styled(EMPTY, app.theme.dim)]
    } else {
        entries(readings)
            .into_iter()
            .map(|entry| Line::styled(entry, style))
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Panel lines for a band, in the order the readings were taken.
fn entries(readings: &[Reading]) -> Vec<String> {
    readings.iter().map(format_entry).collect()
}

/// One history line, e.g. `65.5 mg/dL at 14:30:00`.
pub fn format_entry(reading: &Reading) -> String {
    format!("{} {} at {}", reading.value, UNIT, reading.time_label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn test_format_entry() {
        let at = Local.with_ymd_and_hms(2024, 3, 4, 9, 5, 7).unwrap();
        assert_eq!(format_entry(&Reading::new(at, 65.5)), "65.5 mg/dL at 09:05:07");
        assert_eq!(format_entry(&Reading::new(at, 190.0)), "190 mg/dL at 09:05:07");
    }

    #[test]
    fn test_entries_are_oldest_first() {
        let at = Local.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let readings = [
            Reading::new(at, 62.0),
            Reading::new(at + chrono::Duration::seconds(5), 58.5),
        ];
        assert_eq!(
            entries(&readings),
            vec!["62 mg/dL at 09:00:00", "58.5 mg/dL at 09:00:05"]
        );
    }
}
