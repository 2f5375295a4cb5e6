//! Live view: chart of the sliding window with threshold guide lines, plus
//! the current reading and its advice.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Wrap},
    Frame,
};

use glucowatch_types::{SeverityBand, UNIT};

use crate::app::App;
use crate::data::{rate_per_minute, ChartSeries};

/// Render the live view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::vertical([Constraint::Min(6), Constraint::Length(4)]).split(area);

    render_chart(frame, app, chunks[0]);
    render_reading(frame, app, chunks[1]);
}

fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let config = app.config();
    let thresholds = config.thresholds;
    let window = app.latest.as_ref().map(|u| u.window.as_slice()).unwrap_or(&[]);
    let series = ChartSeries::from_window(window, config.window_capacity, &thresholds);

    let low_line = series.guide_line(thresholds.low);
    let elevated_line = series.guide_line(thresholds.elevated);
    let critical_line = series.guide_line(thresholds.critical);

    let datasets = vec![
        guide(
            format!("low {:.0}", thresholds.low),
            app.theme.band_color(SeverityBand::Low),
            &low_line,
        ),
        guide(
            format!("high {:.0}", thresholds.elevated),
            app.theme.band_color(SeverityBand::Elevated),
            &elevated_line,
        ),
        guide(
            format!("critical {:.0}", thresholds.critical),
            app.theme.band_color(SeverityBand::Critical),
            &critical_line,
        ),
        Dataset::default()
            .name(UNIT)
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.series))
            .data(&series.points),
    ];

    let block = Block::default()
        .title(format!(
            " Blood Sugar (last {} readings) ",
            config.window_capacity
        ))
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .style(app.theme.dim)
                .bounds(series.x_bounds)
                .labels(series.x_labels.clone()),
        )
        .y_axis(
            Axis::default()
                .title(UNIT)
                .style(app.theme.dim)
                .bounds(series.y_bounds)
                .labels(series.y_labels(&thresholds)),
        );

    frame.render_widget(chart, area);
}

/// Dotted horizontal threshold line.
fn guide(name: String, color: Color, data: &[(f64, f64)]) -> Dataset<'_> {
    Dataset::default()
        .name(name)
        .marker(Marker::Dot)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(color))
        .data(data)
}

fn render_reading(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current ")
        .title_style(app.theme.header)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let Some(ref update) = app.latest else {
        let paragraph = Paragraph::new(Line::styled("No readings yet", app.theme.dim)).block(block);
        frame.render_widget(paragraph, area);
        return;
    };

    let band = update.band();
    let style = app.theme.band_style(band);
    let rate = rate_per_minute(&update.window)
        .map(|r| format!("  ({:+.1} {}/min)", r, UNIT))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{:.1} {}", update.reading.value, UNIT),
                style.add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" at {}", update.reading.time_label())),
            Span::styled(rate, app.theme.dim),
            Span::raw("  "),
            Span::styled(band.label(), style),
        ]),
        match update.advice() {
            Some(advice) => Line::from(vec![
                Span::styled("Advice: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::styled(advice, style),
            ]),
            None => Line::styled("In range.", app.theme.dim),
        },
    ];

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}
