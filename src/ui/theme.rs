//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use glucowatch_types::SeverityBand;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for readings below the low threshold.
    pub low: Color,
    /// Color for readings in range.
    pub normal: Color,
    /// Color for elevated readings.
    pub elevated: Color,
    /// Color for critical readings.
    pub critical: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Color of the plotted reading line.
    pub series: Color,
    /// Muted text such as axis labels and empty placeholders.
    pub dim: Style,
    /// Style for panel titles.
    pub header: Style,
    /// Style for the active tab.
    pub tab_active: Style,
    /// Style for inactive tabs.
    pub tab_inactive: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            low: Color::Red,
            normal: Color::Green,
            elevated: Color::Yellow,
            critical: Color::Red,
            border: Color::Gray,
            series: Color::Cyan,
            dim: Style::default().fg(Color::DarkGray),
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::Gray),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            low: Color::Red,
            normal: Color::Green,
            elevated: Color::Yellow,
            critical: Color::Red,
            border: Color::DarkGray,
            series: Color::Blue,
            dim: Style::default().fg(Color::Gray),
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_active: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            tab_inactive: Style::default().fg(Color::DarkGray),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a severity band
    pub fn band_style(&self, band: SeverityBand) -> Style {
        match band {
            SeverityBand::Low => Style::default().fg(self.low),
            SeverityBand::Normal => Style::default().fg(self.normal),
            SeverityBand::Elevated => Style::default().fg(self.elevated),
            SeverityBand::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
        }
    }

    /// Color used for a band's threshold guide line on the chart.
    pub fn band_color(&self, band: SeverityBand) -> Color {
        match band {
            SeverityBand::Low => self.low,
            SeverityBand::Normal => self.normal,
            SeverityBand::Elevated => self.elevated,
            SeverityBand::Critical => self.critical,
        }
    }
}
