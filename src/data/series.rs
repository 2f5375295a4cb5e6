//! Chart series and trend calculations derived from the sliding window.

use glucowatch_types::{Reading, Thresholds};

/// Padding added around the plotted range, in mg/dL.
const Y_PADDING: f64 = 10.0;

/// Plot-ready data for the live chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// (index, value) pairs, oldest first.
    pub points: Vec<(f64, f64)>,
    /// Horizontal bounds, spanning the full window capacity.
    pub x_bounds: [f64; 2],
    /// Vertical bounds, always including every threshold line.
    pub y_bounds: [f64; 2],
    /// Time labels for the first, middle and last reading.
    pub x_labels: Vec<String>,
}

impl ChartSeries {
    /// Build a series from window contents.
    ///
    /// The x axis spans `capacity` slots so the line grows from the left
    /// until the window fills up, then scrolls.
    pub fn from_window(window: &[Reading], capacity: usize, thresholds: &Thresholds) -> Self {
        let points = window
            .iter()
            .enumerate()
            .map(|(i, r)| (i as f64, r.value))
            .collect();

        let min = window.iter().map(|r| r.value).fold(thresholds.low, f64::min);
        let max = window.iter().map(|r| r.value).fold(thresholds.critical, f64::max);
        let y_bounds = [
            round_down(min - Y_PADDING),
            round_up(max + Y_PADDING),
        ];

        let x_labels = match window {
            [] => Vec::new(),
            [only] => vec![only.time_label()],
            [first, .., last] => {
                let middle = &window[window.len() / 2];
                vec![first.time_label(), middle.time_label(), last.time_label()]
            }
        };

        Self {
            points,
            x_bounds: [0.0, capacity.saturating_sub(1).max(1) as f64],
            y_bounds,
            x_labels,
        }
    }

    /// Horizontal line at `value` across the whole chart.
    pub fn guide_line(&self, value: f64) -> [(f64, f64); 2] {
        [(self.x_bounds[0], value), (self.x_bounds[1], value)]
    }

    /// Labels for the y axis: bottom, each threshold inside the range, top.
    pub fn y_labels(&self, thresholds: &Thresholds) -> Vec<String> {
        let mut labels = vec![format!("{:.0}", self.y_bounds[0])];
        for t in [thresholds.low, thresholds.elevated, thresholds.critical] {
            if t > self.y_bounds[0] && t < self.y_bounds[1] {
                labels.push(format!("{:.0}", t));
            }
        }
        labels.push(format!("{:.0}", self.y_bounds[1]));
        labels
    }
}

fn round_down(v: f64) -> f64 {
    (v / 10.0).floor() * 10.0
}

fn round_up(v: f64) -> f64 {
    (v / 10.0).ceil() * 10.0
}

/// Direction of the most recent change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Steady,
}

impl Trend {
    /// Arrow used next to the current value.
    pub fn arrow(&self) -> &'static str {
        match self {
            Trend::Rising => "↑",
            Trend::Falling => "↓",
            Trend::Steady => "→",
        }
    }
}

/// Rate of change between the last two readings, in mg/dL per minute.
///
/// Returns None if there's not enough history or the readings share a
/// timestamp.
pub fn rate_per_minute(window: &[Reading]) -> Option<f64> {
    let [.., previous, current] = window else {
        return None;
    };

    let elapsed = (current.timestamp - previous.timestamp).num_seconds() as f64;
    if elapsed > 0.0 {
        Some((current.value - previous.value) / elapsed * 60.0)
    } else {
        None
    }
}

/// Classify the last change. Changes under 1 mg/dL count as steady.
pub fn trend(window: &[Reading]) -> Option<Trend> {
    let [.., previous, current] = window else {
        return None;
    };

    let delta = current.value - previous.value;
    Some(if delta >= 1.0 {
        Trend::Rising
    } else if delta <= -1.0 {
        Trend::Falling
    } else {
        Trend::Steady
    })
}
