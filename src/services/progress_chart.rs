use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::models::ProgressEntry;

pub const CHART_WIDTH: f64 = 400.0;
pub const CHART_HEIGHT: f64 = 200.0;
/// Only the most recent entries are charted.
pub const MAX_CHART_ENTRIES: usize = 10;
const GRID_LINES: usize = 5;

pub const EMPTY_MESSAGE: &str = "No data available for charting yet.";
pub const EMPTY_HINT: &str = "Add more progress entries to see your trends!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartMetric {
    #[default]
    Weight,
    Energy,
}

impl ChartMetric {
    pub fn title(&self) -> &'static str {
        match self {
            ChartMetric::Weight => "Weight Trend",
            ChartMetric::Energy => "Energy Level Trend",
        }
    }

    fn value_of(&self, entry: &ProgressEntry) -> Option<f64> {
        match self {
            ChartMetric::Weight => entry.metadata.weight.filter(|w| *w > 0.0),
            ChartMetric::Energy => entry.metadata.energy_level.map(|e| f64::from(e.value())),
        }
    }

    fn range_caption(&self, min: f64, max: f64) -> String {
        match self {
            ChartMetric::Weight => format!("Range: {} - {} lbs", format_number(min), format_number(max)),
            ChartMetric::Energy => format!("Range: {} - {}/5", format_number(min), format_number(max)),
        }
    }
}

impl FromStr for ChartMetric {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weight" => Ok(ChartMetric::Weight),
            "energy" => Ok(ChartMetric::Energy),
            other => Err(format!("unknown chart metric: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    pub label: String,
    pub value: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub metric: ChartMetric,
    pub title: &'static str,
    pub width: f64,
    pub height: f64,
    pub min: f64,
    pub max: f64,
    pub points: Vec<ChartPoint>,
    /// SVG polyline `points` attribute; only drawn between two or more points.
    pub polyline: Option<String>,
    pub range_caption: Option<String>,
    pub grid_lines: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ChartView {
    Empty { message: &'static str, hint: &'static str },
    Ready(ChartData),
}

impl ChartView {
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartView::Empty { .. })
    }

    pub fn data(&self) -> Option<&ChartData> {
        match self {
            ChartView::Ready(data) => Some(data),
            ChartView::Empty { .. } => None,
        }
    }
}

/// Trend chart over the latest progress entries.
pub struct ProgressChart;

impl ProgressChart {
    /// Lay out `metric` for the most recent entries in a 400x200 space, oldest on the left.
    /// Entries may arrive in any order.
    pub fn build(entries: &[ProgressEntry], metric: ChartMetric) -> ChartView {
        let mut sorted: Vec<&ProgressEntry> = entries.iter().collect();
        sorted.sort_by_key(|e| e.metadata.date);
        let recent = &sorted[sorted.len().saturating_sub(MAX_CHART_ENTRIES)..];

        let samples: Vec<(NaiveDate, f64)> = recent
            .iter()
            .filter_map(|e| metric.value_of(e).map(|v| (e.metadata.date, v)))
            .collect();

        if samples.is_empty() {
            return ChartView::Empty {
                message: EMPTY_MESSAGE,
                hint: EMPTY_HINT,
            };
        }

        let min = samples.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
        let max = samples.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        let last_index = (samples.len() - 1).max(1) as f64;

        let points: Vec<ChartPoint> = samples
            .iter()
            .enumerate()
            .map(|(i, (date, value))| ChartPoint {
                date: *date,
                label: date.format("%-m/%-d/%Y").to_string(),
                value: *value,
                x: i as f64 / last_index * CHART_WIDTH,
                y: CHART_HEIGHT - (value - min) / range * CHART_HEIGHT,
            })
            .collect();

        let multiple = points.len() > 1;
        let polyline = multiple.then(|| {
            points
                .iter()
                .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
                .collect::<Vec<_>>()
                .join(" ")
        });

        ChartView::Ready(ChartData {
            metric,
            title: metric.title(),
            width: CHART_WIDTH,
            height: CHART_HEIGHT,
            min,
            max,
            points,
            polyline,
            range_caption: multiple.then(|| metric.range_caption(min, max)),
            grid_lines: (0..GRID_LINES)
                .map(|i| i as f64 * CHART_HEIGHT / (GRID_LINES - 1) as f64)
                .collect(),
        })
    }
}

/// Whole numbers print without a fractional part (`118`, not `118.0`).
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
