// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Chart parameterization.
//!
//! These builders turn tables into plain chart specifications: series of
//! points, axis bounds and labels. They know nothing about the terminal; the
//! render layer maps a [`PlotSpec`] onto a ratatui chart.
//!
//! Charts coloured by a continuous value (the print path coloured by
//! deviation, for example) are expressed as [`COLOUR_BUCKETS`] series over
//! equal-width value ranges, flagged as `graded` so the renderer uses a
//! gradient rather than categorical colours.

use crate::shaping::{
    activity::DailyCount,
    flatten::PrintDataRow,
    print_data::PrintDataTable,
    summary::{BranchCommitCount, ValueCount},
};

/// Number of value ranges used for colour-graded charts.
pub const COLOUR_BUCKETS: usize = 5;

const ACTIVITY_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    Line,
    Scatter,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub kind: PlotKind,
    pub x_title: String,
    pub y_title: String,
    pub series: Vec<Series>,
    pub x_bounds: [f64; 2],
    pub y_bounds: [f64; 2],
    pub x_labels: Vec<String>,
    pub y_labels: Vec<String>,
    pub graded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSpec {
    pub title: String,
    pub bars: Vec<(String, u64)>,
}

/// A measured column of the print data table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintMetric {
    #[default]
    Deviation,
    Speed,
    SpeedDelta,
}

impl PrintMetric {
    pub fn label(self) -> &'static str {
        match self {
            PrintMetric::Deviation => "deviation",
            PrintMetric::Speed => "speed",
            PrintMetric::SpeedDelta => "speedDelta",
        }
    }

    pub fn value(self, row: &PrintDataRow) -> f64 {
        match self {
            PrintMetric::Deviation => row.deviation,
            PrintMetric::Speed => row.speed,
            PrintMetric::SpeedDelta => row.speed_delta,
        }
    }

    pub fn next(self) -> Self {
        match self {
            PrintMetric::Deviation => PrintMetric::Speed,
            PrintMetric::Speed => PrintMetric::SpeedDelta,
            PrintMetric::SpeedDelta => PrintMetric::Deviation,
        }
    }
}

impl PlotSpec {
    fn new(title: &str, kind: PlotKind, x_title: &str, y_title: &str, series: Vec<Series>) -> Self {
        let x_bounds = bounds(series.iter().flat_map(|s| s.points.iter().map(|p| p.0)));
        let y_bounds = bounds(series.iter().flat_map(|s| s.points.iter().map(|p| p.1)));

        Self {
            title: title.to_string(),
            kind,
            x_title: x_title.to_string(),
            y_title: y_title.to_string(),
            series,
            x_bounds,
            y_bounds,
            x_labels: axis_labels(x_bounds),
            y_labels: axis_labels(y_bounds),
            graded: false,
        }
    }

    fn graded(mut self) -> Self {
        self.graded = true;
        self
    }
}

/// Deviation, speed delta and speed against time.
pub fn print_metrics_over_time(table: &PrintDataTable) -> PlotSpec {
    let series = [
        PrintMetric::Deviation,
        PrintMetric::SpeedDelta,
        PrintMetric::Speed,
    ]
    .into_iter()
    .map(|metric| Series {
        name: metric.label().to_string(),
        points: table.rows.iter().map(|r| (r.time, metric.value(r))).collect(),
    })
    .collect();

    PlotSpec::new(
        "Deviation, Speed, and Speed Delta Over Time",
        PlotKind::Line,
        "time",
        "value",
        series,
    )
}

pub fn speed_delta_over_time(table: &PrintDataTable) -> PlotSpec {
    let series = vec![Series {
        name: PrintMetric::SpeedDelta.label().to_string(),
        points: table.rows.iter().map(|r| (r.time, r.speed_delta)).collect(),
    }];

    PlotSpec::new(
        "Speed Delta Over Time",
        PlotKind::Line,
        "time",
        "speedDelta",
        series,
    )
}

pub fn deviation_coloured_by_speed(table: &PrintDataTable) -> PlotSpec {
    let series = bucketed(table, PrintMetric::Speed, |r| (r.time, r.deviation));

    PlotSpec::new(
        "Deviation Over Time Coloured By Speed",
        PlotKind::Scatter,
        "time",
        "deviation",
        series,
    )
    .graded()
}

/// Plan view (x/y) of the toolpath, coloured by `colour_by`.
pub fn print_path(table: &PrintDataTable, colour_by: PrintMetric) -> PlotSpec {
    let series = bucketed(table, colour_by, |r| (r.x, r.y));
    let title = match colour_by {
        PrintMetric::Deviation => "Print Path Coloured By Deviation",
        PrintMetric::Speed => "Print Path Coloured By Speed",
        PrintMetric::SpeedDelta => "Print Path Coloured By Speed Delta",
    };

    let mut spec = PlotSpec::new(title, PlotKind::Scatter, "x", "y", series).graded();
    (spec.x_bounds, spec.y_bounds) = square_bounds(spec.x_bounds, spec.y_bounds);
    spec.x_labels = axis_labels(spec.x_bounds);
    spec.y_labels = axis_labels(spec.y_bounds);
    spec
}

/// Cross-section of a glulam mesh: vertex y against z with equal axis spans.
pub fn glulam_section(vertices: &[[f64; 3]]) -> PlotSpec {
    let series = vec![Series {
        name: "vertices".to_string(),
        points: vertices.iter().map(|v| (v[1], v[2])).collect(),
    }];

    let mut spec = PlotSpec::new("Section", PlotKind::Scatter, "y", "z", series);
    (spec.x_bounds, spec.y_bounds) = square_bounds(spec.x_bounds, spec.y_bounds);
    spec.x_labels = axis_labels(spec.x_bounds);
    spec.y_labels = axis_labels(spec.y_bounds);
    spec
}

pub fn commits_by(title: &str, counts: &[ValueCount]) -> BarSpec {
    BarSpec {
        title: title.to_string(),
        bars: counts
            .iter()
            .map(|c| (c.value.clone(), c.count as u64))
            .collect(),
    }
}

pub fn branch_commits(counts: &[BranchCommitCount]) -> BarSpec {
    BarSpec {
        title: "Commits per Branch".to_string(),
        bars: counts
            .iter()
            .map(|c| (c.branch_name.clone(), c.total_commits))
            .collect(),
    }
}

/// Daily commit counts. The x axis is days since the first date, labelled
/// with calendar dates.
pub fn commit_activity_chart(activity: &[DailyCount]) -> PlotSpec {
    let points: Vec<(f64, f64)> = activity
        .iter()
        .enumerate()
        .map(|(day, c)| (day as f64, c.count as f64))
        .collect();

    let mut spec = PlotSpec::new(
        "Commit Activity Timeline",
        PlotKind::Line,
        "date",
        "count",
        vec![Series {
            name: "commits".to_string(),
            points,
        }],
    );

    let (Some(first), Some(last)) = (activity.first(), activity.last()) else {
        return spec;
    };
    let middle = &activity[activity.len() / 2];

    spec.x_bounds = [0.0, (activity.len().max(2) - 1) as f64];
    spec.x_labels = [first, middle, last]
        .iter()
        .map(|c| c.date.format(ACTIVITY_DATE_FORMAT).to_string())
        .collect();
    spec.y_bounds = [0.0, spec.y_bounds[1].max(1.0)];
    spec.y_labels = axis_labels(spec.y_bounds);
    spec
}

fn bucketed(
    table: &PrintDataTable,
    colour_by: PrintMetric,
    point: impl Fn(&PrintDataRow) -> (f64, f64),
) -> Vec<Series> {
    let Some((lo, hi)) = table.range(|r| colour_by.value(r)) else {
        return Vec::new();
    };
    let width = (hi - lo) / COLOUR_BUCKETS as f64;

    let mut series: Vec<Series> = (0..COLOUR_BUCKETS)
        .map(|bucket| {
            let from = lo + width * bucket as f64;
            Series {
                name: format!("{} {:.3}..{:.3}", colour_by.label(), from, from + width),
                points: Vec::new(),
            }
        })
        .collect();

    for row in &table.rows {
        let bucket = if width > 0.0 {
            (((colour_by.value(row) - lo) / width).floor() as usize).min(COLOUR_BUCKETS - 1)
        } else {
            0
        };
        series[bucket].points.push(point(row));
    }

    series
}

fn bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let range = values
        .filter(|v| v.is_finite())
        .fold(None, |range: Option<(f64, f64)>, v| match range {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        });

    match range {
        None => [0.0, 1.0],
        Some((lo, hi)) if lo == hi => [lo - 0.5, hi + 0.5],
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            [lo - pad, hi + pad]
        }
    }
}

fn square_bounds(x: [f64; 2], y: [f64; 2]) -> ([f64; 2], [f64; 2]) {
    let span = (x[1] - x[0]).max(y[1] - y[0]);
    let centre = |b: [f64; 2]| (b[0] + b[1]) / 2.0;
    let around = |c: f64| [c - span / 2.0, c + span / 2.0];
    (around(centre(x)), around(centre(y)))
}

fn axis_labels(bounds: [f64; 2]) -> Vec<String> {
    let [lo, hi] = bounds;
    let precision = if (hi - lo).abs() < 1.0 { 3 } else { 1 };
    [lo, (lo + hi) / 2.0, hi]
        .iter()
        .map(|v| format!("{:.*}", precision, v))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degenerate_bounds_are_padded() {
        assert_eq!(bounds([2.0, 2.0].into_iter()), [1.5, 2.5]);
        assert_eq!(bounds(std::iter::empty()), [0.0, 1.0]);
    }

    #[test]
    fn square_bounds_share_the_larger_span() {
        let (x, y) = square_bounds([0.0, 10.0], [0.0, 2.0]);
        assert_eq!(x, [0.0, 10.0]);
        assert_eq!(y, [-4.0, 6.0]);
    }
}
