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

mod common;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use speckledash::{
    shaping::{
        DailyCount, ValueCount,
        charts::{
            COLOUR_BUCKETS, PlotKind, PrintMetric, commit_activity_chart, commits_by,
            deviation_coloured_by_speed, glulam_section, print_metrics_over_time, print_path,
            speed_delta_over_time,
        },
        create_print_data_table,
    },
    speckle::{Base, Member},
};

fn table() -> speckledash::shaping::PrintDataTable {
    let samples = vec![
        common::print_point("p1", Some(0.0), 0.0),
        common::print_point("p2", Some(0.5), 1.0),
        common::print_point("p3", Some(1.0), 2.0),
    ];
    let root = Base::default().with_member("@Data", Member::List(vec![samples.into()]));
    create_print_data_table(&root).unwrap()
}

#[test]
fn metrics_chart_has_one_line_per_metric() {
    let spec = print_metrics_over_time(&table());

    assert_eq!(spec.kind, PlotKind::Line);
    let names: Vec<&str> = spec.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["deviation", "speedDelta", "speed"]);
    assert!(spec.series.iter().all(|s| s.points.len() == 3));
}

#[test]
fn print_path_buckets_every_point() {
    let spec = print_path(&table(), PrintMetric::Deviation);

    assert!(spec.graded);
    assert_eq!(spec.series.len(), COLOUR_BUCKETS);
    let total: usize = spec.series.iter().map(|s| s.points.len()).sum();
    assert_eq!(total, 3);
    assert_eq!(spec.series[0].points, vec![(0.0, 0.0)]);
    assert_eq!(spec.series[COLOUR_BUCKETS - 1].points, vec![(4.0, 6.0)]);

    let x_span = spec.x_bounds[1] - spec.x_bounds[0];
    let y_span = spec.y_bounds[1] - spec.y_bounds[0];
    assert!((x_span - y_span).abs() < 1e-9);
}

#[test]
fn deviation_is_graded_by_speed_buckets() {
    let spec = deviation_coloured_by_speed(&table());

    assert_eq!(spec.kind, PlotKind::Scatter);
    assert!(spec.graded);
    assert_eq!(spec.series.len(), COLOUR_BUCKETS);
    assert_eq!(spec.series[0].name, "speed 40.000..40.400");

    let points: Vec<Vec<(f64, f64)>> = spec.series.iter().map(|s| s.points.clone()).collect();
    assert_eq!(
        points,
        vec![
            vec![(0.0, 0.0)],
            vec![],
            vec![(1.0, 0.5)],
            vec![],
            vec![(2.0, 1.0)],
        ]
    );
}

#[test]
fn constant_speed_delta_still_has_a_visible_range() {
    let spec = speed_delta_over_time(&table());

    assert_eq!(spec.kind, PlotKind::Line);
    assert!(!spec.graded);
    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].points, vec![(0.0, 0.5), (1.0, 0.5), (2.0, 0.5)]);
    assert_eq!(spec.y_bounds, [0.0, 1.0]);
}

#[test]
fn metric_cycle_returns_to_start() {
    let metric = PrintMetric::default();
    assert_eq!(metric.next().next().next(), metric);
}

#[test]
fn section_plots_y_against_z() {
    let spec = glulam_section(&[[0.0, 1.0, 2.0], [3.0, 4.0, 5.0]]);

    assert_eq!(spec.series[0].points, vec![(1.0, 2.0), (4.0, 5.0)]);
}

#[test]
fn activity_chart_is_labelled_with_dates() {
    let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    let activity = [
        DailyCount { date: day(1), count: 3 },
        DailyCount { date: day(2), count: 0 },
        DailyCount { date: day(3), count: 2 },
    ];

    let spec = commit_activity_chart(&activity);

    assert_eq!(spec.x_bounds, [0.0, 2.0]);
    assert_eq!(spec.y_bounds[0], 0.0);
    assert_eq!(spec.x_labels, vec!["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[test]
fn bar_chart_keeps_tally_order() {
    let counts = [
        ValueCount { value: "Rhino".to_string(), count: 2 },
        ValueCount { value: "Revit".to_string(), count: 1 },
    ];

    let spec = commits_by("Commits by Application", &counts);

    assert_eq!(
        spec.bars,
        vec![("Rhino".to_string(), 2), ("Revit".to_string(), 1)]
    );
}
