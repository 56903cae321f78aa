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
use speckledash::shaping::{DailyCount, commit_activity, fill_daily_gaps};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn gaps_between_observed_days_are_zero_filled() {
    let series = fill_daily_gaps([(day(1), 3), (day(3), 2)]);

    assert_eq!(
        series,
        vec![
            DailyCount { date: day(1), count: 3 },
            DailyCount { date: day(2), count: 0 },
            DailyCount { date: day(3), count: 2 },
        ]
    );
}

#[test]
fn no_observations_give_an_empty_series() {
    assert_eq!(fill_daily_gaps(Vec::<(NaiveDate, usize)>::new()), Vec::new());
}

#[test]
fn commits_are_counted_per_utc_day() {
    let commits = [
        common::commit("a", "2024-01-03T23:59:59Z"),
        common::commit("b", "2024-01-01T08:00:00Z"),
        common::commit("c", "2024-01-01T18:30:00Z"),
    ];

    let series = commit_activity(&commits);

    let counts: Vec<usize> = series.iter().map(|c| c.count).collect();
    assert_eq!(series.first().unwrap().date, day(1));
    assert_eq!(counts, vec![2, 0, 1]);
}
