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

//! Daily commit activity.
//!
//! Commits land on irregular days; a line chart needs one point per calendar
//! day, so the sparse tally is reindexed onto a dense, ascending range.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::speckle::Commit;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: usize,
}

/// Expands sparse `(date, count)` observations to every day from the first to
/// the last observed date inclusive. Days without observations count zero and
/// repeated dates are summed.
pub fn fill_daily_gaps(observations: impl IntoIterator<Item = (NaiveDate, usize)>) -> Vec<DailyCount> {
    let mut tally: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for (date, count) in observations {
        *tally.entry(date).or_default() += count;
    }

    let (Some((&first, _)), Some((&last, _))) = (tally.first_key_value(), tally.last_key_value())
    else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|date| *date <= last)
        .map(|date| DailyCount {
            date,
            count: tally.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

/// Commits per UTC calendar day, gap-filled.
pub fn commit_activity<'a>(commits: impl IntoIterator<Item = &'a Commit>) -> Vec<DailyCount> {
    fill_daily_gaps(commits.into_iter().map(|c| (c.created_at.date_naive(), 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn single_observation_yields_single_day() {
        let series = fill_daily_gaps([(day(5), 2)]);
        assert_eq!(series, vec![DailyCount { date: day(5), count: 2 }]);
    }

    #[test]
    fn repeated_dates_are_summed() {
        let series = fill_daily_gaps([(day(2), 1), (day(1), 1), (day(2), 3)]);
        assert_eq!(
            series,
            vec![
                DailyCount { date: day(1), count: 1 },
                DailyCount { date: day(2), count: 4 },
            ]
        );
    }
}
