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

//! 3D-print toolpath analysis.
//!
//! Shown only when the received commit carries print data. Charts are built
//! once per table; the print path is rebuilt when its colour metric changes.

mod event;
mod render;

use ratatui::widgets::TableState;

use speckledash::shaping::{
    PrintDataTable,
    charts::{
        PlotSpec, PrintMetric, deviation_coloured_by_speed, print_metrics_over_time, print_path,
        speed_delta_over_time,
    },
};

pub(crate) struct PrintCharts {
    pub(crate) metrics: PlotSpec,
    pub(crate) speed_delta: PlotSpec,
    pub(crate) deviation_by_speed: PlotSpec,
    pub(crate) path: PlotSpec,
}

pub(crate) struct PrintView {
    pub(crate) table: Option<PrintDataTable>,
    pub(crate) charts: Option<PrintCharts>,
    pub(crate) path_metric: PrintMetric,
    pub(crate) show_table: bool,
    pub(crate) table_state: TableState,
}

impl PrintView {
    pub(crate) fn new() -> Self {
        Self {
            table: None,
            charts: None,
            path_metric: PrintMetric::default(),
            show_table: false,
            table_state: TableState::new(),
        }
    }

    pub(crate) fn has_data(&self) -> bool {
        self.table.is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.table.as_ref().map_or(0, PrintDataTable::len)
    }

    pub(crate) fn clear(&mut self) {
        self.set_table(None);
    }

    pub(crate) fn set_table(&mut self, table: Option<PrintDataTable>) {
        self.charts = table.as_ref().map(|table| PrintCharts {
            metrics: print_metrics_over_time(table),
            speed_delta: speed_delta_over_time(table),
            deviation_by_speed: deviation_coloured_by_speed(table),
            path: print_path(table, self.path_metric),
        });
        self.table_state
            .select(table.as_ref().filter(|t| !t.is_empty()).map(|_| 0));
        self.table = table;
    }

    fn cycle_path_metric(&mut self) {
        self.path_metric = self.path_metric.next();
        if let (Some(table), Some(charts)) = (&self.table, &mut self.charts) {
            charts.path = print_path(table, self.path_metric);
        }
    }
}
