use std::io::{self, Write};

use serde::Serialize;

use crate::sim::event::EventKind;
use crate::sim::{FlightReport, Termination};

#[derive(Debug, Clone, Serialize)]
pub struct EventRecord {
    pub kind: EventKind,
    pub time_s: f64,
    pub x_m: f64,
    pub y_m: f64,
}

/// Summary of one run, as emitted by `--format json`.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub final_x_m: f64,
    pub final_y_m: f64,
    pub flight_time_s: f64,
    pub apex_height_m: f64,
    pub steps: usize,
    pub termination: Termination,
    pub events: Vec<EventRecord>,
}

impl FlightSummary {
    pub fn from_report(report: &FlightReport) -> Self {
        let (x, y) = report.reported_position();
        FlightSummary {
            final_x_m: x,
            final_y_m: y,
            flight_time_s: report.flight_time(),
            apex_height_m: report.max_height,
            steps: report.steps,
            termination: report.termination,
            events: report
                .events
                .iter()
                .map(|e| EventRecord {
                    kind: e.kind,
                    time_s: e.time(),
                    x_m: e.state.pos.x,
                    y_m: e.state.reported_height(),
                })
                .collect(),
        }
    }
}

/// Write flight summary as pretty-printed JSON.
pub fn write_summary<W: Write>(writer: &mut W, summary: &FlightSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, summary)?;
    writeln!(writer)
}
