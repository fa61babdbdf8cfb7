use std::io::{self, Write};

use crate::dynamics::state::ProjectileState;
use crate::sim::{FlightReport, Sample, SampleSink};

/// Fixed-width trace header: Time, Pos (x), Pos (y), Vel (vx), Vel (vy), Angle.
pub fn write_header<W: Write>(writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "{:>10}{:>15}{:>15}{:>15}{:>15}{:>15}",
        "Time", "Pos (x)", "Pos (y)", "Vel (vx)", "Vel (vy)", "Angle (deg)"
    )
}

pub fn write_row<W: Write>(writer: &mut W, s: &Sample) -> io::Result<()> {
    writeln!(
        writer,
        "{:>10.3}{:>15.3}{:>15.3}{:>15.3}{:>15.3}{:>15.3}",
        s.time, s.x, s.y, s.vx, s.vy, s.angle_deg
    )
}

/// Echo of the derived initial components.
pub fn write_initial_conditions<W: Write>(
    writer: &mut W,
    state: &ProjectileState,
    gravity: f64,
) -> io::Result<()> {
    writeln!(writer, "X Velocity (m/s): {:.3}", state.vel.x)?;
    writeln!(writer, "Y Velocity (m/s): {:.3}", state.vel.y)?;
    writeln!(writer, "X Acceleration (m/s^2): {:.3}", state.thrust.x)?;
    writeln!(writer, "Y Acceleration (m/s^2): {:.3}", state.thrust.y + gravity)?;
    Ok(())
}

/// Final position (y clamped), time of flight, apex height, then events.
pub fn write_summary<W: Write>(writer: &mut W, report: &FlightReport) -> io::Result<()> {
    let (x, y) = report.reported_position();
    writeln!(writer, "Final position (x, y):\t({:.3}, {:.3})", x, y)?;
    writeln!(writer, "Time of Flight (seconds):\t{:.3}", report.flight_time())?;
    writeln!(writer, "Apex height (m):\t\t{:.3}", report.max_height)?;

    for e in &report.events {
        writeln!(
            writer,
            "  {:<8} t={:>9.3}s   x={:>10.3}m   y={:>10.3}m",
            e.kind.label(),
            e.time(),
            e.state.pos.x,
            e.state.reported_height(),
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Streaming sink
// ---------------------------------------------------------------------------

/// Writes trace rows as soon as the driver emits them.
///
/// The first write error is kept and returned by [`TableSink::finish`];
/// later rows are dropped.
pub struct TableSink<W: Write> {
    writer: W,
    rows: usize,
    error: Option<io::Error>,
}

impl<W: Write> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, error: None }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn finish(mut self) -> io::Result<W> {
        match self.error.take() {
            Some(e) => Err(e),
            None => {
                self.writer.flush()?;
                Ok(self.writer)
            }
        }
    }
}

impl<W: Write> SampleSink for TableSink<W> {
    fn record(&mut self, sample: Sample) {
        if self.error.is_some() {
            return;
        }
        match write_row(&mut self.writer, &sample) {
            Ok(()) => self.rows += 1,
            Err(e) => self.error = Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::SimConfig;
    use crate::sim::{simulate_with, Termination};
    use nalgebra::Vector2;

    fn sample() -> Sample {
        Sample { time: 0.001, x: 0.035, y: 0.035, vx: 35.355, vy: 35.345, angle_deg: 44.992 }
    }

    #[test]
    fn header_and_rows_share_column_widths() {
        let mut buf = Vec::new();
        write_header(&mut buf).unwrap();
        write_row(&mut buf, &sample()).unwrap();
        let out = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0].len(), 10 + 5 * 15);
        assert_eq!(lines[1].len(), 10 + 5 * 15);
        assert_eq!(lines[1], "     0.001          0.035          0.035         35.355         35.345         44.992");
    }

    #[test]
    fn summary_clamps_height() {
        let mut state = ProjectileState::at_rest(255.12, -0.02);
        state.time = 7.216;
        let report = FlightReport {
            final_state: state,
            max_height: 63.776,
            steps: 7216,
            termination: Termination::Landed,
            events: vec![],
        };
        let mut buf = Vec::new();
        write_summary(&mut buf, &report).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Final position (x, y):\t(255.120, 0.000)"));
        assert!(out.contains("Time of Flight (seconds):\t7.216"));
        assert!(out.contains("Apex height (m):\t\t63.776"));
    }

    #[test]
    fn sink_streams_rows() {
        let config = SimConfig { display: true, display_interval: 0.25, ..SimConfig::default() };
        let s = ProjectileState::new(Vector2::zeros(), Vector2::new(3.0, 4.0), Vector2::zeros());
        let mut sink = TableSink::new(Vec::new());
        simulate_with(s, &config, &mut sink);
        let rows = sink.rows();
        let out = String::from_utf8(sink.finish().unwrap()).unwrap();
        assert!(rows > 1);
        assert_eq!(out.lines().count(), rows);
    }
}
