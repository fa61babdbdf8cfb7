use std::io::{self, Write};

use crate::sim::Sample;

/// Write trace samples in CSV format.
///
/// Columns: time, x, y, vx, vy, angle_deg (y already clamped at zero)
pub fn write_samples<W: Write>(writer: &mut W, samples: &[Sample]) -> io::Result<()> {
    writeln!(writer, "time,x,y,vx,vy,angle_deg")?;

    for s in samples {
        writeln!(
            writer,
            "{:.4},{:.4},{:.4},{:.4},{:.4},{:.3}",
            s.time, s.x, s.y, s.vx, s.vy, s.angle_deg,
        )?;
    }

    Ok(())
}
