use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Recorded flight telemetry
// ---------------------------------------------------------------------------

/// Expected column order:
/// Time, Altitude, Vertical Velocity, Horizontal Velocity, Total Velocity,
/// Drag, Displacement
pub const COLUMNS: usize = 7;

/// One recorded flight sample.
#[derive(Debug, Clone)]
pub struct TelemetrySample {
    pub time: f64,
    pub altitude: f64,
    pub vertical_velocity: f64,
    pub horizontal_velocity: f64,
    pub total_velocity: f64,
    pub drag: f64,
    pub displacement: f64,
}

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("failed to read telemetry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("telemetry file has no header line")]
    Empty,

    #[error("telemetry file has a header but no data rows")]
    NoRows,

    #[error("line {line}: expected {COLUMNS} columns, found {found}")]
    ColumnCount { line: usize, found: usize },

    #[error("line {line}: not a number: {value:?}")]
    Number { line: usize, value: String },
}

// ---------------------------------------------------------------------------
// Delimiter sniffing
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    Whitespace,
}

/// Pick the field delimiter from the header line: tab wins, then comma,
/// otherwise fall back to generic whitespace splitting.
pub fn detect_delimiter(header: &str) -> Delimiter {
    if header.contains('\t') {
        Delimiter::Tab
    } else if header.contains(',') {
        Delimiter::Comma
    } else {
        Delimiter::Whitespace
    }
}

fn split_row(line: &str, delimiter: Delimiter) -> Vec<&str> {
    match delimiter {
        Delimiter::Tab => line.split('\t').map(str::trim).collect(),
        Delimiter::Comma => line.split(',').map(str::trim).collect(),
        Delimiter::Whitespace => line.split_whitespace().collect(),
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a delimited telemetry table with a header row.
/// A single data row is a valid one-sample series.
pub fn parse_telemetry<R: BufRead>(reader: R) -> Result<Vec<TelemetrySample>, TelemetryError> {
    let mut lines = reader.lines();
    let header = match lines.next() {
        Some(line) => line?,
        None => return Err(TelemetryError::Empty),
    };
    let delimiter = detect_delimiter(&header);

    let mut samples = Vec::new();
    for (i, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let line_no = i + 2; // 1-based, after the header
        let fields = split_row(&line, delimiter);
        if fields.len() != COLUMNS {
            return Err(TelemetryError::ColumnCount { line: line_no, found: fields.len() });
        }
        let mut values = [0.0_f64; COLUMNS];
        for (slot, field) in values.iter_mut().zip(&fields) {
            *slot = field.parse().map_err(|_| TelemetryError::Number {
                line: line_no,
                value: (*field).to_string(),
            })?;
        }
        samples.push(TelemetrySample {
            time: values[0],
            altitude: values[1],
            vertical_velocity: values[2],
            horizontal_velocity: values[3],
            total_velocity: values[4],
            drag: values[5],
            displacement: values[6],
        });
    }

    if samples.is_empty() {
        return Err(TelemetryError::NoRows);
    }
    Ok(samples)
}

// ---------------------------------------------------------------------------
// Synthetic fallback
// ---------------------------------------------------------------------------

/// Deterministic placeholder series used when the recorded file cannot be
/// read: 100 samples on [0, 150] s with closed-form curves
/// (alt = 100t, v_vert = 50 sin(0.1t), v_horiz = 20t, disp = 5t^2).
pub fn synthetic_telemetry() -> Vec<TelemetrySample> {
    let n = 100;
    (0..n)
        .map(|i| {
            let t = 150.0 * i as f64 / (n - 1) as f64;
            let vertical_velocity = 50.0 * (0.1 * t).sin();
            let horizontal_velocity = 20.0 * t;
            TelemetrySample {
                time: t,
                altitude: 100.0 * t,
                vertical_velocity,
                horizontal_velocity,
                total_velocity: vertical_velocity.hypot(horizontal_velocity),
                drag: 0.0,
                displacement: 5.0 * t * t,
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tagged load result: recorded data or synthetic with a reason
// ---------------------------------------------------------------------------

/// Where the samples came from. Downstream comparison runs either way, but
/// error plots against a fallback are placeholders, not validation.
#[derive(Debug)]
pub enum Source {
    Recorded(PathBuf),
    Fallback(TelemetryError),
}

#[derive(Debug)]
pub struct Telemetry {
    pub samples: Vec<TelemetrySample>,
    pub source: Source,
}

impl Telemetry {
    /// Load a telemetry file, substituting the synthetic series on any
    /// failure. Never fails; check `source` for provenance.
    pub fn load(path: impl AsRef<Path>) -> Telemetry {
        let path = path.as_ref();
        let parsed = File::open(path)
            .map_err(TelemetryError::from)
            .and_then(|f| parse_telemetry(BufReader::new(f)));
        match parsed {
            Ok(samples) => Telemetry {
                samples,
                source: Source::Recorded(path.to_path_buf()),
            },
            Err(err) => Telemetry {
                samples: synthetic_telemetry(),
                source: Source::Fallback(err),
            },
        }
    }

    pub fn is_synthetic(&self) -> bool {
        matches!(self.source, Source::Fallback(_))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const COMMA: &str = "Time,Altitude,Vertical Velocity,Horizontal Velocity,Total Velocity,Drag,Displacement\n\
                         0.0,0.0,0.0,0.0,0.0,0.0,0.0\n\
                         1.0,12.5,25.0,0.1,25.0,3.2,12.5\n";

    #[test]
    fn detects_comma() {
        assert_eq!(detect_delimiter("Time,Altitude,Drag"), Delimiter::Comma);
    }

    #[test]
    fn tab_wins_over_comma() {
        assert_eq!(detect_delimiter("Time\tAltitude, m\tDrag"), Delimiter::Tab);
    }

    #[test]
    fn neither_falls_back_to_whitespace() {
        assert_eq!(detect_delimiter("Time Altitude Drag"), Delimiter::Whitespace);
    }

    #[test]
    fn parses_comma_table() {
        let samples = parse_telemetry(COMMA.as_bytes()).unwrap();
        assert_eq!(samples.len(), 2);
        assert_relative_eq!(samples[1].altitude, 12.5);
        assert_relative_eq!(samples[1].drag, 3.2);
    }

    #[test]
    fn parses_tab_table() {
        let data = "Time\tAltitude\tVV\tHV\tTV\tDrag\tDisp\n\
                    0.5\t10\t20\t1\t20\t0.1\t10\n";
        let samples = parse_telemetry(data.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_relative_eq!(samples[0].time, 0.5);
        assert_relative_eq!(samples[0].displacement, 10.0);
    }

    #[test]
    fn parses_whitespace_table() {
        let data = "Time Altitude VV HV TV Drag Disp\n\
                    2.0  40.0  18.0  2.0  18.1  0.4  40.0\n";
        let samples = parse_telemetry(data.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
        assert_relative_eq!(samples[0].vertical_velocity, 18.0);
    }

    #[test]
    fn single_row_is_a_valid_series() {
        let data = "Time,Alt,VV,HV,TV,Drag,Disp\n5.0,1.0,2.0,3.0,4.0,5.0,6.0\n";
        let samples = parse_telemetry(data.as_bytes()).unwrap();
        assert_eq!(samples.len(), 1);
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let data = "Time,Alt,VV,HV,TV,Drag,Disp\n1.0,2.0,3.0\n";
        match parse_telemetry(data.as_bytes()) {
            Err(TelemetryError::ColumnCount { line: 2, found: 3 }) => {}
            other => panic!("expected ColumnCount error, got {:?}", other),
        }
    }

    #[test]
    fn bad_number_is_an_error() {
        let data = "Time,Alt,VV,HV,TV,Drag,Disp\n1.0,oops,3.0,4.0,5.0,6.0,7.0\n";
        match parse_telemetry(data.as_bytes()) {
            Err(TelemetryError::Number { line: 2, value }) => assert_eq!(value, "oops"),
            other => panic!("expected Number error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_falls_back_to_synthetic() {
        let t = Telemetry::load("definitely/not/a/real/path.csv");
        assert!(t.is_synthetic());
        assert!(!t.samples.is_empty());
        for pair in t.samples.windows(2) {
            assert!(pair[1].time > pair[0].time, "synthetic times must increase");
        }
    }

    #[test]
    fn synthetic_curves_are_consistent() {
        let samples = synthetic_telemetry();
        assert_eq!(samples.len(), 100);
        assert_relative_eq!(samples[0].time, 0.0);
        assert_relative_eq!(samples[99].time, 150.0);
        let s = &samples[50];
        assert_relative_eq!(
            s.total_velocity,
            s.vertical_velocity.hypot(s.horizontal_velocity),
        );
    }
}
