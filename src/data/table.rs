use csv::ReaderBuilder;

use crate::config::TIME_COLUMN;
use crate::errors::{ScopeError, ScopeResult};
use crate::models::TimeWindow;

/// One named numeric value column, in file order.
#[derive(Debug, Clone, PartialEq)]
struct Column {
    name: String,
    values: Vec<f64>,
}

/// Ordered rows keyed by a numeric `Time` column plus one or more named
/// numeric value columns.
///
/// Invariant: `time.len() == values.len()` for every column, and `Time` cells
/// are numeric. Both are enforced at parse time; every later transform only
/// narrows rows, so they hold for the table's whole lifetime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TimeSeriesTable {
    /// Source file name, shown in the status bar.
    pub source_name: String,
    time: Vec<f64>,
    columns: Vec<Column>,
}

impl TimeSeriesTable {
    /// Parses a CSV byte source into a table.
    ///
    /// Fails with `Parse` when the source is empty, malformed, or missing a
    /// `Time` column, and with `NonNumeric` when a `Time` cell cannot be
    /// coerced. Value cells must also be numeric; a bad one is reported as a
    /// readable `Parse` error naming the row and column.
    pub fn from_csv_bytes(source_name: impl Into<String>, bytes: &[u8]) -> ScopeResult<Self> {
        let source_name = source_name.into();
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(bytes);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| ScopeError::Parse(format!("{source_name}: unreadable header: {e}")))?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        if headers.is_empty() {
            return Err(ScopeError::Parse(format!("{source_name}: empty CSV file")));
        }

        let time_idx = headers
            .iter()
            .position(|h| h == TIME_COLUMN)
            .ok_or_else(|| {
                ScopeError::Parse(format!("{source_name}: missing required '{TIME_COLUMN}' column"))
            })?;

        let mut time = Vec::new();
        let mut columns: Vec<Column> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != time_idx)
            .map(|(_, name)| Column {
                name: name.clone(),
                values: Vec::new(),
            })
            .collect();

        for (row, record) in reader.records().enumerate() {
            let record = record.map_err(|e| {
                ScopeError::Parse(format!("{source_name}: bad record at data row {row}: {e}"))
            })?;

            let time_cell = record.get(time_idx).unwrap_or("").trim();
            let t: f64 = time_cell.parse().map_err(|_| ScopeError::NonNumeric {
                column: TIME_COLUMN.to_string(),
                row,
                value: time_cell.to_string(),
            })?;
            time.push(t);

            let mut col_slot = 0;
            for (i, cell) in record.iter().enumerate() {
                if i == time_idx {
                    continue;
                }
                let cell = cell.trim();
                let value: f64 = cell.parse().map_err(|_| {
                    ScopeError::Parse(format!(
                        "{source_name}: column '{}' has a non-numeric value '{cell}' at data row {row}",
                        columns[col_slot].name
                    ))
                })?;
                columns[col_slot].values.push(value);
                col_slot += 1;
            }
        }

        if time.is_empty() {
            return Err(ScopeError::Parse(format!(
                "{source_name}: no data rows found"
            )));
        }
        if columns.is_empty() {
            return Err(ScopeError::Parse(format!(
                "{source_name}: no value columns besides '{TIME_COLUMN}'"
            )));
        }

        Ok(Self {
            source_name,
            time,
            columns,
        })
    }

    /// Checks that all `required` value columns are present (used to validate
    /// the environment file's hard-coded Temperature/Volume schema).
    pub fn require_columns(&self, required: &[&str]) -> ScopeResult<()> {
        for name in required {
            if !self.columns.iter().any(|c| c.name == *name) {
                return Err(ScopeError::Parse(format!(
                    "{}: missing required '{name}' column",
                    self.source_name
                )));
            }
        }
        Ok(())
    }

    /// Subsequence of rows with Time in `[window.lo, window.hi]` inclusive,
    /// original order preserved. An empty result is a valid table.
    pub fn filter_by_window(&self, window: TimeWindow) -> TimeSeriesTable {
        let keep: Vec<usize> = self
            .time
            .iter()
            .enumerate()
            .filter(|&(_, &t)| window.contains(t))
            .map(|(i, _)| i)
            .collect();

        TimeSeriesTable {
            source_name: self.source_name.clone(),
            time: keep.iter().map(|&i| self.time[i]).collect(),
            columns: self
                .columns
                .iter()
                .map(|c| Column {
                    name: c.name.clone(),
                    values: keep.iter().map(|&i| c.values[i]).collect(),
                })
                .collect(),
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn column(&self, name: &str) -> Option<&[f64]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.values.as_slice())
    }

    /// Value column names in file order (Time excluded).
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Observed (min, max) of the Time column; `None` on an empty table.
    pub fn time_bounds(&self) -> Option<(f64, f64)> {
        if self.time.is_empty() {
            return None;
        }
        Some(crate::utils::maths_utils::get_min_max(&self.time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const METRICS_CSV: &[u8] = b"Time,X,Y\n0,10,1.5\n1,20,2.5\n2,30,3.5\n3,40,4.5\n4,50,5.5\n";

    fn metrics() -> TimeSeriesTable {
        TimeSeriesTable::from_csv_bytes("metrics.csv", METRICS_CSV).unwrap()
    }

    #[test]
    fn test_parse_basic_csv() {
        let table = metrics();
        assert_eq!(table.row_count(), 5);
        assert_eq!(table.column_names(), vec!["X", "Y"]);
        assert_eq!(table.time(), &[0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(table.column("X").unwrap(), &[10.0, 20.0, 30.0, 40.0, 50.0]);
        assert_eq!(table.time_bounds(), Some((0.0, 4.0)));
    }

    #[test]
    fn test_missing_time_column_is_parse_error() {
        let err = TimeSeriesTable::from_csv_bytes("bad.csv", b"Epoch,X\n0,1\n").unwrap_err();
        assert!(matches!(err, ScopeError::Parse(msg) if msg.contains("Time")));
    }

    #[test]
    fn test_non_numeric_time_is_type_error() {
        let err =
            TimeSeriesTable::from_csv_bytes("bad.csv", b"Time,X\n0,1\nhello,2\n").unwrap_err();
        match err {
            ScopeError::NonNumeric { column, row, value } => {
                assert_eq!(column, "Time");
                assert_eq!(row, 1);
                assert_eq!(value, "hello");
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_value_cell_is_parse_error() {
        let err = TimeSeriesTable::from_csv_bytes("bad.csv", b"Time,X\n0,oops\n").unwrap_err();
        assert!(matches!(err, ScopeError::Parse(msg) if msg.contains("'X'") && msg.contains("oops")));
    }

    #[test]
    fn test_empty_source_is_parse_error() {
        assert!(matches!(
            TimeSeriesTable::from_csv_bytes("empty.csv", b""),
            Err(ScopeError::Parse(_))
        ));
        assert!(matches!(
            TimeSeriesTable::from_csv_bytes("headers_only.csv", b"Time,X\n"),
            Err(ScopeError::Parse(_))
        ));
    }

    #[test]
    fn test_filter_by_window_inclusive_and_ordered() {
        let table = metrics();
        let filtered = table.filter_by_window(TimeWindow::new(1.0, 3.0));
        assert_eq!(filtered.row_count(), 3);
        assert_eq!(filtered.time(), &[1.0, 2.0, 3.0]);
        assert_eq!(filtered.column("X").unwrap(), &[20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_filter_by_window_is_idempotent() {
        let table = metrics();
        let window = TimeWindow::new(1.0, 3.0);
        let once = table.filter_by_window(window);
        let twice = once.filter_by_window(window);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_filter_can_produce_empty_table() {
        let table = metrics();
        let filtered = table.filter_by_window(TimeWindow::new(100.0, 200.0));
        assert!(filtered.is_empty());
        assert_eq!(filtered.time_bounds(), None);
    }

    #[test]
    fn test_require_columns_for_environment_schema() {
        let env = TimeSeriesTable::from_csv_bytes(
            "icontrol.csv",
            b"Time,Temperature,Volume\n0,1,5\n1,2,4\n",
        )
        .unwrap();
        assert!(env.require_columns(&["Temperature", "Volume"]).is_ok());
        let err = env.require_columns(&["Pressure"]).unwrap_err();
        assert!(matches!(err, ScopeError::Parse(msg) if msg.contains("Pressure")));
    }
}
