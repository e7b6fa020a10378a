use std::fmt;
use std::fs::File;
use std::path::Path;

/// Reference feature table used to fit normalization statistics.
///
/// Loaded once at startup from the bundled CSV export of the training
/// feature distribution. The outcome column is dropped on load; what
/// remains is feature columns only, in training order. The table is
/// read-only for the rest of the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureBaseline {
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

/// Per-column mean and population standard deviation of a baseline table.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub mean: Vec<f64>,
    pub stddev: Vec<f64>,
}

impl FeatureBaseline {
    /// Load a baseline from a CSV file, dropping `label_column`.
    ///
    /// The header row names the columns; every body cell must parse as a
    /// number. Rows with a cell count different from the header are
    /// rejected rather than padded.
    pub fn load_csv(path: &Path, label_column: &str) -> Result<Self, BaselineError> {
        let file = File::open(path).map_err(BaselineError::Io)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let header = reader.headers().map_err(BaselineError::Csv)?.clone();
        let label_index = header
            .iter()
            .position(|name| name == label_column)
            .ok_or_else(|| BaselineError::MissingLabelColumn {
                column: label_column.to_string(),
            })?;

        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != label_index)
            .map(|(_, name)| name.to_string())
            .collect();

        let mut rows = Vec::new();
        for (row_index, record) in reader.records().enumerate() {
            let record = record.map_err(BaselineError::Csv)?;
            if record.len() != header.len() {
                return Err(BaselineError::RaggedRow {
                    row: row_index + 1,
                    expected: header.len(),
                    got: record.len(),
                });
            }

            let mut row = Vec::with_capacity(columns.len());
            for (cell_index, cell) in record.iter().enumerate() {
                if cell_index == label_index {
                    continue;
                }
                let value =
                    cell.trim()
                        .parse::<f64>()
                        .map_err(|_| BaselineError::ParseValue {
                            row: row_index + 1,
                            column: header[cell_index].to_string(),
                            value: cell.to_string(),
                        })?;
                row.push(value);
            }
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(BaselineError::Empty);
        }

        Ok(Self { columns, rows })
    }

    /// Build a baseline from already-parsed columns and rows.
    pub fn from_parts(columns: Vec<String>, rows: Vec<Vec<f64>>) -> Result<Self, BaselineError> {
        if rows.is_empty() {
            return Err(BaselineError::Empty);
        }
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(BaselineError::RaggedRow {
                    row: row_index + 1,
                    expected: columns.len(),
                    got: row.len(),
                });
            }
        }
        Ok(Self { columns, rows })
    }

    /// Feature column names, in file order with the label column removed.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Compute per-column mean and population standard deviation.
    ///
    /// Pure function of the table contents: fitting twice on the same
    /// baseline yields bit-identical vectors.
    pub fn column_stats(&self) -> ColumnStats {
        let n = self.rows.len() as f64;
        let width = self.columns.len();

        let mut mean = vec![0.0f64; width];
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                mean[i] += value;
            }
        }
        for m in &mut mean {
            *m /= n;
        }

        let mut stddev = vec![0.0f64; width];
        for row in &self.rows {
            for (i, value) in row.iter().enumerate() {
                let d = value - mean[i];
                stddev[i] += d * d;
            }
        }
        for s in &mut stddev {
            *s = (*s / n).sqrt();
        }

        ColumnStats { mean, stddev }
    }
}

#[derive(Debug)]
pub enum BaselineError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingLabelColumn {
        column: String,
    },
    ParseValue {
        row: usize,
        column: String,
        value: String,
    },
    RaggedRow {
        row: usize,
        expected: usize,
        got: usize,
    },
    Empty,
}

impl fmt::Display for BaselineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "baseline file IO error: {e}"),
            Self::Csv(e) => write!(f, "baseline CSV error: {e}"),
            Self::MissingLabelColumn { column } => {
                write!(f, "baseline has no label column {column:?} to drop")
            }
            Self::ParseValue { row, column, value } => {
                write!(
                    f,
                    "baseline row {row} column {column:?}: {value:?} is not numeric"
                )
            }
            Self::RaggedRow { row, expected, got } => {
                write!(f, "baseline row {row} has {got} cells, expected {expected}")
            }
            Self::Empty => write!(f, "baseline table has no data rows"),
        }
    }
}

impl std::error::Error for BaselineError {}
