use thiserror::Error;

/// Errors the pipeline can surface for one upload. All of them are terminal
/// for that upload and recoverable by supplying a corrected file; the GUI
/// shows `user_message()` instead of rendering a partial dashboard.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("column '{column}' contains a non-numeric value: '{value}'")]
    DataFormat { column: String, value: String },

    #[error("CSV parsing error: {source}")]
    Csv {
        #[from]
        source: csv::Error,
    },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// Message shown in the GUI's error banner.
    pub fn user_message(&self) -> String {
        match self {
            PipelineError::MissingColumns(cols) => {
                format!("Required columns are missing: {}", cols.join(", "))
            }
            PipelineError::DataFormat { column, value } => format!(
                "Column '{}' has a value that is not a number: '{}'",
                column, value
            ),
            PipelineError::Csv { source } => format!("The file could not be read as CSV: {}", source),
            PipelineError::Io { source } => format!("The file could not be read: {}", source),
        }
    }
}
