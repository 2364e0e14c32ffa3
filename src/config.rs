use std::path::PathBuf;

/// Historical fixed paths of the conversion script. The CLI defaults to these
/// so running with no arguments behaves exactly like before.
pub const DEFAULT_SOURCE_PATH: &str = "master_price_list.xlsx";
pub const DEFAULT_OUTPUT_PATH: &str = "public/master_price_list.json";

#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Spreadsheet to read.
    pub source_path: PathBuf,
    /// JSON file to write. Overwritten if it exists.
    pub output_path: PathBuf,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}
