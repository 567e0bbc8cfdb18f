use std::path::PathBuf;

#[derive(Debug)]
pub struct ProcessResult {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub duration_ms: u128,
}
