use std::fs;
use std::io;
use std::path::Path;

use crate::state::plan::PlanFile;

#[derive(Debug)]
pub enum PlanIoError {
    Io(io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for PlanIoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanIoError::Io(e) => write!(f, "IO error: {e}"),
            PlanIoError::Parse(e) => write!(f, "Plan parse error: {e}"),
        }
    }
}

impl std::error::Error for PlanIoError {}

impl From<io::Error> for PlanIoError {
    fn from(e: io::Error) -> Self {
        PlanIoError::Io(e)
    }
}

impl From<serde_json::Error> for PlanIoError {
    fn from(e: serde_json::Error) -> Self {
        PlanIoError::Parse(e)
    }
}

pub fn load_plan(path: &Path) -> Result<PlanFile, PlanIoError> {
    let content = fs::read_to_string(path)?;
    let plan: PlanFile = serde_json::from_str(&content)?;
    Ok(plan)
}

pub fn save_plan(path: &Path, plan: &PlanFile) -> Result<(), PlanIoError> {
    let content = serde_json::to_string_pretty(plan)?;
    super::atomic_write_string(path, &content)?;
    Ok(())
}
