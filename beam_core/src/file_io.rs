//! # File I/O Module
//!
//! Reading analysis requests and writing exports. The analysis engine never
//! touches the filesystem; only front ends call into this module.
//!
//! - **Atomic saves**: Write to .tmp, verify, rename to prevent corruption
//! - **Structured errors**: Every failure names the operation and the path
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::{analyze, AnalysisSettings};
//! use beam_core::file_io::{load_input, save_json};
//! use std::path::Path;
//!
//! let input = load_input(Path::new("beam.json"))?;
//! let result = analyze(&input, &AnalysisSettings::default())?;
//! save_json(&result, Path::new("beam_result.json"))?;
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::calculations::AnalysisInput;
use crate::errors::{CalcError, CalcResult};

/// Temp file path next to the target (`result.json` → `result.json.tmp`)
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Write text to a file with atomic write semantics.
///
/// The save process:
/// 1. Write to a temporary file (.tmp)
/// 2. Sync to disk (fsync)
/// 3. Read back and compare with what was written
/// 4. Rename .tmp to the target (atomic on most filesystems)
pub fn save_text(contents: &str, path: &Path) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    let written = fs::read_to_string(&tmp_path).map_err(|e| {
        CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    if written != contents {
        let _ = fs::remove_file(&tmp_path);
        return Err(CalcError::file_error(
            "verify temp file",
            tmp_path.display().to_string(),
            "contents differ from what was written",
        ));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

/// Serialize any value as pretty JSON and save it atomically
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(value)?;
    save_text(&json, path)
}

/// Load an analysis request from a JSON file.
///
/// The request is parsed but not validated; [`crate::calculations::analyze`]
/// validates it before computing.
///
/// # Returns
///
/// * `Ok(AnalysisInput)` - Successfully parsed request
/// * `Err(CalcError::SerializationError)` - Invalid JSON or unknown catalog keys
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_input(path: &Path) -> CalcResult<AnalysisInput> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
        reason: format!("Invalid JSON in {}: {}", path.display(), e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Load;
    use crate::materials::MaterialKey;
    use crate::section::{CrossSectionSpec, SectionShape};
    use std::env::temp_dir;

    fn temp_path(name: &str) -> PathBuf {
        temp_dir().join(format!("beam_core_test_{}_{}.json", name, std::process::id()))
    }

    #[test]
    fn test_tmp_path() {
        assert_eq!(
            tmp_path_for(Path::new("out/result.json")),
            PathBuf::from("out/result.json.tmp")
        );
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip");
        let input = AnalysisInput::simply_supported(
            6.0,
            MaterialKey::Wood,
            CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.3),
        )
        .with_load(Load::distributed(2.0, 0.0, 6.0))
        .with_label("B-1");

        save_json(&input, &path).unwrap();
        let loaded = load_input(&path).unwrap();
        assert_eq!(loaded.label, "B-1");
        assert_eq!(loaded.material, MaterialKey::Wood);
        assert_eq!(loaded.loads.len(), 1);
        assert_eq!(loaded.loads[0].id, input.loads[0].id);

        // no temp file left behind
        assert!(!tmp_path_for(&path).exists());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("missing_does_not_exist");
        assert!(matches!(load_input(&missing), Err(CalcError::FileError { .. })));

        let path = temp_path("bad_json");
        save_text("{ not json", &path).unwrap();
        assert!(matches!(load_input(&path), Err(CalcError::SerializationError { .. })));
        let _ = fs::remove_file(&path);
    }
}
