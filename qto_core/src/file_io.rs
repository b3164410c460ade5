//! # File I/O Module
//!
//! Loads project files and validates their schema version.
//!
//! ## File Format
//!
//! A project file is JSON holding either a full project:
//!
//! ```json
//! { "meta": { "version": "1.0.0", "name": "Duplex" }, "parts": [ ... ] }
//! ```
//!
//! or just the parts array, as exported from a project's part list:
//!
//! ```json
//! [ { "id": "p1", "name": "C1", "type": "column", "parameters": { ... } } ]
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use qto_core::file_io::load_project;
//! use std::path::Path;
//!
//! let project = load_project(Path::new("duplex.json"))?;
//! println!("Loaded {} parts", project.part_count());
//! # Ok::<(), qto_core::errors::CalcError>(())
//! ```

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::errors::{CalcError, CalcResult};
use crate::parts::StructuralPart;
use crate::project::{Project, SCHEMA_VERSION};

/// Load a project from a file.
///
/// # Returns
///
/// * `Ok(Project)` - Successfully loaded project
/// * `Err(CalcError::VersionMismatch)` - File major version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_project(path: &Path) -> CalcResult<Project> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let project = parse_project(&contents).map_err(|e| match e {
        CalcError::SerializationError { reason } => CalcError::SerializationError {
            reason: format!("Invalid project file {}: {}", path.display(), reason),
        },
        other => other,
    })?;

    log::debug!("Loaded {} parts from {}", project.part_count(), path.display());
    Ok(project)
}

/// Parse project JSON (full project or bare parts array).
///
/// ```rust
/// use qto_core::file_io::parse_project;
///
/// let project = parse_project(r#"[{ "id": "p1", "name": "Pit", "type": "earthwork", "parameters": {} }]"#)?;
/// assert_eq!(project.part_count(), 1);
/// # Ok::<(), qto_core::errors::CalcError>(())
/// ```
pub fn parse_project(source: &str) -> CalcResult<Project> {
    let value: Value = serde_json::from_str(source)?;
    if value.is_array() {
        let parts: Vec<StructuralPart> = serde_json::from_value(value)?;
        return Ok(Project::from_parts(parts));
    }

    let project: Project = serde_json::from_value(value)?;
    validate_version(&project.meta.version)?;
    Ok(project)
}

/// Validate that a file version is compatible with the current schema.
///
/// Only the major version must match.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_major = major_version(file_version).ok_or_else(mismatch)?;
    let current_major = major_version(SCHEMA_VERSION).ok_or_else(mismatch)?;
    if file_major != current_major {
        return Err(mismatch());
    }
    Ok(())
}

fn major_version(version: &str) -> Option<u32> {
    version.trim().split('.').next()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::PartType;
    use serde_json::json;
    use std::env::temp_dir;
    use std::path::PathBuf;

    fn temp_project_path(name: &str) -> PathBuf {
        temp_dir().join(format!("qto_test_{}.json", name))
    }

    #[test]
    fn test_load_full_project() {
        let path = temp_project_path("full");
        let mut project = Project::new("Duplex", "Client");
        project.add_part("C1", PartType::Column, json!({ "width": 12 }));
        fs::write(&path, serde_json::to_string_pretty(&project).unwrap()).unwrap();

        let loaded = load_project(&path).unwrap();
        assert_eq!(loaded, project);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_bare_parts_array() {
        let project = parse_project(
            r#"[
                { "id": "a", "name": "C1", "type": "column", "parameters": {} },
                { "id": "b", "name": "Pit", "type": "earthwork", "parameters": {} }
            ]"#,
        )
        .unwrap();
        assert_eq!(project.part_count(), 2);
        assert_eq!(project.parts[1].part_type, PartType::Earthwork);
        assert_eq!(project.meta.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_empty_parts_array() {
        assert_eq!(parse_project("[]").unwrap().part_count(), 0);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("1.4.2").is_ok());
        assert!(validate_version("2.0.0").is_err());
        assert!(validate_version("0.9.0").is_err());
        assert!(validate_version("garbage").is_err());
    }

    #[test]
    fn test_incompatible_project_rejected() {
        let source = json!({ "meta": { "version": "2.0.0", "name": "Future" }, "parts": [] }).to_string();
        let err = parse_project(&source).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");
    }

    #[test]
    fn test_invalid_json() {
        let err = parse_project("{ not json").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_missing_file() {
        let err = load_project(Path::new("/nonexistent/qto_missing.json")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }
}
