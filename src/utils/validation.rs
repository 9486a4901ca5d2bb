use crate::utils::error::{ReportError, Result};
use std::path::{Component, Path};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// The report file name must stay a plain relative path under the output directory.
pub fn validate_relative_file(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    let p = Path::new(path);
    if p.is_absolute() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must be relative to the output directory".to_string(),
        });
    }

    if p.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must not leave the output directory".to_string(),
        });
    }

    if p.file_name().is_none() {
        return Err(ReportError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path must name a file".to_string(),
        });
    }

    Ok(())
}
