use crate::domain::error::PpError;
use crate::domain::models::Options;
use log::{debug, warn};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Component, Path, PathBuf};

fn normalize_extensions(exts: &[String]) -> BTreeSet<String> {
    exts.iter()
        .map(|ext| ext.trim())
        .filter(|ext| !ext.is_empty() && *ext != ".")
        .map(|ext| {
            if ext.starts_with('.') {
                ext.to_string()
            } else {
                format!(".{}", ext)
            }
        })
        .collect()
}

fn validate_output_name(output: &str) -> Result<&Path, PpError> {
    let path = Path::new(output);
    let mut normal = 0;
    for component in path.components() {
        match component {
            Component::Normal(_) => normal += 1,
            Component::CurDir => {}
            _ => {
                return Err(PpError::InvalidInput(format!(
                    "output directory must be inside the project directory: {}",
                    output
                )));
            }
        }
    }

    if normal == 0 {
        return Err(PpError::InvalidInput(format!(
            "output directory must be a subdirectory of the project: '{}'",
            output
        )));
    }
    Ok(path)
}

/// Validates user input and clears any previous output directory.
pub fn build_options(proj_dir: &Path, output: &str, exts: &[String]) -> Result<Options, PpError> {
    if !proj_dir.is_dir() {
        return Err(PpError::InvalidInput(format!(
            "invalid input directory: {}",
            proj_dir.display()
        )));
    }

    let exts = normalize_extensions(exts);
    if exts.is_empty() {
        return Err(PpError::InvalidInput(
            "at least one file extension is required".to_string(),
        ));
    }

    let out_dir: PathBuf = proj_dir.join(validate_output_name(output)?);
    if out_dir.exists() {
        if out_dir.is_dir() {
            warn!("directory {} will be overwritten", out_dir.display());
            fs::remove_dir_all(&out_dir).map_err(|source| PpError::Output {
                path: out_dir.clone(),
                source,
            })?;
        } else {
            return Err(PpError::InvalidInput(format!(
                "{} isn't a directory",
                out_dir.display()
            )));
        }
    }

    debug!(
        "Options: base_dir={}, out_dir={}, exts={:?}",
        proj_dir.display(),
        out_dir.display(),
        exts
    );

    Ok(Options {
        base_dir: proj_dir.to_path_buf(),
        out_dir,
        exts,
    })
}
