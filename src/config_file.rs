use crate::errors::ConfigFileError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml::{Table, Value};

/// Table inside a project settings file that holds the dashboard overrides.
pub const PROJECT_SECTION: &str = "jenkins-dashboard";

/// The global layer is the whole file. A missing file is an empty layer.
pub fn load_global_layer(path: &Path) -> Result<Table, ConfigFileError> {
    Ok(read_table(path)?.unwrap_or_default())
}

/// The project layer is the `[jenkins-dashboard]` table of a project file.
pub fn load_project_layer(path: &Path) -> Result<Table, ConfigFileError> {
    let mut file = match read_table(path)? {
        Some(file) => file,
        None => return Ok(Table::new()),
    };

    match file.remove(PROJECT_SECTION) {
        Some(Value::Table(section)) => Ok(section),
        Some(_) => Err(ConfigFileError::NotATable {
            path: path.to_path_buf(),
            key: PROJECT_SECTION.to_string(),
        }),
        None => Ok(Table::new()),
    }
}

fn read_table(path: &Path) -> Result<Option<Table>, ConfigFileError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(ref e) if e.kind() == ErrorKind::NotFound => {
            debug!("--Settings--: No settings file at {:?}.", path);
            return Ok(None);
        }
        Err(e) => {
            return Err(ConfigFileError::Read {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        }
    };

    contents
        .parse::<Table>()
        .map(Some)
        .map_err(|e| ConfigFileError::Parse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
}
