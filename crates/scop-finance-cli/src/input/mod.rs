pub mod file;
pub mod stdin;

use serde::de::DeserializeOwned;

/// Load a typed input record from `--input file.json`, or from piped stdin
/// when no path is given. Returns None when neither source is present and the
/// command should fall back to its individual flags.
pub fn load_typed<T: DeserializeOwned>(
    path: &Option<String>,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return Ok(Some(file::read_json(path)?));
    }

    match stdin::read_stdin()? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}
