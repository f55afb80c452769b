//! Load profile snapshots from JSON.

use super::schema::ProfileResult;
use crate::utils::error::ParseError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read a profile result from a JSON file
///
/// # Errors
/// * `ParseError::IoError` - File cannot be opened
/// * `ParseError::JsonError` - Content is not a valid profile
pub fn read_profile(input_path: impl AsRef<Path>) -> Result<ProfileResult, ParseError> {
    let input_path = input_path.as_ref();

    debug!("Reading profile from: {}", input_path.display());

    let file = File::open(input_path)?;
    let profile: ProfileResult = serde_json::from_reader(BufReader::new(file))?;

    debug!("Profile loaded: {} threads", profile.threads.len());

    Ok(profile)
}

/// Parse a profile result from a JSON string
pub fn profile_from_str(json: &str) -> Result<ProfileResult, ParseError> {
    Ok(serde_json::from_str(json)?)
}
