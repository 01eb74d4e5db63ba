//! Identity command handler

use anyhow::Result;
use std::path::Path;

use igw::{Identity, Pipeline};

use super::read_archive;

/// Format the resolved owner, one field per line.
pub fn describe(identity: &Identity) -> String {
    if identity.is_unknown() {
        return "Account owner could not be determined".to_string();
    }
    format!(
        "Username: {}\nName: {}",
        identity.username.as_deref().unwrap_or("-"),
        identity.name.as_deref().unwrap_or("-")
    )
}

/// Print the account owner of an archive.
#[cfg(not(tarpaulin_include))]
pub fn handle(archive: &Path) -> Result<()> {
    let bytes = read_archive(archive)?;
    let identity = Pipeline::identity(&bytes)?;
    println!("{}", describe(&identity));
    Ok(())
}
