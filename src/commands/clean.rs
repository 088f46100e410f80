//! Clean saved site state

use anyhow::Result;
use std::fs;

use crate::prefs::STATE_DIR;
use crate::Folio;

/// Delete the saved preferences directory
pub fn run(folio: &Folio) -> Result<()> {
    let state_dir = folio.base_dir.join(STATE_DIR);
    if state_dir.exists() {
        fs::remove_dir_all(&state_dir)?;
        tracing::info!("Deleted: {:?}", state_dir);
    }
    Ok(())
}
