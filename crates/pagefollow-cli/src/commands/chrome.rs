use anyhow::Result;
use pagefollow_browser::ChromeFinder;
use std::path::PathBuf;

/// Report which Chrome binary a run would use.
pub fn execute(chrome_path: Option<PathBuf>) -> Result<()> {
    let path = ChromeFinder::new(chrome_path).find()?;
    println!("✅ Chrome binary: {}", path.display());
    Ok(())
}
