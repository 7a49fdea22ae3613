//! Initialize site use case

use crate::domain::SiteConfig;
use crate::error::Result;
use crate::infrastructure::FileSystemRepository;
use std::fs;
use std::path::Path;

/// Initialize a new site at the specified path.
pub fn init(path: &Path, site_url: Option<String>) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    let config = SiteConfig {
        site_url,
        ..SiteConfig::default()
    };
    config.validate()?;
    repo.initialize(&config)?;

    println!("Initialized folio site at {}", path.display());

    Ok(())
}
