//! File system content store

use crate::domain::front_matter::parse_post;
use crate::domain::{Collection, Post, SiteConfig};
use crate::error::{FolioError, Result};
use crate::infrastructure::config::CONFIG_FILE;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Directory holding one sub-directory per collection
pub const CONTENT_DIR: &str = "content";

/// Abstract content store
pub trait ContentRepository {
    /// Load configuration from site.toml
    fn load_config(&self) -> Result<SiteConfig>;

    /// Load every post of a collection, in path order
    fn load_collection(&self, collection: Collection) -> Result<Vec<Post>>;
}

/// File system implementation of ContentRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover site root by walking up from current directory
    /// First checks FOLIO_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FOLIO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_config(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "FOLIO_ROOT is set to '{}' but no {} found there. \
                    Run 'folio init' in that directory or unset FOLIO_ROOT.",
                    path.display(),
                    CONFIG_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover site root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_config(&current) {
                debug!(root = %current.display(), "discovered site root");
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => return Err(FolioError::NotSiteDirectory(start.to_path_buf())),
            }
        }
    }

    fn has_config(path: &Path) -> bool {
        path.join(CONFIG_FILE).is_file()
    }

    /// Directory of a collection's markdown files
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(CONTENT_DIR).join(collection.dir_name())
    }

    /// Check if site.toml exists
    pub fn is_initialized(&self) -> bool {
        Self::has_config(&self.root)
    }

    /// Write the default site.toml and create the collection directories
    pub fn initialize(&self, config: &SiteConfig) -> Result<()> {
        if self.is_initialized() {
            return Err(FolioError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        for collection in [Collection::Writing, Collection::Projects] {
            fs::create_dir_all(self.collection_dir(collection))?;
        }
        config.save_to_dir(&self.root)?;

        info!(root = %self.root.display(), "initialized site");
        Ok(())
    }

    /// Markdown files under `dir`, sorted by path.
    ///
    /// Symlinks are followed. Entries that cannot be read fail the whole
    /// scan rather than being skipped.
    fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
        let walker = WalkDir::new(dir)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || entry
                        .file_name()
                        .to_str()
                        .is_none_or(|name| !name.starts_with('.'))
            });

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| FolioError::Io(e.into()))?;
            let path = entry.into_path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
                files.push(path);
            }
        }

        Ok(files)
    }

    /// Read a post file, naming it when its bytes are not UTF-8
    fn read_post_file(path: &Path, rel: &Path) -> Result<String> {
        let bytes = fs::read(path)?;
        String::from_utf8(bytes).map_err(|e| FolioError::InvalidFrontMatter {
            path: rel.to_path_buf(),
            message: format!("file is not valid UTF-8 ({})", e.utf8_error()),
        })
    }
}

impl ContentRepository for FileSystemRepository {
    fn load_config(&self) -> Result<SiteConfig> {
        SiteConfig::load_from_dir(&self.root)
    }

    fn load_collection(&self, collection: Collection) -> Result<Vec<Post>> {
        let dir = self.collection_dir(collection);
        if !dir.is_dir() {
            debug!(collection = %collection, "collection directory missing; treating as empty");
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in Self::markdown_files(&dir)? {
            let rel = path.strip_prefix(&self.root).unwrap_or(&path);
            let content = Self::read_post_file(&path, rel)?;
            let post = parse_post(rel, &content, collection)?;

            if let Some(previous) = seen.insert(post.slug.clone(), rel.to_path_buf()) {
                return Err(FolioError::InvalidFrontMatter {
                    path: rel.to_path_buf(),
                    message: format!(
                        "slug '{}' is already used by {}",
                        post.slug,
                        previous.display()
                    ),
                });
            }
            posts.push(post);
        }

        debug!(collection = %collection, count = posts.len(), "loaded collection");
        Ok(posts)
    }
}
