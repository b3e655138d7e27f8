//! Application directory layout
//!
//! Every directory of the application is derived from one base path. The
//! base path is found by ascending a number of parent directories from an
//! anchor, which by default is this crate's own `src` directory.
//!
//! That default is fixed when the crate is compiled. Once the crate is
//! built from a registry checkout it points into the cargo cache, so hosts
//! should anchor the layout themselves with [`Layout::new`] or
//! [`Layout::rooted`] (or the `paths.anchor` config key).
//!
//! Paths are plain strings: the suffixes below are a compatibility contract
//! with the rest of the application and are reproduced byte for byte,
//! including the trailing slash of the views directory.

use std::path::{Path, PathBuf};

/// Parent directories ascended from the anchor by [`Layout::base_path`]
pub const DEFAULT_LEVELS: usize = 2;

/// The anchor used by [`Layout::default`]
const CRATE_ANCHOR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/src");

/// A directory of the application layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppDir {
    Config,
    Storage,
    App,
    Http,
    Controllers,
    Middleware,
    Models,
    Public,
    Views,
    Components,
    Lang,
    Routes,
    Framework,
    Cache,
    Sessions,
    Logs,
    Lib,
    Database,
}

impl AppDir {
    pub const ALL: [Self; 18] = [
        Self::Config,
        Self::Storage,
        Self::App,
        Self::Http,
        Self::Controllers,
        Self::Middleware,
        Self::Models,
        Self::Public,
        Self::Views,
        Self::Components,
        Self::Lang,
        Self::Routes,
        Self::Framework,
        Self::Cache,
        Self::Sessions,
        Self::Logs,
        Self::Lib,
        Self::Database,
    ];

    /// Path of the directory relative to the base path
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Storage => "storage",
            Self::App => "app",
            Self::Http => "app/Http",
            Self::Controllers => "app/Http/Controllers",
            Self::Middleware => "app/Http/Middleware",
            Self::Models => "app/Models",
            Self::Public => "public",
            Self::Views => "resources/views/",
            Self::Components => "resources/views/components",
            Self::Lang => "lang",
            Self::Routes => "routes",
            Self::Framework => "storage/framework",
            Self::Cache => "storage/framework/.cache",
            Self::Sessions => "storage/framework/sessions",
            Self::Logs => "storage/logs",
            Self::Lib => "lib",
            Self::Database => "database",
        }
    }
}

/// Anchor directory plus the default ascent depth
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    anchor: PathBuf,
    levels: usize,
}

/// Layout anchored at this crate's `src` directory as seen at compile time
///
/// Only meaningful when the crate is built from the application's own
/// source tree; otherwise pass an anchor explicitly.
impl Default for Layout {
    fn default() -> Self {
        Self::new(CRATE_ANCHOR)
    }
}

impl Layout {
    /// Layout anchored at `anchor`, ascending [`DEFAULT_LEVELS`] parents
    pub fn new(anchor: impl Into<PathBuf>) -> Self {
        Self {
            anchor: anchor.into(),
            levels: DEFAULT_LEVELS,
        }
    }

    /// Layout whose base path is `base` itself
    pub fn rooted(base: impl Into<PathBuf>) -> Self {
        Self::new(base).with_levels(0)
    }

    /// Override the default ascent depth
    #[must_use]
    pub fn with_levels(mut self, levels: usize) -> Self {
        self.levels = levels;
        self
    }

    pub fn anchor(&self) -> &Path {
        &self.anchor
    }

    pub const fn levels(&self) -> usize {
        self.levels
    }

    /// Base directory at the layout's default depth
    pub fn base_path(&self) -> String {
        self.base_path_at(self.levels)
    }

    /// Base directory after ascending `levels` parents from the anchor
    ///
    /// Ascending past the root stops at the root. A relative anchor that runs
    /// out of components yields `"."`.
    pub fn base_path_at(&self, levels: usize) -> String {
        let base = self
            .anchor
            .ancestors()
            .nth(levels)
            .or_else(|| self.anchor.ancestors().last())
            .unwrap_or(self.anchor.as_path());

        if base.as_os_str().is_empty() {
            ".".to_string()
        } else {
            base.to_string_lossy().into_owned()
        }
    }

    /// Resolve one directory of the layout
    pub fn path(&self, dir: AppDir) -> String {
        join(&self.base_path(), dir.suffix())
    }

    /// Resolve `relative` inside one directory of the layout
    ///
    /// ```
    /// use webhelpers::{AppDir, Layout};
    ///
    /// let layout = Layout::rooted("/srv/app");
    /// assert_eq!(layout.resolve(AppDir::Logs, "error.log"), "/srv/app/storage/logs/error.log");
    /// ```
    pub fn resolve(&self, dir: AppDir, relative: &str) -> String {
        join(&self.path(dir), relative)
    }

    pub fn config_path(&self) -> String {
        self.path(AppDir::Config)
    }

    pub fn storage_path(&self) -> String {
        self.path(AppDir::Storage)
    }

    pub fn app_path(&self) -> String {
        self.path(AppDir::App)
    }

    pub fn http_path(&self) -> String {
        self.path(AppDir::Http)
    }

    pub fn controller_path(&self) -> String {
        self.path(AppDir::Controllers)
    }

    pub fn middleware_path(&self) -> String {
        self.path(AppDir::Middleware)
    }

    pub fn model_path(&self) -> String {
        self.path(AppDir::Models)
    }

    pub fn public_path(&self) -> String {
        self.path(AppDir::Public)
    }

    /// Same directory as [`Layout::public_path`]
    pub fn asset_path(&self) -> String {
        self.public_path()
    }

    /// Views directory, with a trailing slash
    pub fn view_path(&self) -> String {
        self.path(AppDir::Views)
    }

    pub fn components_path(&self) -> String {
        self.path(AppDir::Components)
    }

    pub fn lang_path(&self) -> String {
        self.path(AppDir::Lang)
    }

    pub fn routes_path(&self) -> String {
        self.path(AppDir::Routes)
    }

    pub fn framework_path(&self) -> String {
        self.path(AppDir::Framework)
    }

    pub fn cache_path(&self) -> String {
        self.path(AppDir::Cache)
    }

    pub fn session_path(&self) -> String {
        self.path(AppDir::Sessions)
    }

    pub fn log_path(&self) -> String {
        self.path(AppDir::Logs)
    }

    pub fn lib_path(&self) -> String {
        self.path(AppDir::Lib)
    }

    pub fn database_path(&self) -> String {
        self.path(AppDir::Database)
    }
}

/// Join with exactly one separator between `base` and `relative`
fn join(base: &str, relative: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        relative.trim_start_matches('/')
    )
}
