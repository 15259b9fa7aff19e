//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

/// A path stored with forward slashes regardless of platform.
///
/// All path manipulation happens on the normalized form; conversion to
/// the platform-native representation is deferred to I/O boundaries.
/// Config files, reports and backup names therefore always show the
/// same separator on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    /// Forward-slash form, never backslashes
    repr: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Backslashes are folded to forward slashes on the way in.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            repr: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.repr
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.repr)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let mut joined = self.repr.trim_end_matches('/').to_string();
        joined.push('/');
        joined.push_str(&segment.replace('\\', "/"));
        Self { repr: joined }
    }

    /// Get the parent directory.
    ///
    /// `None` for the root and for bare single-segment paths.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.repr.trim_end_matches('/');
        let idx = trimmed.rfind('/')?;
        let repr = if idx == 0 { "/" } else { &trimmed[..idx] };
        Some(Self { repr: repr.to_string() })
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        self.repr.trim_end_matches('/').rsplit('/').next()
    }

    /// Get the file name without its final extension.
    ///
    /// A leading dot does not start an extension, so `.gitignore`
    /// stems to `.gitignore`.
    pub fn file_stem(&self) -> Option<&str> {
        self.file_name().map(|name| match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        })
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 { None } else { Some(&name[idx + 1..]) }
        })
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.repr)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.repr)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}
