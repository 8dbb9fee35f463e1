use anyhow::Result;
use ignore::overrides::OverrideBuilder;
use ignore::WalkBuilder;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::metadata::file_metadata;
use crate::models::FileMetadata;

/// Options controlling a filesystem scan
pub struct ScanOptions<'a> {
    /// Extra ignore globs on top of .gitignore and the built-in set
    pub custom_ignores: &'a [String],
    /// Apply the built-in ignore set (build output, VCS metadata, binaries)
    pub use_default_ignores: bool,
}

impl Default for ScanOptions<'_> {
    fn default() -> Self {
        ScanOptions {
            custom_ignores: &[],
            use_default_ignores: true,
        }
    }
}

// Directories and artifacts that are never worth analyzing
const DEFAULT_IGNORES: &[&str] = &[
    "node_modules",
    "vendor",
    "target",
    "dist",
    "build",
    ".git",
    ".svn",
    ".hg",
    ".idea",
    ".vscode",
    "__pycache__",
    "*.pyc",
    "*.pyo",
    "*.class",
    "*.o",
    "*.obj",
    "*.a",
    "*.lib",
    "*.so",
    "*.dylib",
    "*.dll",
    "*.exe",
    "*.out",
    "*.jar",
    "*.zip",
    "*.tar.gz",
    "*.log",
    "*.tmp",
    "*.swp",
    "*.bak",
    ".DS_Store",
    "Thumbs.db",
];

/// Walk the given roots and collect metadata for every file that survives
/// the ignore rules.
pub fn collect_files(roots: &[PathBuf], options: &ScanOptions) -> Result<Vec<FileMetadata>> {
    collect_files_with_extensions(roots, None, options)
}

/// Like [`collect_files`], but keeping only files whose extension (without
/// the leading dot, case-insensitive) is in `extensions`.
pub fn collect_files_with_extensions(
    roots: &[PathBuf],
    extensions: Option<&[String]>,
    options: &ScanOptions,
) -> Result<Vec<FileMetadata>> {
    let mut files = Vec::new();

    for root in roots {
        let mut builder = WalkBuilder::new(root);

        // Respect .gitignore files and the user's global git excludes
        builder.git_ignore(true);
        builder.git_global(true);
        builder.git_exclude(true);

        let mut patterns: Vec<String> = Vec::new();
        if options.use_default_ignores {
            patterns.extend(DEFAULT_IGNORES.iter().map(|pattern| pattern.to_string()));
        }
        patterns.extend(options.custom_ignores.iter().cloned());

        // A single override builder carries all ignore patterns
        let mut override_builder = OverrideBuilder::new(root);
        for pattern in &patterns {
            if let Err(err) = override_builder.add(&format!("!**/{}", pattern)) {
                warn!("skipping invalid ignore pattern {:?}: {}", pattern, err);
            }
        }
        match override_builder.build() {
            Ok(overrides) => {
                builder.overrides(overrides);
            }
            Err(err) => {
                warn!("failed to build ignore overrides: {}", err);
            }
        }

        for result in builder.build() {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!("error walking directory: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|file_type| file_type.is_file()) {
                continue;
            }

            if let Some(wanted) = extensions {
                let extension = entry
                    .path()
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or("")
                    .to_lowercase();
                if !wanted.iter().any(|ext| ext.eq_ignore_ascii_case(&extension)) {
                    continue;
                }
            }

            // A file vanishing mid-walk is not fatal to the scan
            match file_metadata(entry.path()) {
                Ok(meta) => files.push(meta),
                Err(err) => warn!("skipping {}: {}", entry.path().display(), err),
            }
        }
    }

    debug!("collected {} files from {} root(s)", files.len(), roots.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, rel: &str, content: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_default_ignores_prune_build_dirs() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(&dir, "src/lib.rs", "pub fn f() {}\n");
        touch(&dir, "node_modules/pkg/index.js", "module.exports = 1;\n");
        touch(&dir, "target/debug/app.d", "ignored\n");

        let roots = vec![dir.path().to_path_buf()];
        let files = collect_files(&roots, &ScanOptions::default()).unwrap();
        let names: Vec<_> = files.iter().map(|meta| meta.name.clone()).collect();
        assert_eq!(names, vec!["lib.rs"]);
    }

    #[test]
    fn test_custom_ignores() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(&dir, "keep.py", "x = 1\n");
        touch(&dir, "generated.py", "x = 2\n");

        let ignores = vec!["generated.py".to_string()];
        let options = ScanOptions {
            custom_ignores: &ignores,
            use_default_ignores: true,
        };
        let roots = vec![dir.path().to_path_buf()];
        let files = collect_files(&roots, &options).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "keep.py");
    }

    #[test]
    fn test_extension_filter() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        touch(&dir, "a.rs", "fn a() {}\n");
        touch(&dir, "b.py", "b = 1\n");
        touch(&dir, "c.go", "package c\n");

        let roots = vec![dir.path().to_path_buf()];
        let wanted = vec!["rs".to_string(), "go".to_string()];
        let mut files =
            collect_files_with_extensions(&roots, Some(&wanted), &ScanOptions::default()).unwrap();
        files.sort_by(|a, b| a.name.cmp(&b.name));
        let names: Vec<_> = files.iter().map(|meta| meta.name.clone()).collect();
        assert_eq!(names, vec!["a.rs", "c.go"]);
    }
}
