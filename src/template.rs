use crate::paths::ResolvedPaths;
use crate::GenerationRequest;
use anyhow::{Context, Result};
use path_slash::PathExt;
use std::path::Path;
use walkdir::WalkDir;

pub const APP_NAME: &str = "$<<APPNAME>>";
pub const LIBRARY_RELPATH: &str = "$<<LIBRARY_RELPATH>>";
pub const LIBRARY_RELPATH_APP: &str = "$<<LIBRARY_RELPATH_APP>>";
pub const APP_PACKAGE: &str = "$<<APP_PACKAGE>>";

/// The closed set of template markers, bound to the values of one request.
///
/// Relative paths are rendered with forward slashes so the generated build
/// files are identical on every host.
pub struct Tokens {
    bindings: [(&'static str, String); 4],
}

impl Tokens {
    pub fn new(request: &GenerationRequest, paths: &ResolvedPaths) -> Self {
        Self {
            bindings: [
                (APP_NAME, request.app_name().to_string()),
                (
                    LIBRARY_RELPATH,
                    paths.library_rel_from_project.to_slash_lossy().into_owned(),
                ),
                (
                    LIBRARY_RELPATH_APP,
                    paths.library_rel_from_app.to_slash_lossy().into_owned(),
                ),
                (APP_PACKAGE, request.app_package()),
            ],
        }
    }

    fn apply(&self, line: &str) -> String {
        let mut line = line.to_string();
        for (marker, value) in &self.bindings {
            line = line.replace(marker, value);
        }
        line
    }
}

/// Instantiates a single template file.
///
/// Lines without a marker pass through byte for byte, including their line
/// endings. The destination is created or truncated unconditionally; the
/// skip-if-exists guard for the application source belongs to the caller.
pub fn rewrite(src: &Path, dest: &Path, tokens: &Tokens) -> Result<()> {
    let contents = std::fs::read_to_string(src)
        .with_context(|| format!("missing template file {}", src.display()))?;
    if let Some(parent) = dest.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut out = String::with_capacity(contents.len());
    for line in contents.split_inclusive('\n') {
        out.push_str(&tokens.apply(line));
    }
    std::fs::write(dest, out).with_context(|| format!("failed to write {}", dest.display()))
}

/// Mirrors the static part of a template tree under `dest`.
///
/// Hidden files (leading `.`) are skipped so VCS and editor droppings in
/// the template tree never reach a generated project. Directory names are
/// not filtered, only leaf files.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry =
            entry.with_context(|| format!("missing template directory {}", src.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        let rel = entry.path().strip_prefix(src)?;
        let target = dest.join(rel);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::copy(entry.path(), &target)
            .with_context(|| format!("failed to copy template file {}", rel.display()))?;
        copy_mtime(entry.path(), &target)?;
    }
    Ok(())
}

fn copy_mtime(src: &Path, dest: &Path) -> Result<()> {
    let modified = std::fs::metadata(src)?.modified()?;
    std::fs::File::options()
        .write(true)
        .open(dest)?
        .set_modified(modified)?;
    Ok(())
}
