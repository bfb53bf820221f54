use crate::GenerationRequest;
use anyhow::Result;
use std::path::{Component, Path, PathBuf};

/// Locations a generation run reads from and writes to, computed once per
/// request.
///
/// The relative paths are what the generated build files use to locate the
/// cinder checkout, so a project keeps building after being moved together
/// with the checkout.
#[derive(Clone, Debug)]
pub struct ResolvedPaths {
    pub library_root: PathBuf,
    pub project_root: PathBuf,
    pub app_dir: PathBuf,
    pub library_rel_from_project: PathBuf,
    pub library_rel_from_app: PathBuf,
}

impl ResolvedPaths {
    pub fn resolve(library_root: &Path, request: &GenerationRequest) -> Result<Self> {
        let library_root = absolute(library_root)?;
        let project_root = project_root(request.target_parent(), request.app_name())?;
        let app_dir = project_root
            .join("androidstudio")
            .join(request.app_name())
            .join("app");
        let library_rel_from_project = relative_path(&project_root, &library_root);
        let library_rel_from_app = relative_path(&app_dir, &library_root);
        Ok(Self {
            library_root,
            project_root,
            app_dir,
            library_rel_from_project,
            library_rel_from_app,
        })
    }
}

/// Absolute root of the generated project.
///
/// A target parent of `.` (or an empty path) selects the current directory
/// itself, without an `<AppName>` directory underneath it.
pub fn project_root(target_parent: &Path, app_name: &str) -> Result<PathBuf> {
    if target_parent == Path::new(".") || target_parent == Path::new("") {
        absolute(Path::new("."))
    } else {
        Ok(absolute(target_parent)?.join(app_name))
    }
}

/// Lexical absolutization. The path is joined onto the current directory if
/// needed and normalized without touching the filesystem, so it works for
/// directories that don't exist yet.
pub fn absolute(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };
    Ok(normalize(&path))
}

/// Removes `.` components and resolves `..` against the preceding segment.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            component => out.push(component.as_os_str()),
        }
    }
    out
}

/// Relative path from `from` to `to`, both absolute and normalized.
///
/// Pure component arithmetic: strip the longest common prefix, then one
/// `..` per remaining `from` segment followed by the remaining `to`
/// segments. Paths that share no root cannot occur here (both inputs derive
/// from the same filesystem root); the target is returned verbatim in that
/// case rather than failing.
pub fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();
    if common == 0 {
        return to.iter().map(|component| component.as_os_str()).collect();
    }
    let mut rel = PathBuf::new();
    for _ in &from[common..] {
        rel.push("..");
    }
    for component in &to[common..] {
        rel.push(component.as_os_str());
    }
    rel
}
