use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub mod command;
pub mod paths;
pub mod template;

/// Validated parameters for a single generation run.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    app_name: String,
    target_parent: PathBuf,
    domain: String,
    generate_native_source: bool,
}

impl GenerationRequest {
    pub fn new(
        app_name: &str,
        target_parent: &Path,
        domain: &str,
        generate_native_source: bool,
    ) -> Result<Self> {
        let app_name = app_name.trim();
        if app_name.is_empty() {
            anyhow::bail!("application name must not be empty");
        }
        let domain = domain.trim();
        if domain.is_empty() {
            anyhow::bail!("domain must not be empty");
        }
        Ok(Self {
            app_name: app_name.to_string(),
            target_parent: target_parent.to_path_buf(),
            domain: domain.to_string(),
            generate_native_source,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn target_parent(&self) -> &Path {
        &self.target_parent
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn generate_native_source(&self) -> bool {
        self.generate_native_source
    }

    /// Package name of the generated application, `<domain>.<appname>`.
    pub fn app_package(&self) -> String {
        format!("{}.{}", self.domain, self.app_name.to_lowercase())
    }
}

/// Root of the cinder checkout this tool is installed in.
///
/// `CINDER_PATH` takes precedence; otherwise the root is derived from the
/// location of the executable, which lives in `tools/androidstudio/`.
pub fn library_root() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("CINDER_PATH") {
        return dunce::canonicalize(&path)
            .with_context(|| format!("CINDER_PATH does not point at a cinder checkout: {path}"));
    }
    let exe = std::env::current_exe()?;
    let root = exe
        .ancestors()
        .nth(3)
        .context("executable is not installed under tools/androidstudio")?;
    dunce::canonicalize(root).context("failed to locate the cinder root")
}

/// Template tree shipped with the tool.
pub fn templates_dir(library_root: &Path) -> PathBuf {
    library_root
        .join("tools")
        .join("androidstudio")
        .join("templates")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_package_is_domain_dot_lowercase_name() {
        let request =
            GenerationRequest::new("MyCinderApp", Path::new("."), "org.libcinder.samples", true)
                .unwrap();
        assert_eq!(request.app_package(), "org.libcinder.samples.mycinderapp");
    }

    #[test]
    fn request_trims_name_and_domain() {
        let request =
            GenerationRequest::new("  MyApp  ", Path::new("."), " com.example ", false).unwrap();
        assert_eq!(request.app_name(), "MyApp");
        assert_eq!(request.domain(), "com.example");
        assert_eq!(request.app_package(), "com.example.myapp");
    }

    #[test]
    fn request_rejects_blank_inputs() {
        assert!(GenerationRequest::new("   ", Path::new("."), "com.example", true).is_err());
        assert!(GenerationRequest::new("MyApp", Path::new("."), "", true).is_err());
    }
}
