use crate::paths::ResolvedPaths;
use crate::template::{self, Tokens};
use crate::GenerationRequest;
use anyhow::{Context, Result};
use console::style;
use std::path::Path;

/// Files inside the skeleton that carry markers, rewritten in this order
/// over their statically copied counterparts.
const TEMPLATED_FILES: [&str; 4] = [
    "build.gradle",
    "app/build.gradle",
    "app/src/main/AndroidManifest.xml",
    "app/src/main/res/values/strings.xml",
];

/// Generates an Android Studio project for `request` under its target
/// directory.
///
/// Everything except the application source is refreshed on every run; the
/// source file is the one place users put hand-written code, so an existing
/// file wins over the template.
pub fn new(library_root: &Path, request: &GenerationRequest) -> Result<()> {
    let paths = ResolvedPaths::resolve(library_root, request)?;
    let tokens = Tokens::new(request, &paths);
    let templates = crate::templates_dir(&paths.library_root);

    if request.generate_native_source() {
        let source = paths
            .project_root
            .join("src")
            .join(format!("{}.cpp", request.app_name()));
        if source.exists() {
            println!(
                "{} {} already exists",
                style("[SKIP]").yellow(),
                source.display()
            );
        } else {
            template::rewrite(&templates.join("TemplateApp.cpp"), &source, &tokens)?;
        }
    }

    let studio_root = paths
        .project_root
        .join("androidstudio")
        .join(request.app_name());
    std::fs::create_dir_all(&studio_root)
        .with_context(|| format!("failed to create {}", studio_root.display()))?;

    let skeleton = templates.join("TemplateApp");
    template::copy_tree(&skeleton, &studio_root)?;
    for rel in TEMPLATED_FILES {
        template::rewrite(&skeleton.join(rel), &studio_root.join(rel), &tokens)?;
    }

    write_activity(request, &paths)?;

    println!(
        "{} {} ({}) generated at {}",
        style("[DONE]").green(),
        request.app_name(),
        request.app_package(),
        paths.project_root.display()
    );
    Ok(())
}

/// The activity is glue between android and the cinder runtime. It is
/// synthesized rather than templated and refreshed on every run.
fn write_activity(request: &GenerationRequest, paths: &ResolvedPaths) -> Result<()> {
    let package = request.app_package();
    let mut dir = paths.app_dir.join("src").join("main").join("java");
    for segment in package.split('.') {
        dir.push(segment);
    }
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;
    let class = format!("{}Activity", request.app_name());
    let contents = format!(
        r#"package {package};

import org.libcinder.app.CinderNativeActivity;

public class {class} extends CinderNativeActivity {{
    private static final String TAG = "{class}";
}}
"#
    );
    std::fs::write(dir.join(format!("{class}.java")), contents)
        .with_context(|| format!("failed to write {class}.java"))
}
