//! Substitution contexts for the manifest and the build description.

use crate::package::{DependencyKind, Export, PackageTemplate};
use crate::renderer::Context;
use crate::template::tags::{depend_tag, export_tag, license_tag, person_tag, url_tag};
use std::io::Write;

/// `{name, components}` for `CMakeLists.txt`.
pub fn cmakelists_context(template: &PackageTemplate) -> Context {
    let components = if template.catkin_deps().is_empty() {
        String::new()
    } else {
        format!(" COMPONENTS {}", template.catkin_deps().join(" "))
    };

    let mut context = Context::new();
    context.insert("name".to_string(), template.package().name.clone());
    context.insert("components".to_string(), components);
    context
}

/// Every manifest placeholder rendered to text.
pub fn package_xml_context(template: &PackageTemplate) -> Context {
    let package = template.package();
    let mut context = Context::new();

    context.insert("name".to_string(), package.name.clone());
    context.insert("version".to_string(), package.version.clone());
    context.insert(
        "version_abi".to_string(),
        match package.version_abi.as_deref() {
            Some(abi) if !abi.is_empty() => format!(" abi=\"{abi}\""),
            _ => String::new(),
        },
    );
    context.insert(
        "description".to_string(),
        if package.description.is_empty() {
            format!("The {} package ...", package.name)
        } else {
            package.description.clone()
        },
    );
    context.insert(
        "licenses".to_string(),
        package.licenses.iter().map(|l| license_tag(l)).collect(),
    );
    context.insert(
        "maintainers".to_string(),
        package.maintainers.iter().map(|p| person_tag("maintainer", p)).collect(),
    );
    context.insert("urls".to_string(), package.urls.iter().map(url_tag).collect());
    context.insert(
        "authors".to_string(),
        package.authors.iter().map(|p| person_tag("author", p)).collect(),
    );
    context.insert("dependencies".to_string(), dependencies_fragment(template));
    context.insert("exports".to_string(), exports_fragment(&package.exports, std::io::stderr()));
    context.insert("components".to_string(), template.catkin_deps().join(" "));

    context
}

/// Dependency tags grouped by kind, each group sorted by name.
fn dependencies_fragment(template: &PackageTemplate) -> String {
    let package = template.package();
    let mut fragment = String::new();
    for kind in DependencyKind::ALL {
        let mut dependencies: Vec<_> = package.dependencies(kind).iter().collect();
        dependencies.sort_by(|a, b| a.name.cmp(&b.name));
        for dependency in dependencies {
            fragment.push_str(&depend_tag(kind, dependency));
        }
    }
    fragment
}

/// Export tags; an export with content is skipped with a `WARNING:` line on `warnings`.
fn exports_fragment(exports: &[Export], mut warnings: impl Write) -> String {
    let mut fragment = String::new();
    for export in exports {
        match export_tag(export) {
            Some(line) => fragment.push_str(&line),
            None => {
                if let Err(e) = writeln!(
                    warnings,
                    "WARNING: Create package does not know how to serialize exports with content: {}, {:?}, {}",
                    export.tagname,
                    export.attributes,
                    export.content.as_deref().unwrap_or_default()
                ) {
                    log::warn!("Failed to report skipped export: {e}");
                }
                log::debug!("Skipped export '{}'", export.tagname);
            }
        }
    }
    fragment
}
