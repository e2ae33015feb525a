//! Package metadata record and the factory that fills it from a handful of inputs.

pub mod types;
pub mod validation;

pub use types::{Dependency, DependencyKind, Export, Person, Url};
pub use validation::validate_package;

use crate::constants::{
    BUILD_TOOL, DEFAULT_LICENSE, DEFAULT_VERSION, PLACEHOLDER_EMAIL_DOMAIN,
};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Metadata of a single package, as written to its manifest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Package {
    pub name: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_abi: Option<String>,
    pub description: String,
    pub maintainers: Vec<Person>,
    pub licenses: Vec<String>,
    pub urls: Vec<Url>,
    pub authors: Vec<Person>,
    pub buildtool_depends: Vec<Dependency>,
    pub build_depends: Vec<Dependency>,
    pub run_depends: Vec<Dependency>,
    pub test_depends: Vec<Dependency>,
    pub conflicts: Vec<Dependency>,
    pub replaces: Vec<Dependency>,
    pub exports: Vec<Export>,
}

impl Default for Package {
    fn default() -> Self {
        Self {
            name: String::new(),
            version: DEFAULT_VERSION.to_string(),
            version_abi: None,
            description: String::new(),
            maintainers: Vec::new(),
            licenses: Vec::new(),
            urls: Vec::new(),
            authors: Vec::new(),
            buildtool_depends: Vec::new(),
            build_depends: Vec::new(),
            run_depends: Vec::new(),
            test_depends: Vec::new(),
            conflicts: Vec::new(),
            replaces: Vec::new(),
            exports: Vec::new(),
        }
    }
}

impl Package {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    pub fn dependencies(&self, kind: DependencyKind) -> &[Dependency] {
        match kind {
            DependencyKind::BuildtoolDepend => &self.buildtool_depends,
            DependencyKind::BuildDepend => &self.build_depends,
            DependencyKind::RunDepend => &self.run_depends,
            DependencyKind::TestDepend => &self.test_depends,
            DependencyKind::Conflict => &self.conflicts,
            DependencyKind::Replace => &self.replaces,
        }
    }

    /// Every dependency paired with its kind, kinds in manifest order.
    pub fn all_dependencies(&self) -> impl Iterator<Item = (DependencyKind, &Dependency)> {
        DependencyKind::ALL
            .into_iter()
            .flat_map(move |kind| self.dependencies(kind).iter().map(move |dep| (kind, dep)))
    }

    pub fn validate(&self) -> Result<()> {
        validate_package(self)
    }
}

/// Inputs for [`PackageTemplate::create`], as collected by a command line.
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    pub name: String,
    pub description: Option<String>,
    pub licenses: Vec<String>,
    pub maintainer_names: Vec<String>,
    pub author_names: Vec<String>,
    pub version: Option<String>,
    pub catkin_deps: Vec<String>,
    /// Used as the only maintainer when `maintainer_names` is empty.
    pub default_maintainer: Option<String>,
}

/// A validated package plus the component list for the build description.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageTemplate {
    package: Package,
    catkin_deps: Vec<String>,
}

fn is_build_tool(name: &str) -> bool {
    name.to_lowercase() == BUILD_TOOL
}

/// Sorts names and drops every case-insensitive match of the build tool.
fn component_names<I: IntoIterator<Item = String>>(names: I) -> Vec<String> {
    let mut names: Vec<String> = names.into_iter().filter(|n| !is_build_tool(n)).collect();
    names.sort();
    names
}

/// `<last word of name>@todo.todo`
fn placeholder_email(name: &str) -> String {
    let local = name.split_whitespace().last().unwrap_or(name);
    format!("{local}@{PLACEHOLDER_EMAIL_DOMAIN}")
}

impl PackageTemplate {
    /// Wraps a fully specified package; components are its build dependencies.
    pub fn from_package(package: Package) -> Result<Self> {
        let catkin_deps = component_names(package.build_depends.iter().map(|d| d.name.clone()));
        Self::new(package, catkin_deps)
    }

    /// Normalizes and validates `package`.
    pub fn new(mut package: Package, catkin_deps: Vec<String>) -> Result<Self> {
        package.licenses.sort();
        package.licenses.dedup();
        package.validate()?;
        Ok(Self { package, catkin_deps })
    }

    /// Builds a starter package from command line style inputs.
    pub fn create(args: CreateArgs) -> Result<Self> {
        let mut licenses = if args.licenses.is_empty() {
            vec![DEFAULT_LICENSE.to_string()]
        } else {
            args.licenses
        };
        licenses.sort();

        let mut maintainer_names = if args.maintainer_names.is_empty() {
            args.default_maintainer.into_iter().collect()
        } else {
            args.maintainer_names
        };
        maintainer_names.sort();
        let maintainers = maintainer_names
            .iter()
            .map(|name| Person::with_email(name.as_str(), placeholder_email(name)))
            .collect();

        let mut author_names = args.author_names;
        author_names.sort();
        let authors = author_names.into_iter().map(Person::new).collect();

        let catkin_deps = component_names(args.catkin_deps);
        let build_depends = catkin_deps.iter().map(|d| Dependency::new(d.as_str())).collect();

        let package = Package {
            version: args.version.unwrap_or_else(|| DEFAULT_VERSION.to_string()),
            description: args
                .description
                .filter(|description| !description.is_empty())
                .unwrap_or_else(|| format!("The {} package", args.name)),
            name: args.name,
            licenses,
            maintainers,
            authors,
            build_depends,
            buildtool_depends: vec![Dependency::new(BUILD_TOOL)],
            ..Default::default()
        };

        Self::new(package, catkin_deps)
    }

    pub fn package(&self) -> &Package {
        &self.package
    }

    /// Component names for the build description, sorted.
    pub fn catkin_deps(&self) -> &[String] {
        &self.catkin_deps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(name: &str) -> CreateArgs {
        CreateArgs {
            name: name.to_string(),
            default_maintainer: Some("builder".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn create_fills_defaults() {
        let template = PackageTemplate::create(args("foo")).unwrap();
        let package = template.package();
        assert_eq!(package.version, "0.0.0");
        assert_eq!(package.description, "The foo package");
        assert_eq!(package.licenses, vec!["TODO"]);
        assert_eq!(package.maintainers, vec![Person::with_email("builder", "builder@todo.todo")]);
        assert!(package.authors.is_empty());
        assert_eq!(package.buildtool_depends, vec![Dependency::new("catkin")]);
        assert!(template.catkin_deps().is_empty());
    }

    #[test]
    fn create_replaces_empty_description() {
        let template = PackageTemplate::create(CreateArgs {
            description: Some(String::new()),
            ..args("foo")
        })
        .unwrap();
        assert_eq!(template.package().description, "The foo package");

        let template = PackageTemplate::create(CreateArgs {
            description: Some("Drives things".to_string()),
            ..args("foo")
        })
        .unwrap();
        assert_eq!(template.package().description, "Drives things");
    }

    #[test]
    fn create_sorts_names_and_synthesizes_emails() {
        let template = PackageTemplate::create(CreateArgs {
            licenses: vec!["MIT".to_string(), "BSD".to_string()],
            maintainer_names: vec!["Zoe Zed".to_string(), "Adam Ant".to_string()],
            author_names: vec!["Yuri".to_string(), "Bea".to_string()],
            ..args("foo")
        })
        .unwrap();
        let package = template.package();
        assert_eq!(package.licenses, vec!["BSD", "MIT"]);
        assert_eq!(
            package.maintainers,
            vec![
                Person::with_email("Adam Ant", "Ant@todo.todo"),
                Person::with_email("Zoe Zed", "Zed@todo.todo"),
            ]
        );
        assert_eq!(package.authors, vec![Person::new("Bea"), Person::new("Yuri")]);
    }

    #[test]
    fn create_removes_every_build_tool_entry() {
        let template = PackageTemplate::create(CreateArgs {
            catkin_deps: vec![
                "std_msgs".to_string(),
                "catkin".to_string(),
                "Catkin".to_string(),
                "CATKIN".to_string(),
                "geometry_msgs".to_string(),
            ],
            ..args("foo")
        })
        .unwrap();
        assert_eq!(template.catkin_deps(), ["geometry_msgs", "std_msgs"]);
        let names: Vec<_> =
            template.package().build_depends.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["geometry_msgs", "std_msgs"]);
    }

    #[test]
    fn create_without_any_maintainer_fails_validation() {
        let result = PackageTemplate::create(CreateArgs {
            name: "foo".to_string(),
            ..Default::default()
        });
        assert!(matches!(result, Err(crate::error::Error::ValidationError(_))));
    }

    #[test]
    fn from_package_derives_components_from_build_depends() {
        let mut package = Package::new("bar");
        package.licenses = vec!["MIT".to_string(), "BSD".to_string(), "MIT".to_string()];
        package.maintainers = vec![Person::with_email("Jo", "jo@example.com")];
        package.build_depends = vec![Dependency::new("roscpp"), Dependency::new("catkin")];
        let template = PackageTemplate::from_package(package).unwrap();
        assert_eq!(template.catkin_deps(), ["roscpp"]);
        assert_eq!(template.package().licenses, vec!["BSD", "MIT"]);
    }

    #[test]
    fn all_dependencies_follow_kind_order() {
        let mut package = Package::new("bar");
        package.replaces = vec![Dependency::new("old")];
        package.buildtool_depends = vec![Dependency::new("catkin")];
        let kinds: Vec<_> = package.all_dependencies().map(|(k, _)| k).collect();
        assert_eq!(kinds, [DependencyKind::BuildtoolDepend, DependencyKind::Replace]);
    }
}
