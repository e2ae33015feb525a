use serde::{Deserialize, Serialize};

/// A maintainer or author of a package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Person {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), email: None }
    }

    pub fn with_email<S: Into<String>, E: Into<String>>(name: S, email: E) -> Self {
        Self { name: name.into(), email: Some(email.into()) }
    }
}

/// A named dependency with optional version constraints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_eq: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_lt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_lte: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_gt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_gte: Option<String>,
}

impl Dependency {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into(), ..Default::default() }
    }

    /// Version constraints in attribute order, paired with their attribute name.
    pub fn version_constraints(&self) -> [(&'static str, Option<&str>); 5] {
        [
            ("version_eq", self.version_eq.as_deref()),
            ("version_lt", self.version_lt.as_deref()),
            ("version_lte", self.version_lte.as_deref()),
            ("version_gt", self.version_gt.as_deref()),
            ("version_gte", self.version_gte.as_deref()),
        ]
    }
}

/// The kind of a dependency, which is also its manifest tag name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DependencyKind {
    BuildtoolDepend,
    BuildDepend,
    RunDepend,
    TestDepend,
    Conflict,
    Replace,
}

impl DependencyKind {
    /// Every kind, in the order the manifest lists them.
    pub const ALL: [DependencyKind; 6] = [
        DependencyKind::BuildtoolDepend,
        DependencyKind::BuildDepend,
        DependencyKind::RunDepend,
        DependencyKind::TestDepend,
        DependencyKind::Conflict,
        DependencyKind::Replace,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            DependencyKind::BuildtoolDepend => "buildtool_depend",
            DependencyKind::BuildDepend => "build_depend",
            DependencyKind::RunDepend => "run_depend",
            DependencyKind::TestDepend => "test_depend",
            DependencyKind::Conflict => "conflict",
            DependencyKind::Replace => "replace",
        }
    }

    /// Conflicts and replacements never carry version attributes.
    pub fn carries_version(&self) -> bool {
        !matches!(self, DependencyKind::Conflict | DependencyKind::Replace)
    }
}

impl std::fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A package URL with an optional type such as `website` or `repository`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Url {
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub url_type: Option<String>,
}

impl Url {
    pub fn new<S: Into<String>>(url: S, url_type: Option<&str>) -> Self {
        Self { url: url.into(), url_type: url_type.map(str::to_string) }
    }
}

/// An entry of the manifest's `<export>` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Export {
    pub tagname: String,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Export {
    pub fn new<S: Into<String>>(tagname: S) -> Self {
        Self { tagname: tagname.into(), attributes: Vec::new(), content: None }
    }

    pub fn with_attribute<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.attributes.push((key.into(), value.into()));
        self
    }

    pub fn with_content<S: Into<String>>(mut self, content: S) -> Self {
        self.content = Some(content.into());
        self
    }
}
