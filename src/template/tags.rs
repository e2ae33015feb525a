//! One line of manifest markup per metadata value.

use crate::package::{Dependency, DependencyKind, Export, Person, Url};

/// `  <kind attr="v">name</kind>`; version attributes only for `*_depend` kinds.
pub fn depend_tag(kind: DependencyKind, dependency: &Dependency) -> String {
    let versions: String = if kind.carries_version() {
        dependency
            .version_constraints()
            .iter()
            .filter_map(|(key, value)| value.map(|v| format!(" {key}=\"{v}\"")))
            .collect()
    } else {
        String::new()
    };
    format!("  <{kind}{versions}>{}</{kind}>\n", dependency.name)
}

/// `  <role email="addr">name</role>`, without the attribute when there is no email.
pub fn person_tag(role: &str, person: &Person) -> String {
    let email = match &person.email {
        Some(address) => format!(" email=\"{address}\""),
        None => String::new(),
    };
    format!("  <{role}{email}>{}</{role}>\n", person.name)
}

pub fn license_tag(license: &str) -> String {
    format!("  <license>{license}</license>\n")
}

pub fn url_tag(url: &Url) -> String {
    let url_type = match &url.url_type {
        Some(t) => format!(" type=\"{t}\""),
        None => String::new(),
    };
    format!("    <url{url_type} >{}</url>\n", url.url)
}

/// Self-closing export tag, or `None` when the export carries content.
pub fn export_tag(export: &Export) -> Option<String> {
    if export.content.is_some() {
        return None;
    }
    let attributes: String =
        export.attributes.iter().map(|(k, v)| format!(" {k}=\"{v}\"")).collect();
    Some(format!("    <{}{attributes}/>\n", export.tagname))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depend_tag_lists_versions_in_fixed_order() {
        let dependency = Dependency {
            version_gte: Some("1.2.0".to_string()),
            version_lt: Some("2.0.0".to_string()),
            ..Dependency::new("roscpp")
        };
        assert_eq!(
            depend_tag(DependencyKind::BuildDepend, &dependency),
            "  <build_depend version_lt=\"2.0.0\" version_gte=\"1.2.0\">roscpp</build_depend>\n"
        );
    }

    #[test]
    fn conflict_tag_drops_versions() {
        let dependency =
            Dependency { version_eq: Some("0.1.0".to_string()), ..Dependency::new("old_pkg") };
        assert_eq!(
            depend_tag(DependencyKind::Conflict, &dependency),
            "  <conflict>old_pkg</conflict>\n"
        );
    }

    #[test]
    fn person_tag_with_and_without_email() {
        assert_eq!(person_tag("author", &Person::new("Bea")), "  <author>Bea</author>\n");
        let tag = person_tag("maintainer", &Person::with_email("Jo", "jo@example.com"));
        assert_eq!(tag, "  <maintainer email=\"jo@example.com\">Jo</maintainer>\n");
        assert_eq!(tag.matches("email=").count(), 1);
    }

    #[test]
    fn license_and_url_lines() {
        assert_eq!(license_tag("BSD"), "  <license>BSD</license>\n");
        assert_eq!(
            url_tag(&Url::new("http://wiki.ros.org/foo", Some("website"))),
            "    <url type=\"website\" >http://wiki.ros.org/foo</url>\n"
        );
        assert_eq!(url_tag(&Url::new("http://x.org", None)), "    <url >http://x.org</url>\n");
    }

    #[test]
    fn export_tag_renders_attributes() {
        let export = Export::new("test").with_attribute("lang", "python");
        assert_eq!(export_tag(&export).as_deref(), Some("    <test lang=\"python\"/>\n"));
        assert_eq!(export_tag(&Export::new("metapackage")).as_deref(), Some("    <metapackage/>\n"));
    }

    #[test]
    fn export_tag_keeps_repeated_attributes() {
        let export = Export::new("plugin").with_attribute("lang", "cpp").with_attribute("lang", "python");
        assert_eq!(
            export_tag(&export).as_deref(),
            Some("    <plugin lang=\"cpp\" lang=\"python\"/>\n")
        );
    }

    #[test]
    fn export_with_content_is_not_rendered() {
        let export = Export::new("rosdoc").with_content("config.yaml");
        assert!(export_tag(&export).is_none());
    }
}
