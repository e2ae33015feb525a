use crate::error::{Error, Result};
use crate::package::Package;
use regex::Regex;

const NAME_PATTERN: &str = r"^[a-zA-Z0-9][a-zA-Z0-9_-]*$";
const RECOMMENDED_NAME_PATTERN: &str = r"^[a-z][a-z0-9_]*$";
const VERSION_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)$";
const EMAIL_PATTERN: &str =
    r"^[-a-zA-Z0-9_%+]+(\.[-a-zA-Z0-9_%+]+)*@[-a-zA-Z0-9%]+(\.[-a-zA-Z0-9%]+)*\.[a-zA-Z]{2,}$";

fn pattern(re: &str) -> Result<Regex> {
    Regex::new(re).map_err(|e| Error::Other(anyhow::anyhow!("Invalid pattern '{re}': {e}")))
}

/// Checks the package record and reports every problem at once.
pub fn validate_package(package: &Package) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if package.name.is_empty() {
        errors.push("Package name must not be empty".to_string());
    } else if !pattern(NAME_PATTERN)?.is_match(&package.name) {
        errors.push(format!(
            "Package name '{}' does not follow naming conventions",
            package.name
        ));
    } else if !pattern(RECOMMENDED_NAME_PATTERN)?.is_match(&package.name) {
        log::warn!(
            "Package name '{}' should start with a lowercase letter and only contain lowercase letters, digits and underscores",
            package.name
        );
    }

    if !pattern(VERSION_PATTERN)?.is_match(&package.version) {
        errors.push(format!(
            "Package version '{}' does not follow version conventions",
            package.version
        ));
    }

    if package.maintainers.is_empty() {
        errors.push("Package must declare at least one maintainer".to_string());
    }
    let email = pattern(EMAIL_PATTERN)?;
    for person in package.maintainers.iter().chain(package.authors.iter()) {
        if person.name.trim().is_empty() {
            errors.push("Person name must not be empty".to_string());
        }
        if let Some(address) = &person.email {
            if !email.is_match(address) {
                errors.push(format!("Invalid email '{}' for person '{}'", address, person.name));
            }
        }
    }

    if package.licenses.is_empty() {
        errors.push("Package must declare at least one license".to_string());
    }
    if package.licenses.iter().any(|l| l.trim().is_empty()) {
        errors.push("License must not be empty".to_string());
    }

    for (kind, dependency) in package.all_dependencies() {
        if dependency.name.trim().is_empty() {
            errors.push(format!("{kind} name must not be empty"));
        }
    }

    for url in &package.urls {
        if let Err(e) = url::Url::parse(&url.url) {
            errors.push(format!("Invalid url '{}': {}", url.url, e));
        }
    }

    for export in &package.exports {
        if export.tagname.trim().is_empty() {
            errors.push("Export tag name must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(Error::ValidationError(errors.join("; ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::package::{Dependency, Person, Url};

    fn valid_package() -> Package {
        let mut package = Package::new("foo");
        package.licenses = vec!["BSD".to_string()];
        package.maintainers = vec![Person::with_email("Jane Doe", "doe@todo.todo")];
        package
    }

    #[test]
    fn accepts_minimal_package() {
        assert!(validate_package(&valid_package()).is_ok());
    }

    #[test]
    fn collects_every_problem() {
        let mut package = valid_package();
        package.name = "foo bar".to_string();
        package.version = "1.0".to_string();
        package.licenses.clear();
        let err = validate_package(&package).unwrap_err().to_string();
        assert!(err.contains("naming conventions"));
        assert!(err.contains("version conventions"));
        assert!(err.contains("at least one license"));
    }

    #[test]
    fn rejects_missing_maintainer_and_bad_email() {
        let mut package = valid_package();
        package.maintainers.clear();
        package.authors = vec![Person::with_email("Al", "not-an-address")];
        let err = validate_package(&package).unwrap_err().to_string();
        assert!(err.contains("at least one maintainer"));
        assert!(err.contains("not-an-address"));
    }

    #[test]
    fn rejects_unnamed_dependency_and_bad_url() {
        let mut package = valid_package();
        package.run_depends = vec![Dependency::new("")];
        package.urls = vec![Url::new("not a url", None)];
        let err = validate_package(&package).unwrap_err().to_string();
        assert!(err.contains("run_depend name must not be empty"));
        assert!(err.contains("Invalid url 'not a url'"));
    }

    #[test]
    fn uppercase_name_is_allowed() {
        let mut package = valid_package();
        package.name = "FooBar".to_string();
        assert!(validate_package(&package).is_ok());
    }
}
