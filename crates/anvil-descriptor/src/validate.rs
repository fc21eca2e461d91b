//! Structural validation for module descriptors.
//!
//! Validation checks what serde cannot: uniqueness of dependency names,
//! exclusivity of the public/private lists, and well-formed artifact rules.
//! Errors make a descriptor unusable for configuration; warnings do not.

use std::collections::HashSet;

use crate::rules::ModuleRules;

/// A validation issue found in a module descriptor.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Severity: "error" or "warning".
    pub severity: &'static str,
    /// Human-readable description.
    pub message: String,
}

impl ValidationIssue {
    fn error(message: String) -> Self {
        ValidationIssue {
            severity: "error",
            message,
        }
    }

    fn warning(message: String) -> Self {
        ValidationIssue {
            severity: "warning",
            message,
        }
    }

    /// Whether this issue blocks configuration.
    pub fn is_error(&self) -> bool {
        self.severity == "error"
    }
}

/// Validate a module descriptor for structural correctness.
///
/// Returns `Ok(())` if valid, or `Err(issues)` with a list of problems.
pub fn validate(rules: &ModuleRules) -> Result<(), Vec<ValidationIssue>> {
    let mut issues = Vec::new();

    // 1. Dependency names are unique within each list
    check_duplicates(
        &rules.private_dependencies,
        "private-dependencies",
        &mut issues,
    );
    check_duplicates(
        &rules.public_dependencies,
        "public-dependencies",
        &mut issues,
    );

    // 2. A dependency is either private or public, never both
    let public: HashSet<&str> = rules.public_dependencies.iter().map(String::as_str).collect();
    for name in &rules.private_dependencies {
        if public.contains(name.as_str()) {
            issues.push(ValidationIssue::error(format!(
                "dependency '{name}' appears in both private-dependencies and public-dependencies"
            )));
        }
    }

    // 3. Duplicate definitions are harmless but sloppy
    check_duplicate_warnings(&rules.definitions.public, "definitions.public", &mut issues);
    check_duplicate_warnings(
        &rules.definitions.private,
        "definitions.private",
        &mut issues,
    );

    // 4. Shared library rules have a usable filename stem
    for lib in &rules.shared_libraries {
        if lib.base_name.is_empty() {
            issues.push(ValidationIssue::error(
                "shared library has an empty base-name".to_string(),
            ));
        } else if lib.base_name.contains('/') || lib.base_name.contains('\\') {
            issues.push(ValidationIssue::error(format!(
                "shared library base-name '{}' must be a filename stem, not a path",
                lib.base_name
            )));
        }
    }

    // 5. Third-party block is internally consistent
    if let Some(tp) = &rules.third_party {
        if tp.use_definition.is_empty() {
            issues.push(ValidationIssue::error(
                "third-party use-definition must not be empty".to_string(),
            ));
        }
        if tp.libraries.is_empty() {
            issues.push(ValidationIssue::warning(
                "third-party block lists no libraries; it will activate without include paths"
                    .to_string(),
            ));
        }
    }

    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn check_duplicates(names: &[String], list: &str, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            issues.push(ValidationIssue::error(format!(
                "duplicate dependency '{name}' in {list}"
            )));
        }
    }
}

fn check_duplicate_warnings(names: &[String], list: &str, issues: &mut Vec<ValidationIssue>) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name.as_str()) {
            issues.push(ValidationIssue::warning(format!(
                "duplicate definition '{name}' in {list}"
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::ModuleRules;

    fn parse(input: &str) -> ModuleRules {
        ModuleRules::parse(input).unwrap()
    }

    #[test]
    fn valid_descriptor_passes() {
        let rules = parse(
            r#"
private-dependencies = ["Core", "Engine"]
public-dependencies = ["ImporterCore"]

[module]
name = "Importer"
"#,
        );
        assert!(validate(&rules).is_ok());
    }

    #[test]
    fn duplicate_private_dependency_is_error() {
        let rules = parse(
            r#"
private-dependencies = ["Core", "Engine", "Core"]

[module]
name = "Importer"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues.iter().any(|i| i.is_error() && i.message.contains("duplicate dependency 'Core'")));
    }

    #[test]
    fn duplicate_public_dependency_is_error() {
        let rules = parse(
            r#"
public-dependencies = ["SceneCore", "SceneCore"]

[module]
name = "Importer"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("public-dependencies")));
    }

    #[test]
    fn dependency_in_both_lists_is_error() {
        let rules = parse(
            r#"
private-dependencies = ["Core", "SceneCore"]
public-dependencies = ["SceneCore"]

[module]
name = "Importer"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues
            .iter()
            .any(|i| i.is_error() && i.message.contains("both private-dependencies and public-dependencies")));
    }

    #[test]
    fn duplicate_definition_is_warning() {
        let rules = parse(
            r#"
[module]
name = "Importer"

[definitions]
private = ["WITH_FOO", "WITH_FOO"]
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn empty_base_name_is_error() {
        let rules = parse(
            r#"
[module]
name = "Importer"

[[shared-libraries]]
base-name = ""
directory = "Binaries/ThirdParty/Foo"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("empty base-name")));
    }

    #[test]
    fn path_in_base_name_is_error() {
        let rules = parse(
            r#"
[module]
name = "Importer"

[[shared-libraries]]
base-name = "sub/libfoo"
directory = "Binaries/ThirdParty/Foo"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("filename stem")));
    }

    #[test]
    fn empty_use_definition_is_error() {
        let rules = parse(
            r#"
[module]
name = "Importer"

[third-party]
root = "../ThirdParty"
libraries = ["sdk"]
use-definition = ""

[third-party.platform-definitions]
windows = "PLAT_WIN"
linux = "PLAT_LINUX"
mac = "PLAT_MAC"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert!(issues.iter().any(|i| i.message.contains("use-definition")));
    }

    #[test]
    fn empty_third_party_libraries_is_warning() {
        let rules = parse(
            r#"
[module]
name = "Importer"

[third-party]
root = "../ThirdParty"
use-definition = "USE_SDK"

[third-party.platform-definitions]
windows = "PLAT_WIN"
linux = "PLAT_LINUX"
mac = "PLAT_MAC"
"#,
        );
        let issues = validate(&rules).unwrap_err();
        assert_eq!(issues.len(), 1);
        assert!(!issues[0].is_error());
    }
}
