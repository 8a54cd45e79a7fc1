//! Prompt Composer - Embed the folder path in the template and frame it
//!
//! Composition is a pure function of the folder path and the template text.

/// Token in the template that is replaced by the folder path line
pub const PLACEHOLDER: &str = "{terraform_code_path}";

/// Replace every placeholder in `template` with a `TERRAFORM_FOLDER_PATH:` line
pub fn substitute_path(template: &str, folder_path: &str) -> String {
    template.replace(PLACEHOLDER, &format!("TERRAFORM_FOLDER_PATH: {}", folder_path))
}

/// Build the full request handed to the coding agent
///
/// # Arguments
/// * `folder_path` - Folder holding the Terraform configuration
/// * `template` - Testing guide text, usually containing [`PLACEHOLDER`]
pub fn compose_prompt(folder_path: &str, template: &str) -> String {
    let guide = substitute_path(template, folder_path);

    format!(
        r#"🎯 **TERRAFORM TEST GENERATION REQUEST**

Claude Code, I need you to generate comprehensive Terraform test cases for the infrastructure located at: `{folder}`

## Your Tasks:

### 1. Infrastructure Analysis
- Read and analyze all .tf files in the folder: `{folder}`
- Understand resources, modules, variables, data sources, and their relationships
- Identify key components that need testing coverage

### 2. Test Generation
Using the comprehensive prompt below as your guide, generate:
- **Unit tests** with mock providers (unit_*.tftest.hcl)
- **Integration tests** with real providers (integration_*.tftest.hcl)
- **Mock tests** with override patterns (mock_*.tftest.hcl)
- **Variable validation tests** with expect_failures
- **Coverage report** (coverage_report.md)
- **README documentation** (README.md)

### 3. File Creation
Write all test files directly to: `{folder}/tests/`

---

## COMPREHENSIVE TESTING GUIDE:

{guide}

---

🤖 **Start by reading the Terraform files, then generate the complete test suite following the above guidelines.**
"#,
        folder = folder_path,
        guide = guide,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitute_path() {
        let result = substitute_path("Analyze {terraform_code_path} now", "/a/b");
        assert_eq!(result, "Analyze TERRAFORM_FOLDER_PATH: /a/b now");
    }

    #[test]
    fn test_substitute_every_occurrence() {
        let result = substitute_path("{terraform_code_path}\n{terraform_code_path}", "/x");
        assert_eq!(result.matches("TERRAFORM_FOLDER_PATH: /x").count(), 2);
        assert!(!result.contains(PLACEHOLDER));
    }

    #[test]
    fn test_substitute_without_placeholder() {
        assert_eq!(substitute_path("no token here", "/a/b"), "no token here");
    }

    #[test]
    fn test_compose_contains_path_not_placeholder() {
        let result = compose_prompt("/a/b", "Guide for {terraform_code_path}");
        assert!(result.contains("/a/b"));
        assert!(!result.contains(PLACEHOLDER));
        assert!(result.contains("Guide for TERRAFORM_FOLDER_PATH: /a/b"));
    }

    #[test]
    fn test_compose_sections() {
        let result = compose_prompt("/infra/vpc", "guide");

        assert!(result.starts_with("🎯 **TERRAFORM TEST GENERATION REQUEST**"));
        assert!(result.contains(
            "\n\nClaude Code, I need you to generate comprehensive Terraform test cases for the infrastructure located at: `/infra/vpc`\n"
        ));
        assert!(result.contains("## Your Tasks:"));
        assert!(result.contains("### 1. Infrastructure Analysis"));
        assert!(result.contains("### 2. Test Generation"));
        assert!(result.contains("### 3. File Creation"));
        assert!(result.contains("## COMPREHENSIVE TESTING GUIDE:"));
        assert!(result.contains("Write all test files directly to: `/infra/vpc/tests/`"));
        assert!(result.trim_end().ends_with("following the above guidelines.**"));
    }

    #[test]
    fn test_compose_names_output_files() {
        let result = compose_prompt("/infra", "guide");
        for name in [
            "unit_*.tftest.hcl",
            "integration_*.tftest.hcl",
            "mock_*.tftest.hcl",
            "coverage_report.md",
            "README.md",
        ] {
            assert!(result.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_compose_is_deterministic() {
        let template = "## Rules\n{terraform_code_path}\n";
        assert_eq!(compose_prompt("/a/b", template), compose_prompt("/a/b", template));
    }

    #[test]
    fn test_compose_embeds_template_verbatim() {
        let template = "Line 1\n\nLine 3 with {{braces}} and $vars";
        let result = compose_prompt("/a", template);
        assert!(result.contains(template));
    }
}
