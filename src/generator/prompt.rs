use crate::models::ProjectDescription;

/// Prompt asking for six sections: services, component relationships,
/// scalability, cost, security and deployment.
pub const ARCHITECTURE_PROMPT_TEMPLATE: &str = include_str!("../../assets/architecture_prompt.txt");

const PLACEHOLDER: &str = "{project_description}";

/// Substitute the description into the template.
pub fn build_prompt(description: &ProjectDescription) -> String {
    ARCHITECTURE_PROMPT_TEMPLATE.replacen(PLACEHOLDER, description.as_str(), 1)
}
