//! Prompt templates for the triage flow

use crate::core::category::Category;
use crate::corpus::entities::Exemplar;

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Single-turn classification prompt enumerating the closed category set
    pub fn classification(request: &str) -> String {
        let categories = Category::all()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"Categorize this customer request into one of these categories: {}

Customer request: {}

Respond with just the category name."#,
            categories, request
        )
    }

    /// System prompt for the synthesis call
    pub fn synthesis_system() -> &'static str {
        "You are a helpful customer service assistant that generates step-by-step instructions."
    }

    /// Few-shot synthesis prompt: exemplars in order, then the target
    /// request, then the fixed response schema.
    ///
    /// The schema deliberately has no category field; the caller stamps the
    /// classifier's verdict onto the result afterwards.
    pub fn synthesis(request: &str, exemplars: &[&Exemplar]) -> String {
        let mut examples_text = String::new();
        for (i, exemplar) in exemplars.iter().enumerate() {
            let steps_json =
                serde_json::to_string(&exemplar.steps).unwrap_or_else(|_| "[]".to_string());
            examples_text.push_str(&format!(
                "\nExample {}:\nCustomer: {}\nSteps: {}\n",
                i + 1,
                exemplar.reason,
                steps_json
            ));
        }

        format!(
            r#"You are a customer service assistant. Given a customer request, generate the steps needed to help them.

Few-shot examples:
{}

Now, generate steps for this customer request:
Customer: {}

Respond in JSON format:
{{
    "reason": "brief reason for the call",
    "steps": ["step 1", "step 2", "step 3"]
}}
"#,
            examples_text, request
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_lists_all_categories() {
        let prompt = PromptTemplate::classification("where is my order?");
        for category in Category::all() {
            assert!(prompt.contains(category.as_str()));
        }
        assert!(prompt.contains("where is my order?"));
    }

    #[test]
    fn test_synthesis_prompt_renders_exemplars_in_order() {
        let first = Exemplar::new(
            "a",
            "payment issue",
            vec!["verify identity".into()],
            Category::AccountBilling,
        );
        let second = Exemplar::new(
            "b",
            "late order",
            vec!["look up order".into()],
            Category::OrderStatus,
        );
        let prompt = PromptTemplate::synthesis("help me", &[&first, &second]);

        let pos_first = prompt.find("payment issue").unwrap();
        let pos_second = prompt.find("late order").unwrap();
        assert!(pos_first < pos_second);
        assert!(prompt.contains(r#"["verify identity"]"#));
        assert!(prompt.contains("help me"));
        assert!(prompt.contains("\"steps\""));
    }

    #[test]
    fn test_synthesis_prompt_zero_shot() {
        // Empty corpus means zero-shot operation; the prompt still works
        let prompt = PromptTemplate::synthesis("help me", &[]);
        assert!(prompt.contains("help me"));
        assert!(!prompt.contains("Example 1"));
    }
}
