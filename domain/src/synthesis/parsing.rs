//! Parsing of untrusted model responses into synthesis structures.
//!
//! The model returns opaque text that merely claims to be JSON. Parsing is
//! an explicit attempt-then-validate step returning a tagged result:
//! `Some(ParsedSynthesis)` only when the response satisfies the full
//! `{reason, steps[]}` contract, `None` for everything else so the caller
//! takes its deterministic fallback branch. There is no catch-all that
//! could mask unrelated bugs.

/// A validated `{reason, steps[]}` payload extracted from a model response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSynthesis {
    /// Present when the model supplied a non-empty reason string
    pub reason: Option<String>,
    /// Always non-empty; every element is a string from the response
    pub steps: Vec<String>,
}

/// Strip an optional Markdown code fence from a model response.
///
/// Models frequently wrap JSON in ```` ```json ```` or bare ```` ``` ````
/// fences despite instructions. Returns the fenced body when a complete
/// fence pair is present, otherwise the trimmed input unchanged.
pub fn strip_code_fences(response: &str) -> &str {
    let trimmed = response.trim();

    let Some(open) = trimmed.find("```") else {
        return trimmed;
    };
    // Body starts after the rest of the fence line (e.g. a "json" tag)
    let after_open = &trimmed[open + 3..];
    let Some(newline) = after_open.find('\n') else {
        return trimmed;
    };
    let body = &after_open[newline + 1..];

    match body.find("```") {
        Some(close) => body[..close].trim(),
        // Lone opening fence: leave the input alone rather than guessing
        None => trimmed,
    }
}

/// Parse a model response against the fixed `{reason, steps[]}` schema.
///
/// Validation failures all map to `None`:
/// - response is not JSON (after defensive fence stripping),
/// - `steps` key missing or not an array,
/// - any `steps` element is not a string,
/// - `steps` is empty.
///
/// A `category` field in the response is deliberately ignored: the
/// independent classifier is authoritative and the caller stamps its
/// verdict afterwards.
pub fn parse_synthesis_response(response: &str) -> Option<ParsedSynthesis> {
    let body = strip_code_fences(response);
    let value: serde_json::Value = serde_json::from_str(body).ok()?;

    let raw_steps = value.get("steps")?.as_array()?;
    if raw_steps.is_empty() {
        return None;
    }
    let mut steps = Vec::with_capacity(raw_steps.len());
    for item in raw_steps {
        steps.push(item.as_str()?.to_string());
    }

    let reason = value
        .get("reason")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    Some(ParsedSynthesis { reason, steps })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_json() {
        let response = r#"{"reason": "card expired", "steps": ["verify identity", "update card"]}"#;
        let parsed = parse_synthesis_response(response).unwrap();
        assert_eq!(parsed.reason.as_deref(), Some("card expired"));
        assert_eq!(parsed.steps, vec!["verify identity", "update card"]);
    }

    #[test]
    fn test_parse_fenced_json() {
        let response = "Here you go:\n```json\n{\"reason\": \"r\", \"steps\": [\"a\", \"b\"]}\n```\n";
        let parsed = parse_synthesis_response(response).unwrap();
        assert_eq!(parsed.steps, vec!["a", "b"]);

        let bare = "```\n{\"steps\": [\"a\"]}\n```";
        assert!(parse_synthesis_response(bare).is_some());
    }

    #[test]
    fn test_missing_reason_is_allowed() {
        let parsed = parse_synthesis_response(r#"{"steps": ["only step"]}"#).unwrap();
        assert_eq!(parsed.reason, None);
        assert_eq!(parsed.steps.len(), 1);
    }

    #[test]
    fn test_category_field_is_ignored() {
        let response = r#"{"category": "Invented Label", "reason": "r", "steps": ["s"]}"#;
        let parsed = parse_synthesis_response(response).unwrap();
        assert_eq!(parsed.steps, vec!["s"]);
    }

    #[test]
    fn test_malformed_responses_are_none() {
        // Not JSON at all
        assert!(parse_synthesis_response("I cannot help with that.").is_none());
        // Missing steps key
        assert!(parse_synthesis_response(r#"{"reason": "r"}"#).is_none());
        // steps is not a list
        assert!(parse_synthesis_response(r#"{"steps": "do things"}"#).is_none());
        // steps contains a non-string
        assert!(parse_synthesis_response(r#"{"steps": ["a", 2]}"#).is_none());
        // steps is empty
        assert!(parse_synthesis_response(r#"{"steps": []}"#).is_none());
        // Empty input
        assert!(parse_synthesis_response("").is_none());
    }

    #[test]
    fn test_strip_fences_no_fence() {
        assert_eq!(strip_code_fences("  {\"a\": 1}  "), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_fences_unterminated() {
        // Lone opening fence: leave the input alone rather than guessing
        let input = "```json\n{\"steps\": [\"a\"]}";
        assert_eq!(strip_code_fences(input), input.trim());
    }
}
