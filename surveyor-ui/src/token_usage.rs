//! Formatting helper for AI token-usage metrics.

use serde::{Deserialize, Serialize};
use tracing::info;

/// Token counts reported by an AI assessment call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub model: String,
    #[serde(rename = "promptTokens")]
    pub prompt_tokens: u64,
    #[serde(rename = "completionTokens")]
    pub completion_tokens: u64,
    #[serde(rename = "totalTokens", skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
}

impl TokenUsage {
    /// Reported total, or prompt + completion when the caller omitted it.
    pub fn total(&self) -> u64 {
        self.total_tokens
            .unwrap_or(self.prompt_tokens + self.completion_tokens)
    }
}

/// Format a usage record as a single console line.
pub fn format_token_usage(usage: &TokenUsage) -> String {
    format!(
        "[token-usage] model={} prompt={} completion={} total={}",
        usage.model,
        usage.prompt_tokens,
        usage.completion_tokens,
        usage.total()
    )
}

/// Emit the formatted usage line through tracing.
pub fn log_token_usage(usage: &TokenUsage) {
    info!("{}", format_token_usage(usage));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_one_line_with_all_counts() {
        let usage = TokenUsage {
            model: "gpt-4o".to_string(),
            prompt_tokens: 1200,
            completion_tokens: 300,
            total_tokens: Some(1500),
        };
        assert_eq!(
            format_token_usage(&usage),
            "[token-usage] model=gpt-4o prompt=1200 completion=300 total=1500"
        );
    }

    #[test]
    fn total_falls_back_to_prompt_plus_completion() {
        let usage = TokenUsage {
            model: "gpt-4o-mini".to_string(),
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: None,
        };
        assert_eq!(usage.total(), 15);
        assert!(format_token_usage(&usage).ends_with("total=15"));
    }

    #[test]
    fn deserializes_camel_case_wire_names() {
        let usage: TokenUsage = serde_json::from_str(
            r#"{"model":"gpt-4o","promptTokens":7,"completionTokens":3}"#,
        )
        .unwrap();
        assert_eq!(usage.prompt_tokens, 7);
        assert_eq!(usage.total(), 10);
    }
}
