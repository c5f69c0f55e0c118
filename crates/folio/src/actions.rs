use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::Value;

use crate::models::Action;

lazy_static! {
    /// Canned follow-up queries for the action ids the backend emits.
    static ref ACTION_QUERIES: HashMap<&'static str, &'static str> = HashMap::from([
        ("top_movers", "Show my top movers today."),
        ("breakdown", "Give me a breakdown of today's performance."),
        ("headlines", "Show me the latest headlines relevant to my holdings."),
        ("portfolio_impact", "What is the impact on my portfolio?"),
        ("risk_exposure", "Summarise my currency and sector exposure."),
    ]);
}

/// Turn a suggested action into the follow-up query to resubmit.
///
/// Unmapped ids fall back to the action's label verbatim. Arguments, when
/// present, are appended as a parenthesized `key=value` list in the order the
/// backend sent them.
pub fn resolve_query(action: &Action) -> String {
    let base = ACTION_QUERIES
        .get(action.id.as_str())
        .copied()
        .unwrap_or(action.label.as_str());

    match &action.args {
        Some(args) if !args.is_empty() => {
            let rendered = args
                .iter()
                .map(|(key, value)| format!("{}={}", key, render_scalar(value)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{} ({})", base, rendered)
        }
        _ => base.to_string(),
    }
}

// Strings render bare, everything else as its JSON text.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn action(id: &str, label: &str, args: Option<Map<String, Value>>) -> Action {
        Action {
            id: id.to_string(),
            label: label.to_string(),
            args,
        }
    }

    #[test]
    fn test_mapped_id_with_args() {
        let mut args = Map::new();
        args.insert("period".to_string(), json!("1d"));
        let action = action("top_movers", "Movers", Some(args));

        assert_eq!(
            resolve_query(&action),
            "Show my top movers today. (period=1d)"
        );
    }

    #[test]
    fn test_unmapped_id_uses_label() {
        let action = action("custom_x", "Custom Thing", None);
        assert_eq!(resolve_query(&action), "Custom Thing");
    }

    #[test]
    fn test_args_keep_insertion_order() {
        let mut args = Map::new();
        args.insert("period".to_string(), json!("1w"));
        args.insert("limit".to_string(), json!(5));
        args.insert("gainers_only".to_string(), json!(true));
        let action = action("breakdown", "Breakdown", Some(args));

        assert_eq!(
            resolve_query(&action),
            "Give me a breakdown of today's performance. (period=1w, limit=5, gainers_only=true)"
        );
    }

    #[test]
    fn test_empty_args_append_nothing() {
        let action = action("headlines", "Headlines", Some(Map::new()));
        assert_eq!(
            resolve_query(&action),
            "Show me the latest headlines relevant to my holdings."
        );
    }
}
