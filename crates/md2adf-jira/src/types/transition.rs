//! Jira workflow transition types.

use serde::Deserialize;

/// Workflow transition available on an issue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transition {
    /// Transition ID.
    pub id: String,
    /// Transition name, usually the target status.
    pub name: String,
}

/// Transitions API response.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TransitionsResponse {
    pub(crate) transitions: Vec<Transition>,
}

/// Find a transition by name, ignoring case.
pub fn find_transition<'a>(transitions: &'a [Transition], name: &str) -> Option<&'a Transition> {
    let wanted = name.to_lowercase();
    transitions.iter().find(|t| t.name.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transitions() -> Vec<Transition> {
        serde_json::from_str(
            r#"[{"id": "11", "name": "To Do"}, {"id": "21", "name": "In Progress"}, {"id": "31", "name": "Done"}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_find_transition_ignores_case() {
        let all = transitions();
        let found = find_transition(&all, "in progress").unwrap();
        assert_eq!(found.id, "21");
    }

    #[test]
    fn test_find_transition_missing() {
        assert!(find_transition(&transitions(), "Blocked").is_none());
    }
}
