//! Quick-action prompts.
//!
//! A fixed lookup table mapping the three shortcut buttons to canned
//! prompts, always asked in analysis mode. No state; availability (non-empty
//! selection, no ask in flight) is the controller's concern.

/// The predefined prompt shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickAction {
    Connections,
    Summary,
    Insights,
}

impl QuickAction {
    pub const ALL: [QuickAction; 3] = [
        QuickAction::Connections,
        QuickAction::Summary,
        QuickAction::Insights,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickAction::Connections => "Find Connections",
            QuickAction::Summary => "Summarize All",
            QuickAction::Insights => "Key Insights",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuickAction::Connections => {
                "Analyze the selected documents and identify key connections, \
                 relationships, and patterns between them."
            }
            QuickAction::Summary => {
                "Provide a comprehensive summary of the selected documents, \
                 highlighting main topics and key findings."
            }
            QuickAction::Insights => {
                "Extract the most important insights and observations from the \
                 selected documents."
            }
        }
    }

    /// Parse a REPL/CLI name like "connections".
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "connections" => Some(QuickAction::Connections),
            "summary" => Some(QuickAction::Summary),
            "insights" => Some(QuickAction::Insights),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(QuickAction::parse("summary"), Some(QuickAction::Summary));
        assert_eq!(
            QuickAction::parse("CONNECTIONS"),
            Some(QuickAction::Connections)
        );
        assert_eq!(QuickAction::parse("insights"), Some(QuickAction::Insights));
        assert_eq!(QuickAction::parse("themes"), None);
    }

    #[test]
    fn test_every_action_has_a_prompt() {
        for action in QuickAction::ALL {
            assert!(!action.prompt().is_empty());
            assert!(!action.label().is_empty());
        }
    }
}
