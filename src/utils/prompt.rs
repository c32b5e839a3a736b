//! Interactive confirmation prompts.

use std::io::{self, BufRead, Write};

/// A yes/no question with the answer used when nobody can respond.
pub struct YesNoPrompt {
    pub question: String,
    pub default: bool,
}

/// Yes/no prompt engine with explicit interactive mode.
///
/// Non-interactive engines answer every prompt with its default, which
/// keeps scripted flows (and tests) free of stdin reads.
pub struct PromptEngine {
    interactive: bool,
}

impl PromptEngine {
    pub fn new() -> Self {
        Self { interactive: true }
    }

    /// Create engine with explicit interactive mode.
    pub fn with_interactive(interactive: bool) -> Self {
        Self { interactive }
    }

    /// Force non-interactive mode (useful for --yes flags).
    pub fn non_interactive() -> Self {
        Self { interactive: false }
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Run a yes/no prompt. Returns the default if non-interactive.
    ///
    /// The question is written to stdout so it lands in the same stream
    /// as the preview it follows. Only a trimmed `y` or `Y` answers yes;
    /// anything else, including end of input, is a no.
    pub fn yes_no(&self, prompt: &YesNoPrompt) -> bool {
        if !self.interactive {
            return prompt.default;
        }

        print!("{} ", prompt.question);
        io::stdout().flush().ok();

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input).is_err() {
            return prompt.default;
        }

        matches!(input.trim(), "y" | "Y")
    }
}

impl Default for PromptEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_interactive_returns_default() {
        let engine = PromptEngine::non_interactive();
        let decline = YesNoPrompt {
            question: "Perform (y/N)?".to_string(),
            default: false,
        };
        let accept = YesNoPrompt {
            question: "Perform (y/N)?".to_string(),
            default: true,
        };

        assert!(!engine.yes_no(&decline));
        assert!(engine.yes_no(&accept));
    }

    #[test]
    fn with_interactive_false_matches_non_interactive() {
        assert!(!PromptEngine::with_interactive(false).is_interactive());
        assert!(PromptEngine::new().is_interactive());
    }
}
