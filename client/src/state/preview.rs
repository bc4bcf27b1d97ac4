//! Live preview engine for the tutorial editor.
//!
//! SYSTEM CONTEXT
//! ==============
//! Markup is handed back untouched for rendering inside a sandboxed iframe.
//! Every other language gets a canned transcript keyed on the language tag
//! alone; learner code for those languages is never parsed or executed.

#[cfg(test)]
#[path = "preview_test.rs"]
mod preview_test;

/// Language tag that switches the preview to live markup.
pub const MARKUP_LANGUAGE: &str = "html";

const HELLO_WORLD: &str = "Hello, World!";
const SQL_ROWS_AFFECTED: &str = "(1 row(s) affected)";
const UNSUPPORTED: &str = "Live execution for this language is not supported in this demo.";

/// What the output pane should display for the current editor contents.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PreviewOutput {
    /// Learner markup, to be rendered only inside [`SandboxPolicy`] isolation.
    SandboxedMarkup(String),
    /// Simulated console lines, header first.
    SimulatedTranscript(Vec<String>),
}

impl PreviewOutput {
    /// Transcript lines joined for display; `None` for markup.
    pub fn transcript_text(&self) -> Option<String> {
        match self {
            Self::SandboxedMarkup(_) => None,
            Self::SimulatedTranscript(lines) => Some(lines.join("\n")),
        }
    }
}

/// Decide the preview for `language` and the current `source`.
///
/// `language` is matched case-sensitively. For anything other than
/// [`MARKUP_LANGUAGE`] the output depends on `language` only.
pub fn render(language: &str, source: &str) -> PreviewOutput {
    if language == MARKUP_LANGUAGE {
        return PreviewOutput::SandboxedMarkup(source.to_owned());
    }

    let result = match language {
        "python" | "java" => HELLO_WORLD,
        "sql" => SQL_ROWS_AFFECTED,
        _ => UNSUPPORTED,
    };

    PreviewOutput::SimulatedTranscript(vec![
        format!("> Simulating execution for {language}..."),
        format!("> {result}"),
    ])
}

/// Capabilities granted to the preview iframe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SandboxCapability {
    AllowScripts,
}

impl SandboxCapability {
    fn token(self) -> &'static str {
        match self {
            Self::AllowScripts => "allow-scripts",
        }
    }
}

/// Sandbox attribute for learner markup.
///
/// Scripts may run; storage, cookies, same-origin access, forms, popups,
/// modals, plugins and top-level navigation are all denied by omission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SandboxPolicy {
    capabilities: &'static [SandboxCapability],
}

/// The only policy the output pane uses.
pub const LEARNER_MARKUP_SANDBOX: SandboxPolicy = SandboxPolicy {
    capabilities: &[SandboxCapability::AllowScripts],
};

impl SandboxPolicy {
    pub fn capabilities(&self) -> &'static [SandboxCapability] {
        self.capabilities
    }

    /// Value for the iframe `sandbox` attribute.
    pub fn attribute(&self) -> String {
        self.capabilities
            .iter()
            .map(|cap| cap.token())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
