//! Experiment data model.
//!
//! An [`Experiment`] is one lab exercise: an id, a title, a description, and
//! optionally authored [`ExperimentContent`]. Content is a fixed set of
//! sections; the instruction steps within it can each carry up to three
//! independent code attachments plus a note.
//!
//! The copy contract lives here too: [`CodeBlockKind`] names the three
//! attachment kinds, and [`Step::copy_text`] / [`Step::copy_key`] produce the
//! exact clipboard payload and acknowledgement key for each.

/// One lab exercise in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Experiment {
    /// Positive, unique, ascending. Catalog order is id order.
    pub id: u32,
    pub title: String,
    pub description: String,
    /// `None` means the exercise is not yet authored; the viewer shows a
    /// placeholder instead of failing.
    pub content: Option<ExperimentContent>,
}

impl Experiment {
    pub fn new(id: u32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            content: None,
        }
    }

    pub fn with_content(mut self, content: ExperimentContent) -> Self {
        self.content = Some(content);
        self
    }
}

/// Authored body of an experiment. Section order is fixed at render time:
/// objective, software requirements, steps, expected output, observations.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentContent {
    pub objective: String,
    pub software_requirements: Vec<String>,
    pub steps: Vec<Step>,
    pub expected_output: Vec<String>,
    pub key_observations: Vec<String>,
}

/// One numbered instruction within an experiment.
///
/// A step may carry any combination of the three code attachments; each one
/// present is rendered and copyable independently, in the fixed order
/// `code`, `tcl_code`, `code_block`, then `note`.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// Positive, unique within the experiment. Display and copy-key id;
    /// need not equal the step's position in the list.
    pub number: u32,
    pub title: String,
    pub content: String,
    /// Plain code or command text, rendered verbatim.
    pub code: Option<String>,
    /// Tcl script, rendered through the highlighter. Copying uses the raw
    /// text, never the highlighted form.
    pub tcl_code: Option<String>,
    /// Before/after change pair.
    pub code_block: Option<CodeChange>,
    /// Short annotation rendered as a callout.
    pub note: Option<String>,
}

impl Step {
    pub fn new(number: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            content: content.into(),
            code: None,
            tcl_code: None,
            code_block: None,
            note: None,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn with_tcl_code(mut self, tcl_code: impl Into<String>) -> Self {
        self.tcl_code = Some(tcl_code.into());
        self
    }

    pub fn with_change(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.code_block = Some(CodeChange {
            from: from.into(),
            to: to.into(),
        });
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Exact clipboard payload for one attachment kind, if present.
    pub fn copy_text(&self, kind: CodeBlockKind) -> Option<String> {
        match kind {
            CodeBlockKind::Code => self.code.clone(),
            CodeBlockKind::Tcl => self.tcl_code.clone(),
            CodeBlockKind::Change => self.code_block.as_ref().map(CodeChange::combined),
        }
    }

    /// Acknowledgement key for one attachment kind of this step.
    pub fn copy_key(&self, kind: CodeBlockKind) -> String {
        kind.key(self.number)
    }
}

/// Before/after pair shown as a change narrative.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeChange {
    pub from: String,
    pub to: String,
}

impl CodeChange {
    /// Copy payload: the old text, a blank line, the new text.
    pub fn combined(&self) -> String {
        format!("{}\n\n{}", self.from, self.to)
    }
}

/// The three copyable attachment kinds a step can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeBlockKind {
    /// Plain `code` attachment.
    Code,
    /// Highlighted `tcl_code` attachment.
    Tcl,
    /// Before/after `code_block` attachment.
    Change,
}

impl CodeBlockKind {
    /// Acknowledgement key for a step number: `code-{n}`, `tcl-{n}`, or
    /// `block-{n}`. At most one key is acknowledged at a time, so the key
    /// doubles as the identity of the button showing "Copied!".
    pub fn key(self, step_number: u32) -> String {
        match self {
            CodeBlockKind::Code => format!("code-{step_number}"),
            CodeBlockKind::Tcl => format!("tcl-{step_number}"),
            CodeBlockKind::Change => format!("block-{step_number}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_key_formats() {
        let step = Step::new(7, "Queue limits", "Adjust the queue limits.");
        assert_eq!(step.copy_key(CodeBlockKind::Code), "code-7");
        assert_eq!(step.copy_key(CodeBlockKind::Tcl), "tcl-7");
        assert_eq!(step.copy_key(CodeBlockKind::Change), "block-7");
    }

    #[test]
    fn test_copy_text_code_verbatim() {
        let step = Step::new(2, "Install", "Install the tools.").with_code("sudo apt-get install ns2");
        assert_eq!(
            step.copy_text(CodeBlockKind::Code),
            Some("sudo apt-get install ns2".to_string())
        );
    }

    #[test]
    fn test_copy_text_tcl_is_raw() {
        let source = "set ns [new Simulator]\n# comment stays raw";
        let step = Step::new(5, "Script", "Write the script.").with_tcl_code(source);
        assert_eq!(step.copy_text(CodeBlockKind::Tcl), Some(source.to_string()));
    }

    #[test]
    fn test_copy_text_change_joins_with_blank_line() {
        let step = Step::new(8, "Modify", "Change the limits.").with_change("A", "B");
        assert_eq!(step.copy_text(CodeBlockKind::Change), Some("A\n\nB".to_string()));
    }

    #[test]
    fn test_copy_text_absent_attachment() {
        let step = Step::new(1, "Boot", "Boot the system.");
        assert_eq!(step.copy_text(CodeBlockKind::Code), None);
        assert_eq!(step.copy_text(CodeBlockKind::Tcl), None);
        assert_eq!(step.copy_text(CodeBlockKind::Change), None);
    }

    #[test]
    fn test_step_attachments_are_independent() {
        let step = Step::new(3, "All three", "A step carrying every attachment.")
            .with_code("gcc main.c")
            .with_tcl_code("set ns [new Simulator]")
            .with_change("old", "new")
            .with_note("Run as root.");
        assert_eq!(step.copy_text(CodeBlockKind::Code), Some("gcc main.c".to_string()));
        assert_eq!(
            step.copy_text(CodeBlockKind::Tcl),
            Some("set ns [new Simulator]".to_string())
        );
        assert_eq!(step.copy_text(CodeBlockKind::Change), Some("old\n\nnew".to_string()));
        assert_eq!(step.note.as_deref(), Some("Run as root."));
    }
}
