//! The principle battery: the named documentation rules and their checks.
//!
//! The battery is a fixed, ordered slice compiled into the crate. There is no
//! dynamic registration; adding a principle means adding an entry to
//! [`PRINCIPLES`] and a check function in the `checks` module.

use crate::checks;
use crate::corpus::Corpus;

/// Name prefix that marks a top-level directory as a chapter.
///
/// Matching is case-sensitive: `chapter-01` counts, `Chapter-01` does not.
pub const CHAPTER_PREFIX: &str = "chapter";

/// File expected directly under the documentation root.
pub const INTRO_FILE: &str = "intro.md";

/// Minimum number of chapter directories for the structure principle.
pub const MIN_CHAPTER_DIRS: usize = 3;

/// Minimum direct entries per chapter directory for the modularity principle.
pub const MIN_CHAPTER_ENTRIES: usize = 2;

/// Outcome of evaluating one principle against a corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Whether the principle is satisfied.
    pub passed: bool,
    /// Human-readable explanation, stable for a given corpus.
    pub message: String,
}

impl CheckOutcome {
    /// A passing outcome.
    #[must_use]
    pub fn pass(message: String) -> Self {
        Self {
            passed: true,
            message,
        }
    }

    /// A failing outcome.
    #[must_use]
    pub fn fail(message: String) -> Self {
        Self {
            passed: false,
            message,
        }
    }
}

type CheckFn = fn(&Corpus) -> CheckOutcome;

/// A named documentation rule paired with its automated check.
#[derive(Debug)]
pub struct Principle {
    pub(crate) name: &'static str,
    pub(crate) description: &'static str,
    pub(crate) check: CheckFn,
}

impl Principle {
    /// Display name, as printed in reports.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// One-line statement of what the principle demands.
    #[must_use]
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Evaluate the principle against a corpus.
    ///
    /// Pure: the outcome depends only on the corpus snapshot, and no check
    /// can observe the outcome of another.
    #[must_use]
    pub fn evaluate(&self, corpus: &Corpus) -> CheckOutcome {
        (self.check)(corpus)
    }
}

/// The complete battery, in evaluation and reporting order.
pub const PRINCIPLES: &[Principle] = &[
    Principle {
        name: "Content Accuracy & Research-Based Approach",
        description: "All content must be accurate, research-based, and cite sources where possible",
        check: checks::content_accuracy,
    },
    Principle {
        name: "Academic Language & Professional Communication",
        description: "Use clear, professional academic language suitable for thesis/research paper",
        check: checks::academic_language,
    },
    Principle {
        name: "Structured Documentation Format",
        description: "Structure everything in chapters/sections (8-10 chapter book style)",
        check: checks::structured_format,
    },
    Principle {
        name: "Visual Aids & Practical Examples",
        description: "Include diagrams (Mermaid for architecture), code snippets, and practical examples",
        check: checks::visual_aids,
    },
    Principle {
        name: "Agentic AI Concepts Focus",
        description: "Prioritize agentic AI concepts: planning, tools, multi-agent, constitution-driven development",
        check: checks::agentic_focus,
    },
    Principle {
        name: "Safety & Ethics Standards",
        description: "Avoid hallucinations, no harmful suggestions, transparent reasoning",
        check: checks::safety_ethics,
    },
    Principle {
        name: "Output Format Compatibility",
        description: "Output format: Markdown compatible with Docusaurus (MDX if needed)",
        check: checks::format_compatibility,
    },
    Principle {
        name: "Modular & Extensible Documentation",
        description: "Keep docs modular, versionable, and easy to extend",
        check: checks::modularity,
    },
];
