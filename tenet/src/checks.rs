//! Check functions behind the principle battery.
//!
//! Every check is a pure function of the corpus. The keyword checks
//! short-circuit on the first matching document; the layout and visual-aid
//! checks inspect the whole snapshot before deciding.

use std::sync::LazyLock;

use regex::Regex;

use crate::corpus::{Corpus, Subdir};
use crate::principle::{CHAPTER_PREFIX, CheckOutcome, MIN_CHAPTER_DIRS, MIN_CHAPTER_ENTRIES};

/// Citation markers, matched as case-sensitive substrings.
/// Substring semantics are deliberate: `resources` satisfies `source`.
const CITATION_MARKERS: &[&str] = &["cite", "reference", "source"];

/// Opening fence that marks a Mermaid diagram block.
const DIAGRAM_FENCE: &str = "```mermaid";

/// Fence delimiter counted for the code-snippet condition.
const FENCE: &str = "```";

/// A document needs more than this many fence delimiters to count as
/// having code snippets (more than one complete fenced block).
const MIN_FENCE_DELIMITERS: usize = 2;

/// Case-insensitive indicators of academic register.
static ACADEMIC_TONE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)research|study|analysis|methodology") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid academic tone regex: {err}"),
    }
});

/// Case-insensitive agentic AI vocabulary.
static AGENTIC_CONCEPTS: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)agent|planning|multi-agent|tool") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid agentic concepts regex: {err}"),
    }
});

/// Case-insensitive safety and ethics vocabulary.
static SAFETY_ETHICS: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)safety|ethics|secure|privacy") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid safety/ethics regex: {err}"),
    }
});

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn any_document_matches(corpus: &Corpus, pattern: &Regex) -> bool {
    corpus
        .documents
        .iter()
        .any(|doc| pattern.is_match(&doc.content))
}

fn chapter_dirs(corpus: &Corpus) -> impl Iterator<Item = &Subdir> {
    corpus
        .subdirs
        .iter()
        .filter(|dir| dir.name.starts_with(CHAPTER_PREFIX))
}

pub fn content_accuracy(corpus: &Corpus) -> CheckOutcome {
    let found = corpus.documents.iter().any(|doc| {
        CITATION_MARKERS
            .iter()
            .any(|marker| doc.content.contains(marker))
    });
    if found {
        CheckOutcome::pass("Found citation references in content".to_owned())
    } else {
        CheckOutcome::fail("No citation references found in content".to_owned())
    }
}

pub fn academic_language(corpus: &Corpus) -> CheckOutcome {
    if any_document_matches(corpus, &ACADEMIC_TONE) {
        CheckOutcome::pass("Found academic language indicators".to_owned())
    } else {
        CheckOutcome::fail("No clear academic language indicators found".to_owned())
    }
}

pub fn structured_format(corpus: &Corpus) -> CheckOutcome {
    let chapters = chapter_dirs(corpus).count();
    let message = format!(
        "Found {chapters} chapter directories and intro: {}",
        yes_no(corpus.root_has_intro)
    );
    if chapters >= MIN_CHAPTER_DIRS && corpus.root_has_intro {
        CheckOutcome::pass(message)
    } else {
        CheckOutcome::fail(message)
    }
}

/// The two conditions may be satisfied by different documents, but the
/// fence-delimiter count is per document, never summed across the corpus.
pub fn visual_aids(corpus: &Corpus) -> CheckOutcome {
    let mut has_diagrams = false;
    let mut has_snippets = false;
    for doc in &corpus.documents {
        if doc.content.contains(DIAGRAM_FENCE) {
            has_diagrams = true;
        }
        if doc.content.matches(FENCE).count() > MIN_FENCE_DELIMITERS {
            has_snippets = true;
        }
    }
    let message = format!(
        "Diagrams: {}, Code snippets: {}",
        yes_no(has_diagrams),
        yes_no(has_snippets)
    );
    if has_diagrams && has_snippets {
        CheckOutcome::pass(message)
    } else {
        CheckOutcome::fail(message)
    }
}

pub fn agentic_focus(corpus: &Corpus) -> CheckOutcome {
    if any_document_matches(corpus, &AGENTIC_CONCEPTS) {
        CheckOutcome::pass("Found agentic AI concept references".to_owned())
    } else {
        CheckOutcome::fail("No clear agentic AI concept references found".to_owned())
    }
}

pub fn safety_ethics(corpus: &Corpus) -> CheckOutcome {
    if any_document_matches(corpus, &SAFETY_ETHICS) {
        CheckOutcome::pass("Found safety/ethics considerations".to_owned())
    } else {
        CheckOutcome::fail("No safety/ethics considerations found".to_owned())
    }
}

/// Passes exactly when every discovered file was loaded as text. An empty
/// corpus passes with a zero count.
pub fn format_compatibility(corpus: &Corpus) -> CheckOutcome {
    let failures = corpus.read_failures.len();
    if failures == 0 {
        CheckOutcome::pass(format!(
            "{} valid Markdown files found",
            corpus.document_count()
        ))
    } else {
        CheckOutcome::fail(format!("{failures} file(s) could not be read as text"))
    }
}

pub fn modularity(corpus: &Corpus) -> CheckOutcome {
    let chapters: Vec<&Subdir> = chapter_dirs(corpus).collect();
    let all_modular = chapters
        .iter()
        .all(|dir| dir.entry_count >= MIN_CHAPTER_ENTRIES);
    let message = format!(
        "Chapter directories: {}, All modular: {all_modular}",
        chapters.len()
    );
    if !chapters.is_empty() && all_modular {
        CheckOutcome::pass(message)
    } else {
        CheckOutcome::fail(message)
    }
}
