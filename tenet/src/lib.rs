mod checks;
pub mod corpus;
pub mod principle;



// Re-export commonly used types
pub use corpus::{Corpus, Document, ReadFailure, ReadFailureKind, Subdir};
pub use principle::{
    CHAPTER_PREFIX, CheckOutcome, INTRO_FILE, MIN_CHAPTER_DIRS, MIN_CHAPTER_ENTRIES, PRINCIPLES,
    Principle,
};
