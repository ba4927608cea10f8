// Resume Screening Engine
// Implements: text extraction, skill extraction, joint TF-IDF vectorization,
// cosine scoring, and ranked-result assembly.
// All PDF parsing goes through extract::TextExtractor — nothing else touches
// raw resume bytes.

pub mod extract;
pub mod handlers;
pub mod rank;
pub mod scoring;
pub mod skills;
pub mod vectorize;
