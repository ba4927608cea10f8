//! Joint TF-IDF vectorization over one job description and a resume batch.
//!
//! The whole batch is vectorized in a single pass so every text lives in one
//! coordinate space (same term → same index); a vector computed for one
//! document in isolation would not be comparable. The space is rebuilt from
//! scratch on every run — adding or removing a single resume changes every
//! weight, so nothing here is cached. O(corpus size) per run.

use std::collections::HashMap;

use crate::errors::AppError;

/// The shared term-weight space for one screening run: the query vector plus
/// one vector per document, all of identical dimensionality.
#[derive(Debug)]
pub struct TermSpace {
    pub query_vector: Vec<f64>,
    pub document_vectors: Vec<Vec<f64>>,
}

/// Case-folded word tokens: maximal alphanumeric runs of length ≥ 2.
/// Single-character fragments are dropped.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_lowercase())
        .collect()
}

/// Builds the joint term space for `query` and `documents`.
///
/// Weight per term = raw term frequency × smoothed inverse document
/// frequency `ln((1 + n) / (1 + df)) + 1`, where `n` counts the query and
/// all documents. The smoothing keeps a floor weight of 1.0 for terms that
/// appear in every text, so two identical texts still score 1.0 against
/// each other while rare terms dominate common ones.
pub fn build_term_space(query: &str, documents: &[&str]) -> Result<TermSpace, AppError> {
    let mut tokenized: Vec<Vec<String>> = Vec::with_capacity(documents.len() + 1);
    tokenized.push(tokenize(query));
    for doc in documents {
        tokenized.push(tokenize(doc));
    }

    // Union vocabulary in first-seen order (query first, then documents in
    // upload order) so the term → index assignment is deterministic.
    let mut term_index: HashMap<&str, usize> = HashMap::new();
    let mut n_terms = 0usize;
    for tokens in &tokenized {
        for token in tokens {
            if !term_index.contains_key(token.as_str()) {
                term_index.insert(token.as_str(), n_terms);
                n_terms += 1;
            }
        }
    }

    if n_terms == 0 {
        return Err(AppError::EmptyCorpus(
            "no extractable tokens in job description or resumes".to_string(),
        ));
    }

    // Document frequency per term, query included.
    let mut doc_freq = vec![0usize; n_terms];
    for tokens in &tokenized {
        let mut seen = vec![false; n_terms];
        for token in tokens {
            let idx = term_index[token.as_str()];
            if !seen[idx] {
                seen[idx] = true;
                doc_freq[idx] += 1;
            }
        }
    }

    let n_texts = tokenized.len() as f64;
    let idf: Vec<f64> = doc_freq
        .iter()
        .map(|&df| ((1.0 + n_texts) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let mut vectors: Vec<Vec<f64>> = tokenized
        .iter()
        .map(|tokens| {
            let mut counts = vec![0u32; n_terms];
            for token in tokens {
                counts[term_index[token.as_str()]] += 1;
            }
            counts
                .iter()
                .zip(&idf)
                .map(|(&tf, idf)| f64::from(tf) * idf)
                .collect()
        })
        .collect();

    let query_vector = vectors.remove(0);
    Ok(TermSpace {
        query_vector,
        document_vectors: vectors,
    })
}
