//! Term weighting — TF-IDF over the two-document set {résumé, job description}.
//!
//! Weights follow the common vectorizer defaults:
//! - tf  = raw term count in the document
//! - idf = ln((1 + n) / (1 + df)) + 1, with n = 2 documents
//! - each document vector is L2-normalized
//!
//! The vocabulary is fitted per call and never cached, so unrelated document
//! pairs can never share terms.

use std::collections::BTreeMap;

use crate::analysis::normalize::tokenize;

const DOCUMENT_COUNT: f64 = 2.0;

/// Weights of one vocabulary term in both documents. Both are ≥ 0 and a term
/// that does not occur in a document has weight 0 there.
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    pub term: String,
    pub resume: f64,
    pub job_desc: f64,
}

/// Weighs every term of the shared vocabulary of two normalized documents.
///
/// The result is ordered lexicographically by term. Two documents without any
/// tokens produce an empty vocabulary.
pub fn weigh(resume: &str, job_desc: &str) -> Vec<TermWeight> {
    // term -> (count in résumé, count in job description)
    let mut counts: BTreeMap<&str, (u32, u32)> = BTreeMap::new();
    for term in tokenize(resume) {
        counts.entry(term).or_default().0 += 1;
    }
    for term in tokenize(job_desc) {
        counts.entry(term).or_default().1 += 1;
    }

    let mut weights: Vec<TermWeight> = counts
        .into_iter()
        .map(|(term, (resume_tf, job_tf))| {
            let df = u32::from(resume_tf > 0) + u32::from(job_tf > 0);
            let idf = smoothed_idf(df);
            TermWeight {
                term: term.to_string(),
                resume: f64::from(resume_tf) * idf,
                job_desc: f64::from(job_tf) * idf,
            }
        })
        .collect();

    let resume_norm = l2_norm(weights.iter().map(|w| w.resume));
    let job_norm = l2_norm(weights.iter().map(|w| w.job_desc));
    for weight in &mut weights {
        if resume_norm > 0.0 {
            weight.resume /= resume_norm;
        }
        if job_norm > 0.0 {
            weight.job_desc /= job_norm;
        }
    }

    weights
}

fn smoothed_idf(document_frequency: u32) -> f64 {
    ((1.0 + DOCUMENT_COUNT) / (1.0 + f64::from(document_frequency))).ln() + 1.0
}

fn l2_norm(values: impl Iterator<Item = f64>) -> f64 {
    values.map(|v| v * v).sum::<f64>().sqrt()
}
