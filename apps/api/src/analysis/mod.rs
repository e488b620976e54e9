// Keyword analysis: normalization, term weighting, report ranking, ATS quick score.
// Everything below `handlers` is pure and does not depend on `AppState`.

pub mod ats;
pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod report;
pub mod upload;
pub mod weighting;
