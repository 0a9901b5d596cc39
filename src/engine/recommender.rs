use std::collections::HashSet;

use crate::catalog::CatalogEntry;
use crate::models::Lang;

use super::error::EngineError;
use super::similarity::similarity;

/// A candidate site and its best similarity against the input names.
#[derive(Clone, Debug)]
pub struct ScoredSite<'a> {
    pub entry: &'a CatalogEntry,
    pub score: f64,
}

/// Rank every site not named in `input_names` by its closest English-name
/// match against any input, and keep the best `count`.
///
/// Sorting is stable, so equal scores keep catalog order. An empty candidate
/// pool yields an empty list rather than an error.
pub fn rank<'a>(
    input_names: &[String],
    sites: &'a [CatalogEntry],
    count: usize,
) -> Result<Vec<ScoredSite<'a>>, EngineError> {
    if input_names.is_empty() {
        return Err(EngineError::InvalidInput("no site names given".into()));
    }
    if count == 0 {
        return Err(EngineError::InvalidInput("count must be at least 1".into()));
    }

    let excluded: HashSet<&str> = input_names.iter().map(String::as_str).collect();
    let mut scored = Vec::with_capacity(sites.len());
    for entry in sites {
        let name = entry.site.name(Lang::En).ok_or_else(|| EngineError::DataIntegrity {
            site: entry.site.label(),
            field: "en_Site_Name",
        })?;
        if excluded.contains(name) {
            continue;
        }
        let score = input_names
            .iter()
            .map(|input| similarity(input, name))
            .fold(0.0, f64::max);
        scored.push(ScoredSite { entry, score });
    }

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(count);
    tracing::debug!(
        inputs = input_names.len(),
        returned = scored.len(),
        "Ranked recommendation candidates"
    );
    Ok(scored)
}
