//! Bigram frequency ranking.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::tokenizer::tokenize;
use crate::web_search::ResultRecord;

/// A two-word phrase and how often it occurs across a result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhraseCount {
    pub phrase: String,
    pub count: usize,
}

/// Count adjacent token pairs, in first-seen order.
///
/// The window runs over the already filtered stream, so two tokens separated
/// only by dropped noise are adjacent here.
#[must_use]
pub fn count_bigrams<S: AsRef<str>>(tokens: &[S]) -> Vec<PhraseCount> {
    let mut index: AHashMap<String, usize> = AHashMap::new();
    let mut counts: Vec<PhraseCount> = Vec::new();

    for pair in tokens.windows(2) {
        let phrase = format!("{} {}", pair[0].as_ref(), pair[1].as_ref());
        match index.get(&phrase) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(phrase.clone(), counts.len());
                counts.push(PhraseCount { phrase, count: 1 });
            }
        }
    }

    counts
}

/// Rank every bigram in the records' titles and descriptions.
///
/// Sorted by count descending; `sort_by` is stable so equal counts keep the
/// order in which the phrase was first produced.
#[must_use]
pub fn rank_phrases(records: &[ResultRecord]) -> Vec<PhraseCount> {
    let tokens = tokenize(records);
    let mut ranked = count_bigrams(&tokens);
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}
