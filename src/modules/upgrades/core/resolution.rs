// Pure halves of the PSA lookups.
//
// Each lookup is an ordered list of strategies; the first strategy that yields
// a candidate wins. Remote querying lives in the ticketing client, the
// selection rules live here.

use rapidfuzz::fuzz;

pub const FUZZY_MATCH_THRESHOLD: u8 = 80;
pub const FUZZY_PAGE_SIZE: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyStrategy {
    ExactName,
    FuzzyName,
}

impl CompanyStrategy {
    pub const ORDER: [CompanyStrategy; 2] = [CompanyStrategy::ExactName, CompanyStrategy::FuzzyName];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStrategy {
    Identifier,
    FirstOrLastName,
}

impl MemberStrategy {
    pub const ORDER: [MemberStrategy; 2] =
        [MemberStrategy::Identifier, MemberStrategy::FirstOrLastName];
}

/// `first.last` identifier guess for a free-text technician name.
pub fn member_identifier(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(".")
}

/// Case-insensitive indel ratio on a 0..=100 scale, rounded. An empty side
/// scores 0.
pub fn similarity(left: &str, right: &str) -> u8 {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    if left.is_empty() || right.is_empty() {
        return 0;
    }
    let ratio = fuzz::ratio(left.chars(), right.chars());
    (ratio * 100.0).round() as u8
}

/// Highest-scoring candidate strictly above the threshold. Ties keep the
/// earlier candidate.
pub fn best_fuzzy_match<'a, T>(
    query: &str,
    candidates: &'a [T],
    name_of: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    let mut best: Option<(&T, u8)> = None;
    for candidate in candidates {
        let score = similarity(query, name_of(candidate));
        let beats_best = best.is_none_or(|(_, best_score)| score > best_score);
        if score > FUZZY_MATCH_THRESHOLD && beats_best {
            best = Some((candidate, score));
        }
    }
    best.map(|(candidate, _)| candidate)
}
