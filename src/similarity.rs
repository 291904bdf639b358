//! Approximate string similarity
//!
//! Levenshtein edit distance computed over a full dynamic-programming table,
//! normalized by the longer of the two inputs. Also provides candidate ranking
//! on top of the score for search-as-you-type style lookups.

use tracing::debug;

/// Full `(m+1) × (n+1)` Levenshtein table for two strings.
///
/// Cell `(i, j)` is the cheapest way to turn the first `i` chars of the
/// source into the first `j` chars of the target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDistanceTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl EditDistanceTable {
    /// Build and fill the table for `source` → `target`.
    pub fn build(source: &str, target: &str) -> Self {
        let a: Vec<char> = source.chars().collect();
        let b: Vec<char> = target.chars().collect();
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut cells = vec![0; rows * cols];

        for (i, cell) in cells.iter_mut().step_by(cols).enumerate() {
            *cell = i;
        }
        for (j, cell) in cells.iter_mut().take(cols).enumerate() {
            *cell = j;
        }

        for i in 1..rows {
            for j in 1..cols {
                let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
                let deletion = cells[(i - 1) * cols + j] + 1;
                let insertion = cells[i * cols + j - 1] + 1;
                let substitution = cells[(i - 1) * cols + j - 1] + cost;
                cells[i * cols + j] = deletion.min(insertion).min(substitution);
            }
        }

        Self { rows, cols, cells }
    }

    /// Number of rows (`source` length + 1)
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (`target` length + 1)
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell value, or `None` when out of bounds
    pub fn get(&self, i: usize, j: usize) -> Option<usize> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Bottom-right cell: the edit distance of the full strings
    pub fn distance(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

/// Levenshtein distance between two strings, counted in `char`s.
pub fn edit_distance(a: &str, b: &str) -> usize {
    EditDistanceTable::build(a, b).distance()
}

/// Similarity score in `[0.0, 1.0]`: `1 - distance / max(len_a, len_b)`.
///
/// Case-sensitive. Two empty strings are identical and score `1.0`.
pub fn similarity(a: &str, b: &str) -> f64 {
    let table = EditDistanceTable::build(a, b);
    let longest = (table.rows() - 1).max(table.cols() - 1);
    if longest == 0 {
        return 1.0;
    }
    1.0 - table.distance() as f64 / longest as f64
}

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub value: String,
    pub score: f64,
}

/// Find matches in a list of candidates
///
/// Comparison ignores case. Exact matches come first with a score of 1.0,
/// then every candidate scoring at least `cutoff`, best first, capped at `n`.
pub fn find_matches(
    search_term: &str,
    candidates: &[String],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    let search_lower = search_term.to_lowercase();

    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase() == search_lower)
        .map(|candidate| FuzzyMatch {
            value: candidate.clone(),
            score: 1.0,
        })
        .collect();

    for candidate in candidates {
        if matches.iter().any(|m| m.value == *candidate) {
            continue;
        }

        let score = similarity(&search_lower, &candidate.to_lowercase());
        if score >= cutoff {
            matches.push(FuzzyMatch {
                value: candidate.clone(),
                score,
            });
        }
    }

    // Stable sort keeps candidate order for equal scores
    matches.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(n);

    debug!(
        "Ranked {} of {} candidates for '{}'",
        matches.len(),
        candidates.len(),
        search_term
    );
    matches
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match(
    search_term: &str,
    candidates: &[String],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    find_matches(search_term, candidates, 1, cutoff)
        .into_iter()
        .next()
}
