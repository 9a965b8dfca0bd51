//! Truth question rotation for dare cards.
use rand::Rng;
use std::collections::HashSet;

/// Draw the next truth question, marking it used.
///
/// When the pool is exhausted the used set is cleared and the first pool
/// entry is returned without being marked; the first question of a fresh
/// cycle may therefore repeat. An empty pool degrades to an empty string.
pub fn next_truth<R: Rng>(pool: &[String], used: &mut HashSet<String>, rng: &mut R) -> String {
    let available: Vec<&String> = pool.iter().filter(|truth| !used.contains(*truth)).collect();

    if available.is_empty() {
        used.clear();
        return pool.first().cloned().unwrap_or_default();
    }

    let picked = available[rng.gen_range(0..available.len())].clone();
    used.insert(picked.clone());
    picked
}
