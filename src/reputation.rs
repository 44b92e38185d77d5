// Reputation derivation. The rule-table records are the single source of
// truth here; reputation is never edited directly on a build.
use crate::tables::{Concept, Humanity, Upbringing};

// floor((rep_base + rep_bonus) / rep_divisor), rounding toward negative
// infinity. The bonus can be negative (Fugitives carry -2), so a negative
// numerator must round down, not toward zero; div_euclid does exactly that
// for the positive divisors the tables contain.
pub fn calculate_reputation(
    upbringing: &Upbringing,
    concept: &Concept,
    humanity: &Humanity,
) -> i32 {
    (upbringing.rep_base + concept.rep_bonus).div_euclid(humanity.rep_divisor)
}
