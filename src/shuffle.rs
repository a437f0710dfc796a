use rand::Rng;

/// Fisher-Yates, in place. Walks from the last slot down to the second and swaps
/// each with a uniformly chosen slot at or before it.
pub fn shuffle<T>(rng: &mut impl Rng, items: &mut [T])
{
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
