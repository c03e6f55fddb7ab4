use crate::skew::tree::{ReducedTree, left, right};
use crate::types::Tally;

/// Computes the prefix skew of every leaf position.
///
/// Entry `p` is `G - C` counted over positions `0..=p`. The result has one
/// entry per leaf, padding included; strip it with
/// [`crate::sequence::strip_padding`] before use.
///
/// Each recursive call carries the tally of every leaf to the left of its
/// subtree. The right child's prior is the left child's already-reduced
/// sum, so the scan does O(N) work. Calls above `fanout_depth` run both
/// children as concurrent tasks, each writing its own half of the output.
///
/// # Examples
///
/// ```rust
/// use oriseek_core::sequence::NormalizedSequence;
/// use oriseek_core::skew::{prefix_skew, TallyTree};
///
/// let normalized = NormalizedSequence::new(b"GGCAC")?;
/// let tree = TallyTree::from_sequence(&normalized)?.reduce(1);
///
/// assert_eq!(prefix_skew(&tree, 1), vec![1, 2, 1, 1, 0, 0, 0, 0]);
/// # Ok::<(), oriseek_core::types::OriseekError>(())
/// ```
#[must_use]
pub fn prefix_skew(tree: &ReducedTree, fanout_depth: usize) -> Vec<i64> {
    let mut skew = vec![0i64; tree.leaf_count()];
    scan_subtree(tree, 0, Tally::ZERO, &mut skew, 0, 0, fanout_depth);
    skew
}

fn scan_subtree(
    tree: &ReducedTree,
    i: usize,
    prior: Tally,
    out: &mut [i64],
    first_position: usize,
    depth: usize,
    fanout_depth: usize,
) {
    if tree.is_leaf(i) {
        debug_assert_eq!(out.len(), 1);
        debug_assert_eq!(i - tree.first_leaf(), first_position);
        out[0] = (prior + tree.node(i)).skew();
        return;
    }

    let half = out.len() / 2;
    let (left_out, right_out) = out.split_at_mut(half);
    let right_prior = prior + tree.node(left(i));

    if depth < fanout_depth {
        rayon::join(
            || {
                scan_subtree(
                    tree,
                    left(i),
                    prior,
                    left_out,
                    first_position,
                    depth + 1,
                    fanout_depth,
                );
            },
            || {
                scan_subtree(
                    tree,
                    right(i),
                    right_prior,
                    right_out,
                    first_position + half,
                    depth + 1,
                    fanout_depth,
                );
            },
        );
    } else {
        scan_subtree(
            tree,
            left(i),
            prior,
            left_out,
            first_position,
            depth + 1,
            fanout_depth,
        );
        scan_subtree(
            tree,
            right(i),
            right_prior,
            right_out,
            first_position + half,
            depth + 1,
            fanout_depth,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::{NormalizedSequence, strip_padding, tally_symbol};
    use crate::skew::TallyTree;

    fn skew_of(sequence: &[u8], fanout_depth: usize) -> Vec<i64> {
        let normalized = NormalizedSequence::new(sequence).unwrap();
        let tree = TallyTree::from_sequence(&normalized)
            .unwrap()
            .reduce(fanout_depth);
        let skew = prefix_skew(&tree, fanout_depth);
        strip_padding(&skew, normalized.padding()).to_vec()
    }

    fn naive_skew(sequence: &[u8]) -> Vec<i64> {
        let mut running = 0i64;
        sequence
            .iter()
            .map(|&b| {
                running += match b {
                    b'G' => 1,
                    b'C' => -1,
                    _ => 0,
                };
                running
            })
            .collect()
    }

    fn pseudo_random_sequence(len: usize, seed: u64) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                b"ATGC"[(state % 4) as usize]
            })
            .collect()
    }

    #[test]
    fn test_literal_prefix_skew() {
        // C C A A A T T T G C G G G G G
        let expected = vec![-1, -2, -2, -2, -2, -2, -2, -2, -1, -2, -1, 0, 1, 2, 3];
        assert_eq!(skew_of(b"CCAAATTTGCGGGGG", 3), expected);
    }

    #[test]
    fn test_first_entry_and_successive_differences() {
        for (len, seed) in [(1, 3), (2, 5), (63, 7), (64, 11), (1000, 13), (4097, 17)] {
            let sequence = pseudo_random_sequence(len, seed);
            let skew = skew_of(&sequence, 3);
            assert_eq!(skew.len(), len);

            let first = tally_symbol(sequence[0], 0).unwrap();
            assert_eq!(skew[0], first.skew());
            for p in 1..len {
                let tally = tally_symbol(sequence[p], p).unwrap();
                assert_eq!(skew[p] - skew[p - 1], tally.skew(), "position {p}");
            }
        }
    }

    #[test]
    fn test_matches_sequential_running_sum() {
        let sequence = pseudo_random_sequence(3000, 42);
        let expected = naive_skew(&sequence);
        for fanout_depth in [0, 1, 4, 12] {
            assert_eq!(skew_of(&sequence, fanout_depth), expected);
        }
    }

    #[test]
    fn test_padding_repeats_final_value() {
        let normalized = NormalizedSequence::new(b"GGGCC").unwrap();
        let tree = TallyTree::from_sequence(&normalized).unwrap().reduce(2);
        let skew = prefix_skew(&tree, 2);
        assert_eq!(skew, vec![1, 2, 3, 2, 1, 1, 1, 1]);
    }

    #[test]
    fn test_last_skew_equals_root_skew() {
        let sequence = pseudo_random_sequence(513, 99);
        let normalized = NormalizedSequence::new(&sequence).unwrap();
        let tree = TallyTree::from_sequence(&normalized).unwrap().reduce(3);
        let skew = prefix_skew(&tree, 3);
        assert_eq!(*skew.last().unwrap(), tree.root().skew());
    }
}
