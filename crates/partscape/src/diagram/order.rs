//! In-rank ordering.
//!
//! Edges spanning several ranks are split into chains of dummy slots so that
//! every link joins adjacent ranks. Slots are then reordered with alternating
//! downward and upward barycenter sweeps, keeping the ordering with the
//! fewest crossings seen.
//!
//! ```text
//!   rank 0     rank 1     rank 2
//!   [ A ] ────── · ────── [ C ]
//!   [ B ] ──────────────► [ D ]
//! ```

use std::cmp::Ordering;

use log::{debug, trace};
use petgraph::graph::{DiGraph, NodeIndex};

use super::rank::Ranking;

/// A position holder in a rank: a real node or a point on a long edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Node(NodeIndex),
    Dummy,
}

/// The proper layered graph and its chosen ordering.
#[derive(Debug, Clone)]
pub struct Layers {
    slots: Vec<Slot>,
    /// Slots per rank, in order.
    order: Vec<Vec<usize>>,
    /// Neighbor slots one rank up and one rank down.
    up: Vec<Vec<usize>>,
    down: Vec<Vec<usize>>,
    /// Per original edge (by edge index): slots from source to target.
    chains: Vec<Vec<usize>>,
}

impl Layers {
    /// Build the layered graph. Real nodes take slot ids equal to their
    /// node index; dummy slots follow in edge order.
    pub fn new<N, E>(graph: &DiGraph<N, E>, ranking: &Ranking) -> Self {
        let mut slots: Vec<Slot> = graph.node_indices().map(Slot::Node).collect();
        let mut slot_ranks: Vec<usize> = ranking.ranks().to_vec();
        let mut up = vec![Vec::new(); slots.len()];
        let mut down = vec![Vec::new(); slots.len()];
        let mut chains = Vec::with_capacity(graph.edge_count());

        for edge in graph.edge_indices() {
            let Some((source, target)) = graph.edge_endpoints(edge) else {
                chains.push(Vec::new());
                continue;
            };
            let (source, target) = (source.index(), target.index());

            // Back edges are laid out reversed: always walk from the lower rank.
            let reversed = slot_ranks[source] > slot_ranks[target];
            let (low, high) = if reversed {
                (target, source)
            } else {
                (source, target)
            };

            let mut chain = vec![low];
            if slot_ranks[low] != slot_ranks[high] {
                for rank in slot_ranks[low] + 1..slot_ranks[high] {
                    let dummy = slots.len();
                    slots.push(Slot::Dummy);
                    slot_ranks.push(rank);
                    up.push(Vec::new());
                    down.push(Vec::new());
                    chain.push(dummy);
                }
                chain.push(high);
                for pair in chain.windows(2) {
                    down[pair[0]].push(pair[1]);
                    up[pair[1]].push(pair[0]);
                }
            } else {
                // Self-loop; no link within a rank
                chain.push(high);
            }

            if reversed {
                chain.reverse();
            }
            chains.push(chain);
        }

        let mut order = vec![Vec::new(); ranking.rank_count()];
        for (slot, &rank) in slot_ranks.iter().enumerate() {
            order[rank].push(slot);
        }

        Self {
            slots,
            order,
            up,
            down,
            chains,
        }
    }

    pub fn slot(&self, slot: usize) -> Slot {
        self.slots[slot]
    }

    /// Slots of every rank, in their current order.
    pub fn ranks(&self) -> &[Vec<usize>] {
        &self.order
    }

    /// Slots visited by the edge with the given index, source first.
    pub fn chain(&self, edge: usize) -> &[usize] {
        self.chains.get(edge).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of crossings between adjacent ranks.
    pub fn crossings(&self) -> usize {
        self.order
            .windows(2)
            .map(|pair| self.crossings_between(&pair[0], &pair[1]))
            .sum()
    }

    fn crossings_between(&self, upper: &[usize], lower: &[usize]) -> usize {
        let lower_pos = positions(self.slots.len(), lower);
        let links: Vec<(usize, usize)> = upper
            .iter()
            .enumerate()
            .flat_map(|(i, &slot)| self.down[slot].iter().map(move |&n| (i, n)))
            .filter_map(|(i, n)| lower_pos[n].map(|j| (i, j)))
            .collect();

        count_crossings(links, lower.len())
    }

    /// Reorder slots within each rank to reduce crossings.
    pub fn minimize_crossings(&mut self, sweeps: usize) {
        let mut best = self.order.clone();
        let mut best_crossings = self.crossings();

        for sweep in 0..sweeps {
            if best_crossings == 0 {
                break;
            }

            if sweep % 2 == 0 {
                for rank in 1..self.order.len() {
                    self.reorder(rank, rank - 1, true);
                }
            } else {
                for rank in (0..self.order.len().saturating_sub(1)).rev() {
                    self.reorder(rank, rank + 1, false);
                }
            }

            let crossings = self.crossings();
            trace!(sweep = sweep, crossings = crossings; "Ordering sweep");
            if crossings < best_crossings {
                best_crossings = crossings;
                best = self.order.clone();
            }
        }

        debug!(crossings = best_crossings; "Ordered diagram ranks");
        self.order = best;
    }

    /// Sort one rank by the barycenter of its neighbors in a fixed rank.
    fn reorder(&mut self, rank: usize, fixed: usize, from_above: bool) {
        let fixed_pos = positions(self.slots.len(), &self.order[fixed]);
        let neighbors = if from_above { &self.up } else { &self.down };

        let mut keyed: Vec<(f32, usize)> = self.order[rank]
            .iter()
            .enumerate()
            .map(|(current, &slot)| {
                let placed: Vec<f32> = neighbors[slot]
                    .iter()
                    .filter_map(|&n| fixed_pos[n])
                    .map(|p| p as f32)
                    .collect();
                let key = if placed.is_empty() {
                    current as f32
                } else {
                    placed.iter().sum::<f32>() / placed.len() as f32
                };
                (key, slot)
            })
            .collect();

        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.order[rank] = keyed.into_iter().map(|(_, slot)| slot).collect();
    }
}

/// Number of link pairs `(u1, l1)`, `(u2, l2)` with `u1 < u2` and `l1 > l2`.
///
/// Links sorted by upper then lower position reduce this to counting
/// inversions among the lower positions, done with a Fenwick tree over the
/// `width` lower positions in O(L log L).
fn count_crossings(mut links: Vec<(usize, usize)>, width: usize) -> usize {
    links.sort_unstable();

    let mut tree = vec![0usize; width + 1];
    let mut crossings = 0;
    for (seen, &(_, lower)) in links.iter().enumerate() {
        // Links seen so far ending at or left of `lower`
        let mut at_or_left = 0;
        let mut i = lower + 1;
        while i > 0 {
            at_or_left += tree[i];
            i &= i - 1;
        }
        crossings += seen - at_or_left;

        let mut i = lower + 1;
        while i <= width {
            tree[i] += 1;
            i += i & i.wrapping_neg();
        }
    }
    crossings
}

/// Position of each slot within `rank`, or `None` for slots elsewhere.
fn positions(slot_count: usize, rank: &[usize]) -> Vec<Option<usize>> {
    let mut pos = vec![None; slot_count];
    for (i, &slot) in rank.iter().enumerate() {
        pos[slot] = Some(i);
    }
    pos
}
