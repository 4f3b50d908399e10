use fxhash::FxBuildHasher;
/// Generic A* over an implicit graph given by a successor function. The
/// node store is an insertion-stable arena ([IndexMap]), so parent links
/// are plain indices into the same arena rather than owned references.
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Bookkeeping for one discovered node: the arena index of the node it was
/// reached from ([usize::MAX] for the start), the best cost found so far
/// and whether the node has been expanded.
struct NodeRecord<C> {
    parent: usize,
    cost: C,
    closed: bool,
}

struct FrontierEntry<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest estimated cost first.
        // Ties prefer the entry with the larger known cost, i.e. the one
        // closest to the goal by the heuristic's reckoning.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks parent indices back from `terminal` to the start node and returns
/// the nodes in start-to-terminal order.
fn reverse_path<N, C>(arena: &FxIndexMap<N, NodeRecord<C>>, terminal: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(terminal, |i| {
        arena.get_index(*i).map(|(node, record)| {
            *i = record.parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Expands nodes in ascending order of estimated total cost until a node
/// satisfying `success` is popped, then returns the node sequence leading to
/// it together with its cost. Returns [None] once the frontier empties.
///
/// The success test happens before anything else on a popped node, so a
/// start node that already satisfies it yields a single-node path. A node is
/// closed when popped, never when inserted; a known node is only re-routed
/// while still open and only for a strictly better cost, so duplicate
/// frontier entries for one node stay harmless (the stale ones surface after
/// the node has been closed and are dropped).
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut frontier = BinaryHeap::new();
    frontier.push(FrontierEntry {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut arena: FxIndexMap<N, NodeRecord<C>> = FxIndexMap::default();
    arena.insert(
        start.clone(),
        NodeRecord {
            parent: usize::MAX,
            cost: Zero::zero(),
            closed: false,
        },
    );
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        {
            let (node, _) = arena.get_index(index).unwrap();
            if success(node) {
                let path = reverse_path(&arena, index);
                return Some((path, cost));
            }
        }
        let successors = {
            let (node, record) = arena.get_index_mut(index).unwrap();
            if record.closed {
                continue;
            }
            record.closed = true;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // arena index of successor
            match arena.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert(NodeRecord {
                        parent: index,
                        cost: new_cost,
                        closed: false,
                    });
                }
                Occupied(mut e) => {
                    if !e.get().closed && e.get().cost > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert(NodeRecord {
                            parent: index,
                            cost: new_cost,
                            closed: false,
                        });
                    } else {
                        continue;
                    }
                }
            }

            frontier.push(FrontierEntry {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    None
}
