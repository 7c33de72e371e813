use crate::graph::WeightedDigraph;

mod print;

/// 菱形拓扑：源0 → {1,2} → {3,4} → 汇5，边权均为1
///
/// ```text
///      1   3
///      o----o
///     / \  / \
///  0 o   \/   o 5
///     \  /\  /
///      \/  \/
///      o----o
///      2    4
/// ```
pub(super) fn diamond() -> WeightedDigraph {
    let e = Some(1.0);
    WeightedDigraph::from_rows(&[
        vec![None, e, e, None, None, None],
        vec![None, None, None, e, e, None],
        vec![None, None, None, e, e, None],
        vec![None, None, None, None, None, e],
        vec![None, None, None, None, None, e],
        vec![None, None, None, None, None, None],
    ])
    .unwrap()
}

pub(super) fn single_vertex() -> WeightedDigraph {
    WeightedDigraph::from_rows(&[vec![None]]).unwrap()
}
