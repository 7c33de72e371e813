use crate::graph::WeightedDigraph;

#[test]
fn test_display_of_graph() {
    let graph = WeightedDigraph::from_rows(&[vec![None, Some(0.5)], vec![None, None]]).unwrap();
    let expected = format!(
        "[{:>8}, {:8.4}]\n[{:>8}, {:>8}]\n阶数: 2，边数: 1\n",
        "·", 0.5, "·", "·"
    );
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_display_of_empty_graph() {
    assert_eq!(WeightedDigraph::empty().to_string(), "阶数: 0，边数: 0\n");
}
