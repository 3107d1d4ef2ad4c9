use crate::model::graph::Graph;

/// Six-vertex resistor network used across the unit tests.
pub(crate) fn circuit() -> Graph<u32> {
    let mut graph = Graph::new();
    for id in 1..=6 {
        graph.add_vertex(id);
    }
    for (a, b, resistance) in [
        (1, 6, 14.0),
        (1, 2, 7.0),
        (1, 3, 9.0),
        (2, 3, 10.0),
        (2, 4, 15.0),
        (3, 4, 11.0),
        (3, 6, 2.0),
        (4, 5, 6.0),
        (5, 6, 9.0),
    ] {
        graph.add_edge(a, b, resistance);
    }
    graph
}
