use super::*;

#[test]
fn triangle_counts_and_lookups() {
    let g = Graph::new(samples::TRIANGLE.iter().copied()).unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.num_edges(), 3);
    assert_eq!(g.vertices(), &[VertexId(1), VertexId(2), VertexId(3)]);
    assert_eq!(g.edge_index(Edge::new(2, 3)), Some(3));
    assert_eq!(g.edge_index(Edge::new(3, 2)), None);
    assert_eq!(g.edge(2), Some(Edge::new(1, 3)));
    assert_eq!(g.edge(0), None);
    assert_eq!(g.edge(4), None);
    for v in 1..=3 {
        assert_eq!(g.slot(VertexId(v)), Some(v as usize));
    }
}

#[test]
fn edges_iterate_by_index_not_input_order() {
    let g = Graph::new([((2, 3), 3), ((1, 2), 1), ((1, 3), 2)]).unwrap();
    let order: Vec<(usize, Edge)> = g.edges().collect();
    assert_eq!(
        order,
        vec![
            (1, Edge::new(1, 2)),
            (2, Edge::new(1, 3)),
            (3, Edge::new(2, 3))
        ]
    );
}

#[test]
fn sparse_vertex_ids_get_dense_slots() {
    let g = Graph::from_edges([(10, 4), (4, 7)]).unwrap();
    assert_eq!(g.num_vertices(), 3);
    assert_eq!(g.slot(VertexId(4)), Some(1));
    assert_eq!(g.slot(VertexId(7)), Some(2));
    assert_eq!(g.slot(VertexId(10)), Some(3));
    assert!(!g.contains_vertex(VertexId(5)));
}

#[test]
fn rejects_malformed_graphs() {
    assert_eq!(Graph::from_edges(Vec::<(u32, u32)>::new()).unwrap_err(), GraphError::Empty);
    assert_eq!(
        Graph::from_edges([(1, 1)]).unwrap_err(),
        GraphError::SelfLoop(VertexId(1))
    );
    assert_eq!(
        Graph::from_edges([(0, 1)]).unwrap_err(),
        GraphError::ZeroVertex(Edge::new(0, 1))
    );
    assert_eq!(
        Graph::from_edges([(1, 2), (1, 2)]).unwrap_err(),
        GraphError::DuplicateEdge(Edge::new(1, 2))
    );
    assert!(matches!(
        Graph::from_edges([(1, 2), (2, 1)]).unwrap_err(),
        GraphError::AntiParallel(_)
    ));
    assert_eq!(
        Graph::new([((1, 2), 1), ((2, 3), 3)]).unwrap_err(),
        GraphError::BadIndex {
            edge: Edge::new(2, 3),
            index: 3,
            m: 2
        }
    );
    assert_eq!(
        Graph::new([((1, 2), 1), ((2, 3), 1)]).unwrap_err(),
        GraphError::DuplicateIndex(1)
    );
}

#[test]
fn parse_graph_text_forms() {
    let a: Graph = "1>2:1, 1>3:2, 2>3:3".parse().unwrap();
    let b: Graph = "(1,2), (1,3), 2->3".parse().unwrap();
    for g in [&a, &b] {
        assert_eq!(g.num_edges(), 3);
        assert_eq!(g.edge_index(Edge::new(1, 3)), Some(2));
    }
    let c: Graph = "2>3:2; 1>2:1".parse().unwrap();
    assert_eq!(c.edge(1), Some(Edge::new(1, 2)));

    assert!(matches!(
        "1>2:1, 2>3".parse::<Graph>(),
        Err(GraphError::Parse(_))
    ));
    assert!(matches!("1-2".parse::<Graph>(), Err(GraphError::Parse(_))));
    assert_eq!("".parse::<Graph>().unwrap_err(), GraphError::Empty);
}

#[test]
fn all_samples_are_well_formed() {
    for name in samples::GRAPH_NAMES {
        let g = samples::graph(name).expect("known name");
        assert!(g.is_ok(), "{name}: {:?}", g.err());
    }
    assert!(samples::graph("petersen").is_none());
    let five = samples::graph("five-clique").unwrap().unwrap();
    assert_eq!((five.num_vertices(), five.num_edges()), (5, 10));
}
