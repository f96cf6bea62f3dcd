/// Randomized checks of the edge and vertex editing operations of `DenseGraph` against a
/// `BTreeSet` reference, for one `GraphKind`.
///
/// Must be invoked inside the `graph` module, as it checks the internal invariants as well.
macro_rules! test_graph_ops {
    ($env:ident, $kind:expr) => {
        #[cfg(test)]
        mod $env {
            use std::collections::BTreeSet;

            use crate::{edge::*, graph::*, ops::*, vertex::*};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            use super::tests::assert_invariants;

            const KIND: GraphKind = $kind;

            /// Creates a set of at most `m_ub` random edges for vertices `0..n`
            fn random_edges<R: Rng>(rng: &mut R, n: VertexId, m_ub: usize) -> BTreeSet<EdgeId> {
                (0..m_ub)
                    .map(|_| {
                        let e = EdgeId(rng.random_range(0..n), rng.random_range(0..n));
                        if KIND == GraphKind::Undirected {
                            e.normalized()
                        } else {
                            e
                        }
                    })
                    .collect()
            }

            fn expected_neighbors(edges: &BTreeSet<EdgeId>, u: VertexId) -> Vec<VertexId> {
                edges
                    .iter()
                    .filter(|e| e.tail() == u)
                    .map(|e| e.head())
                    .sorted_unstable()
                    .collect()
            }

            #[test]
            fn graph_kind() {
                let graph = DenseGraph::with_order(3).with_kind(KIND);
                assert_eq!(graph.kind(), KIND);
                assert_eq!(graph.is_directed(), KIND == GraphKind::Directed);
                assert!(!graph.is_partially_directed());
            }

            #[test]
            fn from_edges() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as VertexId, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..5 {
                            let edges = random_edges(rng, n, m_ub as usize);
                            let graph = DenseGraph::from_edges(edges.iter()).with_kind(KIND);

                            let endpoints: VertexIdSet =
                                edges.iter().flat_map(|e| [e.0, e.1]).collect();
                            assert_eq!(graph.order(), endpoints.len());
                            assert_eq!(graph.size(), edges.len());
                            assert_eq!(graph.vertices().collect::<VertexIdSet>(), endpoints);
                            assert_eq!(graph.edges().collect::<BTreeSet<_>>(), edges);

                            for u in graph.vertices() {
                                assert_eq!(
                                    graph.neighbors_of(u).unwrap().sorted_unstable().collect_vec(),
                                    expected_neighbors(&edges, u)
                                );
                            }

                            assert_invariants(&graph);
                        }
                    }
                }
            }

            #[test]
            fn edge_editing() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as VertexId, 20, 50] {
                    for m_ub in [n * 2, n * 5, n * 10] {
                        for _ in 0..5 {
                            let mut edges = random_edges(rng, n, m_ub as usize);
                            let mut graph = DenseGraph::with_order(n as NumVertices).with_kind(KIND);

                            for &e in &edges {
                                assert_eq!(graph.add_edge(e), Ok(e));
                            }
                            assert_eq!(graph.size(), edges.len());
                            assert_eq!(graph.edges().collect_vec(), edges.iter().copied().collect_vec());
                            assert_eq!(
                                graph.edges().rev().collect_vec(),
                                edges.iter().rev().copied().collect_vec()
                            );

                            for _ in 0..m_ub {
                                let e = EdgeId(rng.random_range(0..n), rng.random_range(0..n));
                                let existed = edges.remove(&e);

                                assert_eq!(graph.has_edge(e), Ok(existed));
                                assert_eq!(graph.del_edge(e).is_ok(), existed);
                                assert_eq!(graph.has_edge(e), Ok(false));
                                assert_eq!(graph.size(), edges.len());
                            }

                            assert_eq!(graph.edges().collect::<BTreeSet<_>>(), edges);
                            assert_invariants(&graph);
                        }
                    }
                }
            }

            #[test]
            fn vertex_deletion() {
                let rng = &mut Pcg64Mcg::seed_from_u64(3);

                for n in [10 as VertexId, 20, 50] {
                    for _ in 0..5 {
                        let mut edges = random_edges(rng, n, 3 * n as usize);
                        let mut vertices: VertexIdSet = (0..n).collect();
                        let mut graph = DenseGraph::with_order(n as NumVertices).with_kind(KIND);

                        for (i, &e) in edges.iter().enumerate() {
                            graph.add_edge(e).unwrap();
                            if i % 3 == 0 {
                                graph.set_edge_label(e, &format!("e{i}")).unwrap();
                            }
                        }

                        for _ in 0..n / 2 {
                            let u = rng.random_range(0..n);
                            let existed = vertices.remove(&u);
                            assert_eq!(graph.del_vertex(u).is_ok(), existed);

                            edges.retain(|e| !e.is_incident_to(u));

                            assert_eq!(graph.order(), vertices.len());
                            assert_eq!(graph.vertices().collect::<VertexIdSet>(), vertices);
                            assert_eq!(graph.edges().collect::<BTreeSet<_>>(), edges);
                            assert!(graph.edge_labels().all(|(e, _)| edges.contains(&e)));
                            assert_invariants(&graph);
                        }

                        // freed ids are handed out again, smallest first
                        let smallest_free = (0..n).find(|u| !vertices.contains(u));
                        if let Some(u) = smallest_free {
                            assert_eq!(graph.add_vertex(), u);
                            assert_eq!(graph.degree_of(u), Ok(0));
                        }
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;
