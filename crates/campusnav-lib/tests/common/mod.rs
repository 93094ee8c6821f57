//! Shared fixtures for integration tests.

use std::path::PathBuf;

use campusnav_lib::{load_campus_map, Graph, GraphBuilder, Position, Spot, SpotId};

/// Path to the checked-in campus map fixture.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/campus_map.json")
}

/// Load the fixture campus map.
#[allow(dead_code)]
pub fn fixture_graph() -> Graph {
    load_campus_map(&fixture_path()).expect("fixture map loads")
}

/// Build a graph from `(id, x, y)` spots and `(u, v, distance, crowding)` segments.
#[allow(dead_code)]
pub fn graph_from(spots: &[(SpotId, f64, f64)], segments: &[(SpotId, SpotId, f64, f64)]) -> Graph {
    let mut builder = GraphBuilder::new();
    for &(id, x, y) in spots {
        builder
            .add_spot(Spot {
                id,
                name: format!("Spot {id}"),
                category: "sight".to_string(),
                position: Position::new(x, y),
                description: None,
            })
            .expect("unique spot ids");
    }
    for &(u, v, distance, crowding) in segments {
        builder
            .add_segment(u, v, distance, crowding)
            .expect("valid segment");
    }
    builder.build()
}

/// The three-spot L-shaped graph: 1 -(3)- 2 -(4)- 3.
#[allow(dead_code)]
pub fn l_shaped_graph() -> Graph {
    graph_from(
        &[(1, 0.0, 0.0), (2, 3.0, 0.0), (3, 3.0, 4.0)],
        &[(1, 2, 3.0, 1.0), (2, 3, 4.0, 1.0)],
    )
}

/// Whether consecutive path entries are joined by a segment.
#[allow(dead_code)]
pub fn is_connected_walk(graph: &Graph, steps: &[SpotId]) -> bool {
    steps.windows(2).all(|pair| {
        graph
            .neighbours(pair[0])
            .iter()
            .any(|segment| segment.target == pair[1])
    })
}

/// Small deterministic generator so synthetic graphs are reproducible.
#[allow(dead_code)]
pub struct Lcg(u64);

#[allow(dead_code)]
impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    pub fn below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}
