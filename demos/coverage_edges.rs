//! Builds the edge set of a small coverage and prints it as WKT.
//!
//! ```text
//! cargo run --example coverage_edges
//! RUST_LOG=polycover=trace cargo run --example coverage_edges
//! ```
//!
//! The coverage is two unit squares sharing the boundary `x = 1` plus one
//! island triangle. Node indices are given by hand; finding them is the job
//! of a real coverage builder.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use polycover::coverage::{ring_key, section_key};
use polycover::geometry::PrecisionModel;
use polycover::{assemble_lines, CoverageEdge, EdgeKey, GeometryFactory, Result, Ring};

#[derive(Default)]
struct EdgeSet {
    edges: Vec<CoverageEdge>,
    index: HashMap<EdgeKey, usize>,
}

impl EdgeSet {
    fn add(&mut self, key: EdgeKey, create: impl FnOnce() -> Result<CoverageEdge>) -> Result<()> {
        let slot = match self.index.entry(key) {
            Entry::Occupied(e) => *e.get(),
            Entry::Vacant(v) => {
                self.edges.push(create()?);
                *v.insert(self.edges.len() - 1)
            }
        };
        self.edges[slot].increment_ring_count();
        Ok(())
    }

    fn add_ring(&mut self, ring: &Ring, nodes: &[usize]) -> Result<()> {
        let coords = ring.coords();
        if nodes.is_empty() {
            return self.add(ring_key(coords)?, || CoverageEdge::from_ring(coords));
        }
        for (i, &start) in nodes.iter().enumerate() {
            let end = nodes[(i + 1) % nodes.len()];
            self.add(section_key(coords, start, end)?, || {
                CoverageEdge::from_section(coords, start, end)
            })?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("coverage_edges=info".parse().unwrap_or_default())
        .add_directive("polycover=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let left = Ring::from_xy(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.5),
        (1.0, 1.0),
        (0.0, 1.0),
        (0.0, 0.0),
    ])?;
    let right = Ring::from_xy(&[
        (1.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 0.5),
        (1.0, 0.0),
    ])?;
    let island = Ring::from_xy(&[(5.0, 5.0), (6.0, 5.0), (6.0, 6.0), (5.0, 5.0)])?;

    let mut set = EdgeSet::default();
    set.add_ring(&left, &[1, 3])?;
    set.add_ring(&right, &[0, 3])?;
    set.add_ring(&island, &[])?;

    for edge in &set.edges {
        tracing::info!(
            ring_count = edge.ring_count(),
            free_ring = edge.is_free_ring(),
            "{edge}"
        );
    }

    let factory = GeometryFactory::new(0, PrecisionModel::Floating);
    println!("{}", assemble_lines(&set.edges, &factory));
    Ok(())
}
