//! Generators for measurements and event records

use hepkit_core::{
    ancestry::{DecayTree, NodeId},
    Measurement,
};

use super::harness::TestRng;

/// Random measurement with central in `[-scale, scale]` and errors up to
/// `scale / 10`
pub fn random_measurement(rng: &mut TestRng, scale: f64) -> Measurement {
    let central = rng.gen_range(-scale, scale);
    let up = rng.gen_range(0.0, scale / 10.0);
    let down = rng.gen_range(0.0, scale / 10.0);
    Measurement::new(central, up, down)
}

/// Owned event record built particle by particle
#[derive(Default)]
pub struct EventRecord {
    pdg: Vec<i32>,
    mothers: Vec<Vec<NodeId>>,
    daughters: Vec<Vec<NodeId>>,
}

impl EventRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a particle with the given mothers, returning its index
    pub fn add(&mut self, pdg_id: i32, mothers: &[NodeId]) -> NodeId {
        let id = self.pdg.len();
        self.pdg.push(pdg_id);
        self.mothers.push(mothers.to_vec());
        self.daughters.push(Vec::new());
        for &mother in mothers {
            self.daughters[mother].push(id);
        }
        id
    }

    /// Add an extra mother link, allowing loops in malformed records
    pub fn link(&mut self, mother: NodeId, daughter: NodeId) {
        self.mothers[daughter].push(mother);
        self.daughters[mother].push(daughter);
    }

    pub fn len(&self) -> usize {
        self.pdg.len()
    }
}

impl DecayTree for EventRecord {
    fn pdg_id(&self, node: NodeId) -> i32 {
        self.pdg[node]
    }

    fn mothers(&self, node: NodeId) -> &[NodeId] {
        &self.mothers[node]
    }

    fn daughters(&self, node: NodeId) -> &[NodeId] {
        &self.daughters[node]
    }
}
