//! Reusable physics scenarios

use hepkit_core::Measurement;

use super::generators::EventRecord;

/// Cut-flow of an analysis: event yields after each selection step
pub struct CutFlow {
    pub labels: Vec<&'static str>,
    pub yields: Vec<Measurement>,
}

impl CutFlow {
    /// Four-step selection with Poisson yields
    pub fn ttbar_selection() -> Self {
        Self {
            labels: vec!["trigger", "one lepton", ">= 4 jets", ">= 1 b-tag"],
            yields: vec![
                Measurement::from_counts(40_000),
                Measurement::from_counts(10_000),
                Measurement::from_counts(2_500),
                Measurement::from_counts(1_600),
            ],
        }
    }
}

/// Semileptonic ttbar record:
///
/// ```text
/// 0 g, 1 g -> 2 t, 3 tbar
/// 2 t -> 4 W+, 5 b ; 4 W+ -> 6 mu+, 7 nu_mu
/// 3 tbar -> 8 W-, 9 bbar ; 8 W- -> 10 d, 11 ubar
/// 5 b -> 12 B0 -> 13 D- , 14 mu-
/// ```
pub fn semileptonic_ttbar() -> EventRecord {
    let mut record = EventRecord::new();
    let g1 = record.add(21, &[]);
    let g2 = record.add(21, &[]);
    let top = record.add(6, &[g1, g2]);
    let antitop = record.add(-6, &[g1, g2]);
    let w_plus = record.add(24, &[top]);
    let b = record.add(5, &[top]);
    record.add(-13, &[w_plus]);
    record.add(14, &[w_plus]);
    let w_minus = record.add(-24, &[antitop]);
    record.add(-5, &[antitop]);
    record.add(1, &[w_minus]);
    record.add(-2, &[w_minus]);
    let b_meson = record.add(511, &[b]);
    record.add(-411, &[b_meson]);
    record.add(13, &[b_meson]);
    record
}
