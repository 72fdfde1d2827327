use rand::Rng;
use std::ops::Range;
use vitrine_structs::Vector3;

use crate::line::LineSegment;

/// Base opacity range for layer-to-layer links.
pub const BIPARTITE_OPACITY: Range<f32> = 0.2..0.4;

/// A line that remembers which two keyed nodes it joins.
#[derive(Debug, Clone, PartialEq)]
pub struct Connector<K> {
    pub from: K,
    pub to: K,
    pub segment: LineSegment,
}

impl<K: PartialEq> Connector<K> {
    #[inline]
    pub fn touches(&self, key: &K) -> bool {
        self.from == *key || self.to == *key
    }
}

/// Links every node of each layer to every node of the next one. Non-adjacent layers stay unlinked.
pub fn bipartite<K: Clone, R: Rng + ?Sized>(
    layers: &[Vec<(K, Vector3)>],
    rng: &mut R,
) -> Vec<Connector<K>> {
    let total: usize = layers.windows(2).map(|w| w[0].len() * w[1].len()).sum();
    let mut out = Vec::with_capacity(total);
    for pair in layers.windows(2) {
        for (from, a) in &pair[0] {
            for (to, b) in &pair[1] {
                out.push(Connector {
                    from: from.clone(),
                    to: to.clone(),
                    segment: LineSegment::new(*a, *b)
                        .with_opacity(rng.gen_range(BIPARTITE_OPACITY)),
                });
            }
        }
    }
    out
}

/// Highlight for connectors that touch the hovered node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectorStyle {
    pub highlight_opacity: f32,
    pub highlight_width: f32,
    pub base_width: f32,
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        Self {
            highlight_opacity: 0.9,
            highlight_width: 3.0,
            base_width: 1.0,
        }
    }
}

impl ConnectorStyle {
    /// `(opacity, width)` for `connector` given the currently hovered node.
    pub fn resolve<K: PartialEq>(&self, connector: &Connector<K>, hovered: Option<&K>) -> (f32, f32) {
        match hovered {
            Some(key) if connector.touches(key) => (self.highlight_opacity, self.highlight_width),
            _ => (connector.segment.opacity, self.base_width),
        }
    }
}
