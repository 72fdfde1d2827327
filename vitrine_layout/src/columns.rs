use vitrine_structs::Vector3;

/// Vertical columns of nodes spread along X, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayeredColumns {
    /// Distance between adjacent columns.
    pub spacing: f32,
    /// Vertical distance between nodes in a column.
    pub node_spacing: f32,
    /// Height of a column's title anchor.
    pub title_height: f32,
}

impl Default for LayeredColumns {
    fn default() -> Self {
        Self {
            spacing: 4.0,
            node_spacing: 1.2,
            title_height: 2.5,
        }
    }
}

impl LayeredColumns {
    pub fn column_x(&self, layer: usize, layers: usize) -> Option<f32> {
        if layers == 0 {
            return None;
        }
        Some(layer as f32 * self.spacing - (layers - 1) as f32 * self.spacing / 2.0)
    }

    pub fn node(&self, layer: usize, layers: usize, index: usize, nodes: usize) -> Option<Vector3> {
        let x = self.column_x(layer, layers)?;
        if nodes == 0 {
            return None;
        }
        let y = (index as f32 - (nodes - 1) as f32 / 2.0) * self.node_spacing;
        Some(Vector3::new(x, y, 0.0))
    }

    pub fn title(&self, layer: usize, layers: usize) -> Option<Vector3> {
        Some(Vector3::new(self.column_x(layer, layers)?, self.title_height, 0.0))
    }

    /// Positions of every node, one Vec per layer. `sizes[l]` is the node count of layer `l`.
    pub fn arrange(&self, sizes: &[usize]) -> Vec<Vec<Vector3>> {
        let layers = sizes.len();
        sizes
            .iter()
            .enumerate()
            .map(|(l, &n)| (0..n).filter_map(|i| self.node(l, layers, i, n)).collect())
            .collect()
    }
}
