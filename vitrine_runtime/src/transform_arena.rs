use vitrine_ids::{AssetRequestID, SceneID, TransformID};
use vitrine_structs::{Color, Transform3D};

/// One element of a mounted scene: a local transform plus what the renderer
/// needs to draw it. Owned by exactly one scene.
#[derive(Debug, Clone)]
pub struct TransformRecord {
    pub transform: Transform3D,
    pub parent: TransformID,
    pub owner: SceneID,
    pub opacity: f32,
    pub visible: bool,
    pub mesh: Option<AssetRequestID>,
    pub texture: Option<AssetRequestID>,
    pub tint: Color,
    /// Text the host draws at this element's world position.
    pub label: Option<String>,
    /// Whether the backend currently retains a draw for this record.
    pub(crate) drawn: bool,
}

impl TransformRecord {
    pub fn new(owner: SceneID, transform: Transform3D) -> Self {
        Self {
            transform,
            parent: TransformID::nil(),
            owner,
            opacity: 1.0,
            visible: true,
            mesh: None,
            texture: None,
            tint: Color::WHITE,
            label: None,
            drawn: false,
        }
    }
}

pub struct TransformArena {
    records: Vec<Option<TransformRecord>>,
    generations: Vec<u32>,
    free_indices: Vec<usize>,
}

impl Default for TransformArena {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformArena {
    pub fn new() -> Self {
        // Index 0 is the nil sentinel so the first real ID is 1.
        Self {
            records: vec![None],
            generations: vec![0],
            free_indices: Vec::new(),
        }
    }

    pub fn insert(&mut self, record: TransformRecord) -> TransformID {
        if let Some(index) = self.free_indices.pop() {
            self.records[index] = Some(record);
            return TransformID::from_parts(index as u32, self.generations[index]);
        }

        let index = self.records.len();
        self.records.push(Some(record));
        self.generations.push(0);
        TransformID::from_parts(index as u32, 0)
    }

    #[inline]
    fn slot(&self, id: TransformID) -> Option<usize> {
        let index = id.index() as usize;
        if id.is_nil()
            || index == 0
            || index >= self.records.len()
            || self.generations[index] != id.generation()
        {
            return None;
        }
        Some(index)
    }

    pub fn get(&self, id: TransformID) -> Option<&TransformRecord> {
        self.records[self.slot(id)?].as_ref()
    }

    pub fn get_mut(&mut self, id: TransformID) -> Option<&mut TransformRecord> {
        let index = self.slot(id)?;
        self.records[index].as_mut()
    }

    /// Removes a record, bumping its generation so stale IDs resolve to `None`.
    pub fn remove(&mut self, id: TransformID) -> Option<TransformRecord> {
        let index = self.slot(id)?;
        let removed = self.records[index].take();
        if removed.is_some() {
            self.generations[index] = self.generations[index].wrapping_add(1);
            self.free_indices.push(index);
        }
        removed
    }

    pub fn contains(&self, id: TransformID) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TransformID, &TransformRecord)> {
        self.records
            .iter()
            .enumerate()
            .skip(1)
            .filter_map(|(index, record)| {
                record
                    .as_ref()
                    .map(|r| (TransformID::from_parts(index as u32, self.generations[index]), r))
            })
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TransformID, &mut TransformRecord)> {
        self.records
            .iter_mut()
            .zip(self.generations.iter())
            .enumerate()
            .skip(1)
            .filter_map(|(index, (record, &generation))| {
                record
                    .as_mut()
                    .map(|r| (TransformID::from_parts(index as u32, generation), r))
            })
    }

    pub fn owned_by(&self, owner: SceneID) -> Vec<TransformID> {
        self.iter()
            .filter(|(_, record)| record.owner == owner)
            .map(|(id, _)| id)
            .collect()
    }

    /// IDs of `root` and everything parented under it, parents first.
    pub fn subtree(&self, root: TransformID) -> Vec<TransformID> {
        if !self.contains(root) {
            return Vec::new();
        }
        let mut out = vec![root];
        let mut cursor = 0;
        while cursor < out.len() {
            let parent = out[cursor];
            out.extend(
                self.iter()
                    .filter(|(_, record)| record.parent == parent)
                    .map(|(id, _)| id),
            );
            cursor += 1;
        }
        out
    }

    pub fn len(&self) -> usize {
        self.records.iter().filter(|r| r.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.records.iter().all(|r| r.is_none())
    }
}
