use crate::scene::{Scene, SceneFlags};
use ahash::AHashMap;
use vitrine_ids::SceneID;

type IdMap = AHashMap<SceneID, usize>;

pub struct SceneInstance {
    pub scene: Box<dyn Scene>,
    pub flags: SceneFlags,
    /// Runtime clock reading at mount, so every scene's elapsed time starts at 0.
    pub mounted_at_ms: f64,
}

pub struct SceneCollection {
    instances: Vec<SceneInstance>,
    ids: Vec<SceneID>,
    index: IdMap,

    update: Vec<usize>,
    // Reverse index for O(1) schedule removal
    update_pos: AHashMap<usize, usize>,
}

impl Default for SceneCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCollection {
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            ids: Vec::new(),
            index: AHashMap::default(),
            update: Vec::new(),
            update_pos: AHashMap::default(),
        }
    }

    pub fn insert(&mut self, id: SceneID, instance: SceneInstance) {
        let flags = instance.flags;

        if let Some(&i) = self.index.get(&id) {
            self.instances[i] = instance;
            self.remove_from_schedule(i);
            if flags.has_update() {
                self.schedule(i);
            }
            return;
        }

        let i = self.instances.len();
        self.instances.push(instance);
        self.ids.push(id);
        self.index.insert(id, i);
        if flags.has_update() {
            self.schedule(i);
        }
    }

    pub fn remove(&mut self, id: SceneID) -> Option<SceneInstance> {
        let i = self.index.remove(&id)?;
        self.remove_from_schedule(i);

        let last = self.instances.len() - 1;
        self.instances.swap(i, last);
        self.ids.swap(i, last);
        let removed = self.instances.pop()?;
        self.ids.pop();

        if i != last {
            let moved_id = self.ids[i];
            self.index.insert(moved_id, i);
            if let Some(pos) = self.update_pos.remove(&last) {
                self.update[pos] = i;
                self.update_pos.insert(i, pos);
            }
        }

        Some(removed)
    }

    pub fn get(&self, id: SceneID) -> Option<&SceneInstance> {
        let &i = self.index.get(&id)?;
        self.instances.get(i)
    }

    pub fn get_mut(&mut self, id: SceneID) -> Option<&mut SceneInstance> {
        let &i = self.index.get(&id)?;
        self.instances.get_mut(i)
    }

    pub fn contains(&self, id: SceneID) -> bool {
        self.index.contains_key(&id)
    }

    pub fn find(&self, name: &str) -> Option<SceneID> {
        self.instances
            .iter()
            .position(|instance| instance.scene.name() == name)
            .map(|i| self.ids[i])
    }

    pub(crate) fn append_update_ids(&self, out: &mut Vec<SceneID>) {
        out.reserve(self.update.len());
        for &i in &self.update {
            out.push(self.ids[i]);
        }
    }

    pub(crate) fn append_ids(&self, out: &mut Vec<SceneID>) {
        out.extend_from_slice(&self.ids);
    }

    #[inline]
    pub fn update_schedule_len(&self) -> usize {
        self.update.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    fn schedule(&mut self, i: usize) {
        let pos = self.update.len();
        self.update.push(i);
        self.update_pos.insert(i, pos);
    }

    fn remove_from_schedule(&mut self, i: usize) {
        if let Some(pos) = self.update_pos.remove(&i) {
            let last_pos = self.update.len() - 1;
            self.update.swap_remove(pos);

            if pos != last_pos {
                let moved_idx = self.update[pos];
                self.update_pos.insert(moved_idx, pos);
            }
        }
    }
}
