use ahash::AHashMap;
use vitrine_ids::{SceneID, TimerID};

/// Shortest interval a repeating timer may have, in milliseconds.
pub const MIN_INTERVAL_MS: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct TimerEntry {
    owner: SceneID,
    due_ms: f64,
    interval_ms: Option<f64>,
}

/// Fire-and-forget timers on the runtime clock. Every timer belongs to a
/// scene and dies with it.
#[derive(Default)]
pub struct TimerQueue {
    entries: AHashMap<TimerID, TimerEntry>,
    next_index: u32,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate(&mut self) -> TimerID {
        self.next_index = self.next_index.wrapping_add(1).max(1);
        TimerID::from_parts(self.next_index, 0)
    }

    pub fn once(&mut self, owner: SceneID, now_ms: f64, delay_ms: f64) -> TimerID {
        let id = self.allocate();
        self.entries.insert(
            id,
            TimerEntry {
                owner,
                due_ms: now_ms + delay_ms.max(0.0),
                interval_ms: None,
            },
        );
        id
    }

    pub fn interval(&mut self, owner: SceneID, now_ms: f64, interval_ms: f64) -> TimerID {
        let interval_ms = interval_ms.max(MIN_INTERVAL_MS);
        let id = self.allocate();
        self.entries.insert(
            id,
            TimerEntry {
                owner,
                due_ms: now_ms + interval_ms,
                interval_ms: Some(interval_ms),
            },
        );
        id
    }

    /// Cancels one timer. Only its owner may cancel it.
    pub fn cancel(&mut self, owner: SceneID, id: TimerID) -> bool {
        match self.entries.get(&id) {
            Some(entry) if entry.owner == owner => {
                self.entries.remove(&id);
                true
            }
            _ => false,
        }
    }

    /// Drops every pending timer of `owner`, returning how many were pending.
    pub fn cancel_owned(&mut self, owner: SceneID) -> usize {
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.owner != owner);
        before - self.entries.len()
    }

    /// Earliest timer due at or before `now_ms`. One-shot timers are removed,
    /// interval timers are rescheduled one period later. Ties break on ID.
    pub fn pop_due(&mut self, now_ms: f64) -> Option<(TimerID, SceneID)> {
        let (&id, _) = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.due_ms <= now_ms)
            .min_by(|(a_id, a), (b_id, b)| {
                a.due_ms
                    .total_cmp(&b.due_ms)
                    .then_with(|| a_id.index().cmp(&b_id.index()))
            })?;

        let entry = self.entries.get_mut(&id)?;
        let owner = entry.owner;
        match entry.interval_ms {
            Some(interval) => entry.due_ms += interval,
            None => {
                self.entries.remove(&id);
            }
        }
        Some((id, owner))
    }

    pub fn is_pending(&self, id: TimerID) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn pending_for(&self, owner: SceneID) -> usize {
        self.entries.values().filter(|e| e.owner == owner).count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
