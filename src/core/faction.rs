//! Faction ids and dense per-faction storage.
//!
//! The faction set is closed: `GameConfig` fixes it before play starts and it
//! never changes while a game runs.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// 0-based faction index into the configured faction list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FactionId(pub u8);

impl FactionId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// ```
    /// use elimination_engine::core::FactionId;
    ///
    /// let factions: Vec<_> = FactionId::all(4).collect();
    /// assert_eq!(factions[3], FactionId::new(3));
    /// ```
    pub fn all(faction_count: usize) -> impl Iterator<Item = FactionId> {
        (0..faction_count as u8).map(FactionId)
    }
}

impl std::fmt::Display for FactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Faction {}", self.0)
    }
}

/// One value per faction, in faction order.
///
/// Indexing with a faction outside the map panics; use [`FactionMap::get`]
/// for ids that have not been checked against the configuration.
///
/// ```
/// use elimination_engine::core::{FactionId, FactionMap};
///
/// let mut active: FactionMap<u32> = FactionMap::from_vec(vec![15, 6, 9, 9]);
/// active[FactionId::new(1)] -= 2;
/// assert_eq!(active.sum(), 37);
/// assert_eq!(active.get(FactionId::new(7)), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FactionMap<T> {
    data: Vec<T>,
}

impl<T> FactionMap<T> {
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 faction");
        assert!(data.len() <= 255, "At most 255 factions supported");
        Self { data }
    }

    pub fn with_value(faction_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_vec(vec![value; faction_count])
    }

    #[must_use]
    pub fn faction_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn contains(&self, faction: FactionId) -> bool {
        faction.index() < self.data.len()
    }

    /// Entry for `faction`, or `None` if the faction is not configured.
    #[must_use]
    pub fn get(&self, faction: FactionId) -> Option<&T> {
        self.data.get(faction.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FactionId, &T)> {
        self.faction_ids().zip(self.data.iter())
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (FactionId, &mut T)> {
        FactionId::all(self.data.len()).zip(self.data.iter_mut())
    }

    pub fn faction_ids(&self) -> impl Iterator<Item = FactionId> {
        FactionId::all(self.data.len())
    }

    /// Build a new map by transforming every entry.
    pub fn map<U>(&self, f: impl Fn(FactionId, &T) -> U) -> FactionMap<U> {
        FactionMap {
            data: self.iter().map(|(id, v)| f(id, v)).collect(),
        }
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl FactionMap<u32> {
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.data.iter().sum()
    }
}

impl<T> Index<FactionId> for FactionMap<T> {
    type Output = T;

    fn index(&self, faction: FactionId) -> &T {
        &self.data[faction.index()]
    }
}

impl<T> IndexMut<FactionId> for FactionMap<T> {
    fn index_mut(&mut self, faction: FactionId) -> &mut T {
        &mut self.data[faction.index()]
    }
}
