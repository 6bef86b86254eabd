use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::object::{ObjectId, VisualObject};
use motif_core::{MotifError, MotifResult};

/// Holds every visual object declared by a scene and their current state.
/// Lookups are by id; iteration order is registration order so that
/// snapshots are deterministic. Single-threaded, synchronous mutation only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registry {
    objects: HashMap<ObjectId, VisualObject>,
    /// Registration order, for deterministic snapshots.
    order: Vec<ObjectId>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an object. Returns the id. Re-registering an existing id
    /// replaces the stored object but keeps its original position in the
    /// snapshot order.
    pub fn register(&mut self, object: VisualObject) -> ObjectId {
        let id = object.id.clone();
        if self.objects.insert(id.clone(), object).is_none() {
            self.order.push(id.clone());
        }
        id
    }

    /// Get an object by id.
    pub fn get(&self, id: &ObjectId) -> MotifResult<&VisualObject> {
        self.objects
            .get(id)
            .ok_or_else(|| MotifError::NotFound(id.0.clone()))
    }

    /// Get a mutable reference to an object by id.
    pub fn get_mut(&mut self, id: &ObjectId) -> MotifResult<&mut VisualObject> {
        self.objects
            .get_mut(id)
            .ok_or_else(|| MotifError::NotFound(id.0.clone()))
    }

    /// Apply an in-place mutation to the stored object.
    pub fn update<F>(&mut self, id: &ObjectId, f: F) -> MotifResult<()>
    where
        F: FnOnce(&mut VisualObject),
    {
        let obj = self.get_mut(id)?;
        f(obj);
        Ok(())
    }

    /// Remove an object. Returns it if present.
    pub fn remove(&mut self, id: &ObjectId) -> Option<VisualObject> {
        let removed = self.objects.remove(id);
        if removed.is_some() {
            self.order.retain(|o| o != id);
        }
        removed
    }

    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &VisualObject> {
        self.order.iter().filter_map(|id| self.objects.get(id))
    }

    /// A deterministic snapshot of all current object states, in
    /// registration order. This is what gets submitted to the back-end
    /// once per rendered tick.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            objects: self.iter().cloned().collect(),
        }
    }
}

/// A full copy of the registry state at one tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub objects: Vec<VisualObject>,
}

impl RegistrySnapshot {
    pub fn get(&self, id: &ObjectId) -> Option<&VisualObject> {
        self.objects.iter().find(|o| &o.id == id)
    }

    /// Objects currently visible (what the back-end actually draws).
    pub fn visible(&self) -> impl Iterator<Item = &VisualObject> {
        self.objects.iter().filter(|o| o.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::ShapeKind;

    fn dot(id: &str) -> VisualObject {
        VisualObject::shape(id, ShapeKind::Dot { radius: 0.1 })
    }

    #[test]
    fn test_register_and_get() {
        let mut reg = Registry::new();
        let id = reg.register(dot("a"));
        assert_eq!(reg.len(), 1);
        assert!(reg.get(&id).is_ok());
        assert!(reg.get(&ObjectId::new("missing")).is_err());
    }

    #[test]
    fn test_get_unknown_is_not_found() {
        let reg = Registry::new();
        match reg.get(&ObjectId::new("ghost")) {
            Err(MotifError::NotFound(id)) => assert_eq!(id, "ghost"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_update_mutates_in_place() {
        let mut reg = Registry::new();
        let id = reg.register(dot("a"));
        reg.update(&id, |o| o.pose.position.x = 3.0).unwrap();
        assert!((reg.get(&id).unwrap().pose.position.x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_update_unknown_is_not_found() {
        let mut reg = Registry::new();
        let err = reg.update(&ObjectId::new("ghost"), |_| {}).unwrap_err();
        assert!(matches!(err, MotifError::NotFound(_)));
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let mut reg = Registry::new();
        reg.register(dot("z"));
        reg.register(dot("a"));
        reg.register(dot("m"));
        let snap = reg.snapshot();
        let ids: Vec<&str> = snap.objects.iter().map(|o| o.id.0.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_remove() {
        let mut reg = Registry::new();
        let id = reg.register(dot("a"));
        assert!(reg.remove(&id).is_some());
        assert!(reg.remove(&id).is_none());
        assert!(reg.is_empty());
        assert!(reg.snapshot().objects.is_empty());
    }
}
