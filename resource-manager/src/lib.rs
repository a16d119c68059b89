use std::{
    collections::HashMap,
    io,
    path::{Path, PathBuf},
};

use log::{info, warn};
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum LoadingError {
    #[snafu(display("Could not read `{}`: {source}", path.display()))]
    IOError { path: PathBuf, source: io::Error },
    #[snafu(display("Malformed data in `{}`: {source}", path.display()))]
    Malformed {
        path: PathBuf,
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[snafu(display("Invalid metadata in `{}`: {source}", path.display()))]
    ParserError { path: PathBuf, source: serde_json::Error },
}

pub trait Resource {
    fn load_resource(path: &Path) -> Result<Self, LoadingError>
    where
        Self: Sized;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceIndex {
    pub index: usize,
    pub generation: u32,
}

#[derive(Debug)]
enum PossibleResource<A> {
    Some(A, u32),
    None(u32),
}

#[derive(Debug)]
pub struct ResourceManager<A: Resource> {
    resources: Vec<PossibleResource<A>>,
    resource_mapping: HashMap<String, ResourceIndex>,
}

impl<A: Resource> Default for ResourceManager<A> {
    fn default() -> Self {
        ResourceManager::new()
    }
}

impl<A: Resource> ResourceManager<A> {
    pub fn new() -> ResourceManager<A> {
        ResourceManager {
            resources: Vec::new(),
            resource_mapping: HashMap::new(),
        }
    }

    pub fn add_resource(&mut self, key: String, resource: A) -> ResourceIndex {
        if let Some(old_index) = self.resource_mapping.remove(&key) {
            self.free_slot(old_index);
        }

        // reuse the first free slot, bumping its generation
        let opening = self
            .resources
            .iter()
            .position(|slot| matches!(slot, PossibleResource::None(_)));

        let index = if let Some(opening) = opening {
            let generation = match self.resources[opening] {
                PossibleResource::Some(..) => unreachable!(),
                PossibleResource::None(generation) => generation + 1,
            };

            self.resources[opening] = PossibleResource::Some(resource, generation);

            ResourceIndex {
                index: opening,
                generation,
            }
        } else {
            self.resources.push(PossibleResource::Some(resource, 0));

            ResourceIndex {
                index: self.resources.len() - 1,
                generation: 0,
            }
        };

        self.resource_mapping.insert(key, index);

        index
    }

    pub fn get_index(&self, key: &str) -> Option<ResourceIndex> {
        self.resource_mapping.get(key).copied()
    }

    /// Loads the resource at `location` unless `key` is already registered.
    pub fn request_resource(&mut self, key: &str, location: &Path) -> Result<ResourceIndex, LoadingError> {
        if let Some(index) = self.get_index(key) {
            return Ok(index);
        }

        let resource = A::load_resource(location)?;
        info!("loaded resource `{}` from {:?}", key, location);

        Ok(self.add_resource(key.to_string(), resource))
    }

    pub fn borrow_resource(&self, index: ResourceIndex) -> Option<&A> {
        match self.resources.get(index.index) {
            Some(PossibleResource::Some(resource, generation)) if *generation == index.generation => Some(resource),
            _ => {
                warn!("stale or missing resource index {:?}", index);
                None
            }
        }
    }

    pub fn remove_resource(&mut self, key: &str) -> Option<A> {
        let index = self.resource_mapping.remove(key)?;

        self.free_slot(index)
    }

    fn free_slot(&mut self, index: ResourceIndex) -> Option<A> {
        let slot = self.resources.get_mut(index.index)?;

        match std::mem::replace(slot, PossibleResource::None(index.generation)) {
            PossibleResource::Some(resource, _) => Some(resource),
            PossibleResource::None(_) => None,
        }
    }

    pub fn len(&self) -> usize {
        self.resource_mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resource_mapping.is_empty()
    }

    pub fn clear(&mut self) {
        self.resource_mapping.clear();
        self.resources.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Dummy(String);

    impl Resource for Dummy {
        fn load_resource(path: &Path) -> Result<Self, LoadingError> {
            if path.starts_with("missing") {
                return Err(LoadingError::IOError {
                    path: path.into(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not found"),
                });
            }

            Ok(Dummy(path.to_string_lossy().into_owned()))
        }
    }

    #[test]
    fn request_loads_once() {
        let mut manager: ResourceManager<Dummy> = ResourceManager::new();

        let first = manager.request_resource("a", Path::new("first")).unwrap();
        let second = manager.request_resource("a", Path::new("second")).unwrap();

        assert_eq!(first, second);
        assert_eq!(manager.borrow_resource(first), Some(&Dummy("first".into())));
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn failed_load_registers_nothing() {
        let mut manager: ResourceManager<Dummy> = ResourceManager::new();

        let result = manager.request_resource("a", Path::new("missing/file"));

        assert!(matches!(result, Err(LoadingError::IOError { .. })));
        assert!(manager.is_empty());
        assert_eq!(manager.get_index("a"), None);
    }

    #[test]
    fn stale_index_after_reuse() {
        let mut manager: ResourceManager<Dummy> = ResourceManager::new();

        let old = manager.add_resource("a".into(), Dummy("a".into()));
        assert_eq!(manager.remove_resource("a"), Some(Dummy("a".into())));

        let new = manager.add_resource("b".into(), Dummy("b".into()));

        assert_eq!(new.index, old.index);
        assert_eq!(new.generation, old.generation + 1);
        assert_eq!(manager.borrow_resource(old), None);
        assert_eq!(manager.borrow_resource(new), Some(&Dummy("b".into())));
    }

    #[test]
    fn replacing_a_key_frees_the_old_slot() {
        let mut manager: ResourceManager<Dummy> = ResourceManager::new();

        let old = manager.add_resource("a".into(), Dummy("one".into()));
        let new = manager.add_resource("a".into(), Dummy("two".into()));

        assert_eq!(manager.len(), 1);
        assert_eq!(manager.borrow_resource(old), None);
        assert_eq!(manager.borrow_resource(new), Some(&Dummy("two".into())));
    }

    #[test]
    fn clear_drops_everything() {
        let mut manager: ResourceManager<Dummy> = ResourceManager::new();

        let index = manager.add_resource("a".into(), Dummy("a".into()));
        manager.clear();

        assert!(manager.is_empty());
        assert_eq!(manager.borrow_resource(index), None);
    }
}
