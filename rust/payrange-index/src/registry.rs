//! Global registry of container factories.
//!
//! The registry decouples consumers from concrete factory implementations:
//! factories are registered at runtime under their stable name and retrieved
//! by name when a container needs to be built. A `RwLock` allows many
//! concurrent readers while registration holds exclusive access.

use std::sync::{Arc, RwLock};

use payrange_common::{Result, error::Error};

use crate::factory::ContainerFactory;

/// Registers a factory in the global registry under its
/// [`name`](ContainerFactory::name).
pub fn add(factory: impl Into<Arc<dyn ContainerFactory>>) {
    let factory = factory.into();
    let name = factory.name().to_string();
    REGISTRY.write().unwrap().insert(name, factory);
}

/// Retrieves a factory by name.
///
/// # Errors
///
/// Returns an `invalid_arg` error when no factory with the given name is
/// registered.
pub fn get(name: impl AsRef<str>) -> Result<Arc<dyn ContainerFactory>> {
    let name = name.as_ref();
    let factory = REGISTRY.read().unwrap().get(name).cloned();
    factory.ok_or_else(|| {
        Error::invalid_arg(
            "factory name",
            format!("Container factory '{name}' not found"),
        )
    })
}

/// Factory names to implementations. The fixed-seed hasher allows `const`
/// static construction; the map is populated at runtime.
static REGISTRY: RwLock<ahash::HashMap<String, Arc<dyn ContainerFactory>>> =
    RwLock::new(ahash::HashMap::with_hasher(ahash::RandomState::with_seeds(
        90231458, 6654122987, 330815622, 9083511450,
    )));
