//! Name-to-constructor registry through which the managed runtime discovers
//! native objects.

use secrand_rng::{BufferDescriptor, RandomFillService, RngResult};
use std::collections::HashMap;
use tracing::info;

/// Name under which the random-values module is registered.
pub const GET_RANDOM_VALUES: &str = "getRandomValues";

/// A native object the managed runtime can look up by name and invoke.
pub trait NativeModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// The module's single operation: overwrite the described buffer with
    /// cryptographically secure random bytes.
    fn get_random_values(&self, buffer: BufferDescriptor<'_>) -> RngResult<()>;
}

/// The builtin random-values module, backed by the process-wide subsystem.
#[derive(Default)]
pub struct GetRandomValues;

impl NativeModule for GetRandomValues {
    fn name(&self) -> &'static str {
        GET_RANDOM_VALUES
    }

    fn get_random_values(&self, buffer: BufferDescriptor<'_>) -> RngResult<()> {
        RandomFillService::global().fill(buffer)
    }
}

type Constructor = fn() -> Box<dyn NativeModule>;

/// Mapping from module name to constructor, populated at module load.
pub struct Registry {
    modules: HashMap<&'static str, Constructor>,
}

impl Registry {
    /// An empty registry, for hosts that assemble their own module set.
    pub fn empty() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// A registry holding the builtin modules.
    pub fn with_builtins() -> Self {
        let mut registry = Self::empty();
        registry.register(GET_RANDOM_VALUES, || Box::new(GetRandomValues));
        registry
    }

    pub fn register(&mut self, name: &'static str, constructor: Constructor) {
        self.modules.insert(name, constructor);
        info!(module = name, "registered native module");
    }

    /// Construct the module registered under `name`, if any.
    pub fn instantiate(&self, name: &str) -> Option<Box<dyn NativeModule>> {
        self.modules.get(name).map(|constructor| constructor())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
