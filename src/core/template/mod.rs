//=========================================================================
// Menu Templates
//=========================================================================
//
// Blueprints from which live menu panels are created.
//
// Architecture:
//   TemplateSource (TemplateList | ResourceFolder)
//        ↓ scan()
//   TemplateRegistry ── LoadPolicy (Eager | Lazy | Uncached)
//        ↓ resolve(kind)
//   MenuTemplate ── instantiate() → Box<dyn Menu<K>>
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::menu::{Menu, MenuFlags, MenuKey};

//=== Module Declarations =================================================

mod registry;
mod sources;

//=== Public API ==========================================================

pub use registry::{LoadPolicy, TemplateRegistry};
pub use sources::{ResourceFolder, TemplateList};

//=== MenuTemplate ========================================================

type MenuFactory<K> = Box<dyn Fn() -> Box<dyn Menu<K>> + Send + Sync>;

/// A named blueprint for one menu kind.
///
/// Carries the behavior flags every instance starts with and a factory
/// that builds a fresh menu value per instantiation.
pub struct MenuTemplate<K: MenuKey> {
    name: String,
    kind: K,
    flags: MenuFlags,
    factory: MenuFactory<K>,
}

impl<K: MenuKey> MenuTemplate<K> {
    /// Creates a template with default flags.
    pub fn new<M, F>(name: impl Into<String>, kind: K, factory: F) -> Self
    where
        M: Menu<K> + 'static,
        F: Fn() -> M + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind,
            flags: MenuFlags::default(),
            factory: Box::new(move || Box::new(factory())),
        }
    }

    /// Overrides the behavior flags.
    pub fn with_flags(mut self, flags: MenuFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> K {
        self.kind
    }

    pub fn flags(&self) -> MenuFlags {
        self.flags
    }

    /// Builds a new menu value from this template.
    pub fn instantiate(&self) -> Box<dyn Menu<K>> {
        (self.factory)()
    }
}

impl<K: MenuKey> fmt::Debug for MenuTemplate<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MenuTemplate")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .finish_non_exhaustive()
    }
}

//=== TemplateSource Trait ================================================

/// Supplies candidate templates to the registry.
///
/// `scan` returns every template the source knows about, in a stable
/// enumeration order. The registry filters by kind and picks the first
/// match, so order decides which template wins when several share a kind.
pub trait TemplateSource<K: MenuKey>: Send {
    /// Human-readable name used in logs and errors.
    fn describe(&self) -> String;

    /// Enumerates all templates. May be expensive.
    fn scan(&self) -> Vec<Arc<MenuTemplate<K>>>;
}

//=========================================================================
// Unit Tests
//=========================================================================
