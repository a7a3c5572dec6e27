//=========================================================================
// Template Registry
//=========================================================================
//
// Resolves a menu kind to exactly one template.
//
// Resolution:
//   0 candidates  → MenuError::MissingTemplate
//   1 candidate   → that template
//   N candidates  → warning, first in scan order
//
// Scanning is blocking and may be cached depending on LoadPolicy.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{MenuTemplate, TemplateSource};
use crate::core::menu::MenuKey;
use crate::core::MenuError;

//=== LoadPolicy ==========================================================

/// When the registry scans its source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPolicy {
    /// Scan once while the registry is built.
    Eager,

    /// Scan on the first resolve and reuse the result afterwards.
    #[default]
    Lazy,

    /// Scan on every resolve.
    Uncached,
}

//=== TemplateRegistry ====================================================

/// Kind → template lookup over a [`TemplateSource`].
pub struct TemplateRegistry<K: MenuKey> {
    source: Box<dyn TemplateSource<K>>,
    policy: LoadPolicy,
    cache: Option<Vec<Arc<MenuTemplate<K>>>>,
    scans: usize,
}

impl<K: MenuKey> TemplateRegistry<K> {
    /// Creates a registry. `LoadPolicy::Eager` scans immediately.
    pub fn new<T>(source: T, policy: LoadPolicy) -> Self
    where
        T: TemplateSource<K> + 'static,
    {
        let mut registry = Self {
            source: Box::new(source),
            policy,
            cache: None,
            scans: 0,
        };

        if policy == LoadPolicy::Eager {
            let templates = registry.scan();
            registry.cache = Some(templates);
        }

        registry
    }

    //--- Resolution -------------------------------------------------------

    /// Locates the template for `kind`.
    pub fn resolve(&mut self, kind: K) -> Result<Arc<MenuTemplate<K>>, MenuError> {
        let mut candidates = self.candidates(kind);

        if candidates.is_empty() {
            return Err(MenuError::MissingTemplate {
                kind: format!("{:?}", kind),
                source_name: self.source.describe(),
            });
        }

        if candidates.len() > 1 {
            warn!(
                "{} templates found for menu {:?} in {}, using '{}'",
                candidates.len(),
                kind,
                self.source.describe(),
                candidates[0].name()
            );
        }

        Ok(candidates.swap_remove(0))
    }

    /// Returns every template registered for `kind`, in scan order.
    pub fn candidates(&mut self, kind: K) -> Vec<Arc<MenuTemplate<K>>> {
        let templates = match self.policy {
            LoadPolicy::Uncached => self.scan(),
            LoadPolicy::Eager | LoadPolicy::Lazy => {
                if self.cache.is_none() {
                    let scanned = self.scan();
                    self.cache = Some(scanned);
                }
                self.cache.clone().unwrap_or_default()
            }
        };

        templates
            .into_iter()
            .filter(|template| template.kind() == kind)
            .collect()
    }

    //--- Query API --------------------------------------------------------

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    /// Number of times the source has been scanned.
    pub fn scan_count(&self) -> usize {
        self.scans
    }

    /// Drops cached scan results so the next resolve rescans.
    pub fn invalidate(&mut self) {
        self.cache = None;
    }

    //--- Internal Helpers -------------------------------------------------

    fn scan(&mut self) -> Vec<Arc<MenuTemplate<K>>> {
        self.scans += 1;
        let templates = self.source.scan();
        debug!(
            "Scanned {} ({} templates, scan #{})",
            self.source.describe(),
            templates.len(),
            self.scans
        );
        templates
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::Menu;
    use crate::core::template::{ResourceFolder, TemplateList};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMenu {
        Main,
        Pause,
        Options,
    }

    impl MenuKey for TestMenu {}

    struct Plain;

    impl Menu<TestMenu> for Plain {}

    fn template(name: &str, kind: TestMenu) -> MenuTemplate<TestMenu> {
        MenuTemplate::new(name, kind, || Plain)
    }

    fn list() -> TemplateList<TestMenu> {
        TemplateList::new(vec![
            template("MainMenu", TestMenu::Main),
            template("PauseMenu", TestMenu::Pause),
        ])
    }

    #[test]
    fn resolve_finds_matching_kind() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Lazy);
        let resolved = registry.resolve(TestMenu::Pause).unwrap();
        assert_eq!(resolved.name(), "PauseMenu");
    }

    #[test]
    fn resolve_missing_kind_fails() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Lazy);
        let err = registry.resolve(TestMenu::Options).unwrap_err();
        assert_eq!(
            err,
            MenuError::MissingTemplate {
                kind: "Options".to_string(),
                source_name: "template list (2 entries)".to_string(),
            }
        );
    }

    #[test]
    fn resolve_ambiguous_kind_takes_first() {
        let source = TemplateList::new(vec![
            template("FirstMain", TestMenu::Main),
            template("SecondMain", TestMenu::Main),
        ]);
        let mut registry = TemplateRegistry::new(source, LoadPolicy::Lazy);

        assert_eq!(registry.candidates(TestMenu::Main).len(), 2);
        assert_eq!(registry.resolve(TestMenu::Main).unwrap().name(), "FirstMain");
    }

    #[test]
    fn eager_scans_on_construction_only() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Eager);
        assert_eq!(registry.scan_count(), 1);

        registry.resolve(TestMenu::Main).unwrap();
        registry.resolve(TestMenu::Pause).unwrap();
        assert_eq!(registry.scan_count(), 1);
    }

    #[test]
    fn lazy_scans_on_first_resolve_then_caches() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Lazy);
        assert_eq!(registry.scan_count(), 0);

        registry.resolve(TestMenu::Main).unwrap();
        registry.resolve(TestMenu::Main).unwrap();
        assert_eq!(registry.scan_count(), 1);
    }

    #[test]
    fn uncached_scans_every_resolve() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Uncached);

        registry.resolve(TestMenu::Main).unwrap();
        registry.resolve(TestMenu::Main).unwrap();
        let _ = registry.resolve(TestMenu::Options);
        assert_eq!(registry.scan_count(), 3);
    }

    #[test]
    fn invalidate_forces_rescan() {
        let mut registry = TemplateRegistry::new(list(), LoadPolicy::Lazy);
        registry.resolve(TestMenu::Main).unwrap();
        registry.invalidate();
        registry.resolve(TestMenu::Main).unwrap();
        assert_eq!(registry.scan_count(), 2);
    }

    #[test]
    fn resolves_from_resource_folder() {
        let folder = ResourceFolder::new("Menus")
            .with_asset("Menus/B_Options", template("B_Options", TestMenu::Options))
            .with_asset("Menus/A_Options", template("A_Options", TestMenu::Options));
        let mut registry = TemplateRegistry::new(folder, LoadPolicy::Eager);

        assert_eq!(registry.policy(), LoadPolicy::Eager);
        assert_eq!(registry.resolve(TestMenu::Options).unwrap().name(), "A_Options");
    }
}
