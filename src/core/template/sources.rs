//=========================================================================
// Template Sources
//=========================================================================
//
// Two ways of supplying templates:
//
// - TemplateList: a fixed, pre-wired list scanned in insertion order
// - ResourceFolder: assets registered under paths, scanned by namespace
//   prefix in sorted path order
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;
use std::sync::Arc;

use log::warn;

//=== Internal Dependencies ===============================================

use super::{MenuTemplate, TemplateSource};
use crate::core::menu::MenuKey;

//=== TemplateList ========================================================

/// Fixed list of templates wired up at startup.
pub struct TemplateList<K: MenuKey> {
    templates: Vec<Arc<MenuTemplate<K>>>,
}

impl<K: MenuKey> TemplateList<K> {
    pub fn new(templates: Vec<MenuTemplate<K>>) -> Self {
        Self {
            templates: templates.into_iter().map(Arc::new).collect(),
        }
    }

    /// Appends a template after the existing ones.
    pub fn push(&mut self, template: MenuTemplate<K>) {
        self.templates.push(Arc::new(template));
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<K: MenuKey> Default for TemplateList<K> {
    fn default() -> Self {
        Self { templates: Vec::new() }
    }
}

impl<K: MenuKey> TemplateSource<K> for TemplateList<K> {
    fn describe(&self) -> String {
        format!("template list ({} entries)", self.templates.len())
    }

    fn scan(&self) -> Vec<Arc<MenuTemplate<K>>> {
        self.templates.clone()
    }
}

//=== ResourceFolder ======================================================

/// Templates registered as named assets and discovered by folder.
///
/// Asset paths use `/` separators. Scanning the folder `Menus` yields
/// every asset under `Menus/`, including nested folders, ordered by path.
pub struct ResourceFolder<K: MenuKey> {
    namespace: String,
    assets: BTreeMap<String, Arc<MenuTemplate<K>>>,
}

impl<K: MenuKey> ResourceFolder<K> {
    /// Creates an empty asset table that scans `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        let namespace = namespace.into().trim_end_matches('/').to_string();
        Self {
            namespace,
            assets: BTreeMap::new(),
        }
    }

    /// Registers an asset and returns the folder for chaining.
    pub fn with_asset(mut self, path: impl Into<String>, template: MenuTemplate<K>) -> Self {
        self.insert(path, template);
        self
    }

    /// Registers an asset under `path`, replacing any previous asset there.
    pub fn insert(&mut self, path: impl Into<String>, template: MenuTemplate<K>) {
        let path = path.into();
        if self.assets.insert(path.clone(), Arc::new(template)).is_some() {
            warn!("Asset {} was already registered and has been replaced", path);
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn contains_path(&self, path: &str) -> bool {
        if self.namespace.is_empty() {
            return true;
        }

        path.strip_prefix(self.namespace.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl<K: MenuKey> TemplateSource<K> for ResourceFolder<K> {
    fn describe(&self) -> String {
        format!("resource folder '{}'", self.namespace)
    }

    fn scan(&self) -> Vec<Arc<MenuTemplate<K>>> {
        self.assets
            .iter()
            .filter(|(path, _)| self.contains_path(path))
            .map(|(_, template)| Arc::clone(template))
            .collect()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::Menu;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMenu {
        Main,
        Options,
    }

    impl MenuKey for TestMenu {}

    struct Plain;

    impl Menu<TestMenu> for Plain {}

    fn template(name: &str, kind: TestMenu) -> MenuTemplate<TestMenu> {
        MenuTemplate::new(name, kind, || Plain)
    }

    fn names(templates: &[Arc<MenuTemplate<TestMenu>>]) -> Vec<&str> {
        templates.iter().map(|t| t.name()).collect()
    }

    //--- TemplateList -----------------------------------------------------

    #[test]
    fn list_scans_in_insertion_order() {
        let mut list = TemplateList::new(vec![
            template("Options", TestMenu::Options),
            template("Main", TestMenu::Main),
        ]);
        list.push(template("Main2", TestMenu::Main));

        let scanned = list.scan();
        assert_eq!(names(&scanned), vec!["Options", "Main", "Main2"]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn empty_list_scans_nothing() {
        let list = TemplateList::<TestMenu>::default();
        assert!(list.is_empty());
        assert!(list.scan().is_empty());
    }

    //--- ResourceFolder ---------------------------------------------------

    #[test]
    fn folder_scans_only_its_namespace() {
        let folder = ResourceFolder::new("Menus")
            .with_asset("Menus/MainMenu", template("MainMenu", TestMenu::Main))
            .with_asset("Hud/Options", template("HudOptions", TestMenu::Options))
            .with_asset("MenusExtra/Options", template("Extra", TestMenu::Options));

        assert_eq!(names(&folder.scan()), vec!["MainMenu"]);
    }

    #[test]
    fn folder_includes_nested_paths_sorted() {
        let folder = ResourceFolder::new("Menus/")
            .with_asset("Menus/Zed", template("Zed", TestMenu::Main))
            .with_asset("Menus/Popups/Confirm", template("Confirm", TestMenu::Options))
            .with_asset("Menus/Alpha", template("Alpha", TestMenu::Main));

        assert_eq!(folder.namespace(), "Menus");
        assert_eq!(names(&folder.scan()), vec!["Alpha", "Confirm", "Zed"]);
    }

    #[test]
    fn folder_insert_replaces_existing_path() {
        let mut folder = ResourceFolder::new("Menus");
        folder.insert("Menus/Main", template("Old", TestMenu::Main));
        folder.insert("Menus/Main", template("New", TestMenu::Main));

        assert_eq!(names(&folder.scan()), vec!["New"]);
    }

    #[test]
    fn folder_describe_names_namespace() {
        let folder = ResourceFolder::<TestMenu>::new("Menus");
        assert_eq!(folder.describe(), "resource folder 'Menus'");
    }
}
