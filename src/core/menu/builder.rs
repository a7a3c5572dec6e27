//=========================================================================
// Menu Manager Builder
//=========================================================================
//
// Fluent configuration for a MenuManager.
//
// Architecture:
// ```text
//     MenuManagerBuilder ──build()──> MenuManager ──start()──> [initial menu]
//         │
//         ├─ with_templates()
//         ├─ with_load_policy()
//         ├─ with_base_draw_order()
//         ├─ with_initial_menu()
//         └─ with_quit_behavior()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{MenuKey, MenuManager, QuitBehavior};
use crate::core::template::{LoadPolicy, TemplateList, TemplateRegistry, TemplateSource};

//=== MenuManagerBuilder ==================================================

/// Builder for configuring and constructing a [`MenuManager`].
///
/// # Default Values
///
/// - **Templates**: empty list (every resolve fails)
/// - **Load policy**: [`LoadPolicy::Lazy`]
/// - **Base draw order**: 0
/// - **Initial menu**: none
/// - **Quit behavior**: [`QuitBehavior::Halt`]
///
/// # Examples
///
/// ```
/// use aetheric_menus::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Main, Pause }
/// impl MenuKey for Screen {}
///
/// struct MainMenu;
/// impl Menu<Screen> for MainMenu {}
///
/// struct PauseMenu;
/// impl Menu<Screen> for PauseMenu {}
///
/// let folder = ResourceFolder::new("Menus")
///     .with_asset("Menus/Main", MenuTemplate::new("MainMenu", Screen::Main, || MainMenu))
///     .with_asset("Menus/Pause", MenuTemplate::new("PauseMenu", Screen::Pause, || PauseMenu));
///
/// let mut menus = MenuManagerBuilder::new()
///     .with_templates(folder)
///     .with_load_policy(LoadPolicy::Eager)
///     .with_base_draw_order(100)
///     .with_initial_menu(Screen::Main)
///     .build();
///
/// let main = menus.start().unwrap().unwrap();
/// assert_eq!(menus.draw_order(main), Some(100));
/// ```
pub struct MenuManagerBuilder<K: MenuKey> {
    source: Option<Box<dyn FnOnce(LoadPolicy) -> TemplateRegistry<K>>>,
    load_policy: LoadPolicy,
    base_draw_order: i32,
    initial_menu: Option<K>,
    quit_behavior: QuitBehavior,
}

impl<K: MenuKey> MenuManagerBuilder<K> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            source: None,
            load_policy: LoadPolicy::default(),
            base_draw_order: 0,
            initial_menu: None,
            quit_behavior: QuitBehavior::default(),
        }
    }

    /// Sets where templates are looked up.
    pub fn with_templates<T>(mut self, source: T) -> Self
    where
        T: TemplateSource<K> + 'static,
    {
        self.source = Some(Box::new(move |policy| TemplateRegistry::new(source, policy)));
        self
    }

    /// Sets when the template source is scanned.
    ///
    /// Default: [`LoadPolicy::Lazy`]
    pub fn with_load_policy(mut self, policy: LoadPolicy) -> Self {
        self.load_policy = policy;
        self
    }

    /// Sets the draw order given to a panel opened on an empty stack.
    ///
    /// Default: 0
    pub fn with_base_draw_order(mut self, order: i32) -> Self {
        self.base_draw_order = order;
        self
    }

    /// Sets the menu shown by [`MenuManager::start`].
    pub fn with_initial_menu(mut self, kind: K) -> Self {
        self.initial_menu = Some(kind);
        self
    }

    /// Sets how [`MenuManager::quit`] ends the session.
    ///
    /// Default: [`QuitBehavior::Halt`]
    pub fn with_quit_behavior(mut self, behavior: QuitBehavior) -> Self {
        self.quit_behavior = behavior;
        self
    }

    /// Builds the manager.
    ///
    /// With [`LoadPolicy::Eager`] the template source is scanned here.
    pub fn build(self) -> MenuManager<K> {
        let registry = match self.source {
            Some(make_registry) => make_registry(self.load_policy),
            None => TemplateRegistry::new(TemplateList::default(), self.load_policy),
        };

        info!(
            "Building menu manager (policy: {:?}, base order: {}, initial: {:?}, quit: {:?})",
            self.load_policy, self.base_draw_order, self.initial_menu, self.quit_behavior
        );

        MenuManager::new(
            registry,
            self.base_draw_order,
            self.initial_menu,
            self.quit_behavior,
        )
    }
}

impl<K: MenuKey> Default for MenuManagerBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::menu::Menu;
    use crate::core::template::MenuTemplate;
    use crate::core::MenuError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMenu {
        Main,
    }

    impl MenuKey for TestMenu {}

    struct Plain;

    impl Menu<TestMenu> for Plain {}

    fn templates() -> TemplateList<TestMenu> {
        TemplateList::new(vec![MenuTemplate::new("MainMenu", TestMenu::Main, || Plain)])
    }

    #[test]
    fn builder_defaults() {
        let builder = MenuManagerBuilder::<TestMenu>::new();
        assert!(builder.source.is_none());
        assert_eq!(builder.load_policy, LoadPolicy::Lazy);
        assert_eq!(builder.base_draw_order, 0);
        assert_eq!(builder.initial_menu, None);
        assert_eq!(builder.quit_behavior, QuitBehavior::Halt);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = MenuManagerBuilder::new()
            .with_templates(templates())
            .with_load_policy(LoadPolicy::Uncached)
            .with_base_draw_order(10)
            .with_initial_menu(TestMenu::Main)
            .with_quit_behavior(QuitBehavior::ExitProcess);

        assert!(builder.source.is_some());
        assert_eq!(builder.load_policy, LoadPolicy::Uncached);
        assert_eq!(builder.base_draw_order, 10);
        assert_eq!(builder.initial_menu, Some(TestMenu::Main));
        assert_eq!(builder.quit_behavior, QuitBehavior::ExitProcess);
    }

    #[test]
    fn build_without_templates_fails_every_resolve() {
        let mut manager = MenuManagerBuilder::<TestMenu>::new().build();
        let err = manager.show(TestMenu::Main).unwrap_err();
        assert!(matches!(err, MenuError::MissingTemplate { .. }));
    }

    #[test]
    fn build_eager_scans_immediately() {
        let manager = MenuManagerBuilder::new()
            .with_templates(templates())
            .with_load_policy(LoadPolicy::Eager)
            .build();
        assert_eq!(manager.registry().scan_count(), 1);
    }

    #[test]
    fn build_applies_base_draw_order() {
        let mut manager = MenuManagerBuilder::new()
            .with_templates(templates())
            .with_base_draw_order(-5)
            .build();
        let id = manager.show(TestMenu::Main).unwrap();
        assert_eq!(manager.draw_order(id), Some(-5));
    }
}
