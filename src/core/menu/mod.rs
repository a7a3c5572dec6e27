//=========================================================================
// Menu System
//=========================================================================
//
// Manages menu panel lifecycle and stack-based navigation.
//
// Architecture:
//   MenuManager
//     ├─ panels: HashMap<PanelId, Panel<K>>
//     ├─ stack: Vec<PanelId>
//     └─ registry: TemplateRegistry<K>
//
// Flow:
//   show(kind) → resolve template → instantiate → open() → open_menu()
//   close(id)  → on_close() → close_menu() → close_top_menu()
//   update(back) → handle_back() → top.on_back() → BackAction
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;

//=== Module Declarations =================================================

mod builder;
mod menu_manager;
mod panel;

//=== Public API ==========================================================

pub use builder::MenuManagerBuilder;
pub use menu_manager::MenuManager;
pub use panel::PanelId;

//=== Menu Key Trait ======================================================

/// Marker trait for menu kind identifiers.
///
/// Menu keys select which template a panel is created from. Typically
/// implemented by a game-specific enum:
///
/// ```
/// use aetheric_menus::prelude::*;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Main, Pause, Options }
///
/// impl MenuKey for Screen {}
/// ```
pub trait MenuKey: Clone + Copy + Eq + Hash + Debug + Send + Sync + 'static {}

//=== Menu Flags ==========================================================

/// Behavior flags attached to every panel created from a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuFlags {
    /// Drop the panel instance when it is closed instead of hiding it.
    pub destroy_when_closed: bool,

    /// Hide every panel underneath this one while it is open.
    pub disable_underneath: bool,
}

impl MenuFlags {
    /// Flags for a panel that is dropped on close and hides panels below it.
    pub const fn new() -> Self {
        Self {
            destroy_when_closed: true,
            disable_underneath: true,
        }
    }

    /// Keeps panels underneath visible (popups, dialogs).
    pub const fn keep_underneath(mut self) -> Self {
        self.disable_underneath = false;
        self
    }

    /// Hides and retains the panel on close so it can be shown again.
    pub const fn retained(mut self) -> Self {
        self.destroy_when_closed = false;
        self
    }
}

impl Default for MenuFlags {
    fn default() -> Self {
        Self::new()
    }
}

//=== Back Action =========================================================

/// What a panel wants to happen in response to a back signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackAction<K: MenuKey> {
    /// Close the panel that received the back signal.
    Close,

    /// Open another menu above the current one.
    Open(K),

    /// Quit the application.
    Quit,

    /// Swallow the back signal.
    Ignore,
}

impl<K: MenuKey> Default for BackAction<K> {
    fn default() -> Self {
        Self::Close
    }
}

//=== Quit Behavior =======================================================

/// How [`MenuManager::quit`] ends the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuitBehavior {
    /// Terminate the process immediately.
    ExitProcess,

    /// Raise the quit flag and let the host loop stop on its own.
    ///
    /// Used by development harnesses that must keep the process alive.
    #[default]
    Halt,
}

//=== Menu Trait ==========================================================

/// Behavior of a single menu panel.
///
/// All hooks have defaults, so a plain marker struct is a valid menu:
///
/// ```rust
/// # use aetheric_menus::prelude::*;
/// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// # enum Screen { Main, Options }
/// # impl MenuKey for Screen {}
/// struct MainMenu;
///
/// impl Menu<Screen> for MainMenu {
///     fn on_back(&mut self) -> BackAction<Screen> {
///         // The root menu asks to quit instead of closing itself
///         BackAction::Quit
///     }
/// }
/// ```
pub trait Menu<K: MenuKey>: Send {
    /// Called after the panel has been pushed and made visible.
    fn on_open(&mut self) {}

    /// Called before the panel is popped from the stack.
    fn on_close(&mut self) {}

    /// Called on escape key or platform back button while this panel is on top.
    ///
    /// Default implementation closes the panel.
    fn on_back(&mut self) -> BackAction<K> {
        BackAction::Close
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum TestMenu {
        Main,
    }

    impl MenuKey for TestMenu {}

    struct Plain;

    impl Menu<TestMenu> for Plain {}

    #[test]
    fn flags_default_destroys_and_disables_underneath() {
        let flags = MenuFlags::default();
        assert!(flags.destroy_when_closed);
        assert!(flags.disable_underneath);
    }

    #[test]
    fn flags_builders_clear_individual_bits() {
        let flags = MenuFlags::new().keep_underneath().retained();
        assert!(!flags.destroy_when_closed);
        assert!(!flags.disable_underneath);
    }

    #[test]
    fn back_action_default_is_close() {
        assert_eq!(BackAction::<TestMenu>::default(), BackAction::Close);
    }

    #[test]
    fn default_on_back_closes() {
        let mut menu = Plain;
        assert_eq!(menu.on_back(), BackAction::Close);
    }

    #[test]
    fn quit_behavior_defaults_to_halt() {
        assert_eq!(QuitBehavior::default(), QuitBehavior::Halt);
    }

    #[test]
    fn back_action_open_carries_key() {
        let action = BackAction::Open(TestMenu::Main);
        assert_eq!(action, BackAction::Open(TestMenu::Main));
        assert_ne!(action, BackAction::Ignore);
    }
}
