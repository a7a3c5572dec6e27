//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_menus::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Menu system
pub use crate::core::menu::{
    BackAction, Menu, MenuFlags, MenuKey, MenuManager, MenuManagerBuilder, PanelId, QuitBehavior,
};

// Templates
pub use crate::core::template::{
    LoadPolicy, MenuTemplate, ResourceFolder, TemplateList, TemplateRegistry, TemplateSource,
};

// Events and errors
pub use crate::core::events::MenuEvent;
pub use crate::core::MenuError;

// Platform input
pub use crate::platform::{NavigationCollector, NavigationInput, TickControl, TickInput};
