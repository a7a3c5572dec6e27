//=========================================================================
// Core Menu Systems
//
// Everything that runs on the logic side of the menu layer.
//
// Architecture:
// ```text
//   TemplateRegistry ──resolve()──> MenuTemplate ──instantiate()──> Panel
//                                                                     │
//   MenuManager ── stack: Vec<PanelId> ── panels: HashMap<PanelId, Panel>
//        │
//        └─ EventHub ──> Receiver<MenuEvent> (listeners)
// ```
//
// Notes:
// The manager is an explicitly constructed value owned by the host
// application. Nothing in this module keeps global state.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod error;
pub mod events;
pub mod menu;
pub mod template;

//=== Public API ==========================================================

pub use error::MenuError;
pub use menu::{MenuManager, MenuManagerBuilder};
