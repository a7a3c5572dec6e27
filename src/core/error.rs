//=========================================================================
// Menu Errors
//=========================================================================
//
// Failure kinds reported by the menu manager.
//
// - MissingTemplate: fatal to the requesting call, surfaced to the caller
// - EmptyStack / NotOnTop / AlreadyOpen: logged no-ops
// - DrawOrderOverflow: push rejected, stack left as it was
// - UnknownPanel: stale or foreign PanelId
//
// Menu kinds are carried in their Debug form so the error type stays
// independent of the game's key enum.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::menu::PanelId;

//=== MenuError ===========================================================

/// Errors produced by menu stack and template operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// No template is registered or discoverable for the requested kind.
    #[error("template not found for menu {kind} in {source_name}")]
    MissingTemplate { kind: String, source_name: String },

    /// A close was requested while no menu is open.
    #[error("{kind} cannot be closed because menu stack is empty")]
    EmptyStack { kind: String },

    /// A close was requested for a panel that is not the top of the stack.
    #[error("{kind} cannot be closed because it is not on top of stack")]
    NotOnTop { kind: String },

    /// An open was requested for a panel that is already on the stack.
    #[error("{kind} cannot be opened because it is already on the stack")]
    AlreadyOpen { kind: String },

    /// Pushing above the top would overflow the `i32` draw order.
    #[error("{kind} cannot be opened because draw order would overflow")]
    DrawOrderOverflow { kind: String },

    /// The handle does not refer to a live panel.
    #[error("panel {0} does not exist")]
    UnknownPanel(PanelId),
}

//=========================================================================
// Unit Tests
//=========================================================================
