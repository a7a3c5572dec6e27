//=========================================================================
// Panel
//=========================================================================
//
// A live menu instance owned by the manager.
//
// The manager is the only writer of `visible` and `draw_order`; menus
// themselves never see other panels.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== Internal Dependencies ===============================================

use super::{Menu, MenuFlags, MenuKey};

//=== PanelId =============================================================

/// Handle to a live panel instance.
///
/// Ids are never reused within one manager, so a handle to a destroyed
/// panel stays invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PanelId(u64);

impl PanelId {
    /// Wraps a raw id.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//=== Panel ===============================================================

pub(crate) struct Panel<K: MenuKey> {
    pub(crate) kind: K,
    pub(crate) flags: MenuFlags,
    pub(crate) template: String,
    pub(crate) menu: Box<dyn Menu<K>>,
    pub(crate) visible: bool,
    pub(crate) draw_order: i32,
}

impl<K: MenuKey> Panel<K> {
    /// Wraps a freshly instantiated menu. New panels start hidden.
    pub(crate) fn new(kind: K, flags: MenuFlags, template: String, menu: Box<dyn Menu<K>>) -> Self {
        Self {
            kind,
            flags,
            template,
            menu,
            visible: false,
            draw_order: 0,
        }
    }
}

impl<K: MenuKey> fmt::Debug for Panel<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("kind", &self.kind)
            .field("template", &self.template)
            .field("flags", &self.flags)
            .field("visible", &self.visible)
            .field("draw_order", &self.draw_order)
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
