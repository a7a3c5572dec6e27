//=========================================================================
// Platform Navigation Input
//
// Bridges Winit window events to the menu layer's single back signal.
//
// Architecture:
// ```text
//  Platform Thread:                   Logic Thread:
//  ┌──────────────────────────┐      ┌────────────────────────────┐
//  │  Winit WindowEvent       │      │  NavigationCollector       │
//  │   ↓ from_window_event()  │      │   ↓ collect_tick()         │
//  │  NavigationInput         │      │  TickInput { back, .. }    │
//  │   ↓                      │      │   ↓                        │
//  │  Sender ─────────────────┼─────►│  MenuManager::update(back) │
//  └──────────────────────────┘      └────────────────────────────┘
// ```
//
// Notes:
// On Android the back button arrives as Escape; browser back is mapped
// the same way. Key repeats are ignored so holding Escape pops one menu.
// Winit's KeyEvent cannot be built outside winit, so the key filter lives
// in is_back_press() where it can be exercised directly.
//
//=========================================================================

//=== Submodules ==========================================================

mod collector;

//=== External Crates =====================================================

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

//=== Public API ==========================================================

pub use collector::{NavigationCollector, TickControl, TickInput};

//=== NavigationInput =====================================================

/// Navigation-relevant input sent from the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationInput {
    /// Escape key or platform back button pressed.
    Back,

    /// Window close requested.
    WindowClosed,
}

impl NavigationInput {
    /// Maps a Winit window event, returning `None` for unrelated events.
    pub fn from_window_event(event: &WindowEvent) -> Option<Self> {
        match event {
            //--- Keyboard Input ------------------------------------------
            WindowEvent::KeyboardInput { event, .. }
                if is_back_press(event.physical_key, event.state, event.repeat) =>
            {
                Some(Self::Back)
            }

            //--- Window Lifecycle ----------------------------------------
            WindowEvent::CloseRequested | WindowEvent::Destroyed => Some(Self::WindowClosed),

            //--- Unhandled Events ----------------------------------------
            _ => None,
        }
    }
}

/// Returns `true` for a fresh press of a back key. Releases and
/// auto-repeats are ignored.
pub fn is_back_press(key: PhysicalKey, state: ElementState, repeat: bool) -> bool {
    match key {
        PhysicalKey::Code(code) => state == ElementState::Pressed && !repeat && is_back_key(code),
        PhysicalKey::Unidentified(_) => false,
    }
}

/// Returns `true` for keys that trigger back navigation.
pub fn is_back_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Escape | KeyCode::BrowserBack)
}

//=========================================================================
// Unit Tests
//=========================================================================
