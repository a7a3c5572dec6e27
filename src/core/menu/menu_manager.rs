//=========================================================================
// Menu Manager
//=========================================================================
//
// Owns every live panel and the stack of open panels.
//
// Panels are stored in a HashMap by id and referenced via a stack of ids.
// Retained panels stay in the map while off the stack so they can be
// shown again without re-instantiation.
//
// Stack rules:
// - Strict LIFO: panels are pushed on top and only the top can be closed
// - The top panel is the only receiver of back signals
// - A panel with `disable_underneath` hides every panel below it
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;

use crossbeam_channel::Receiver;
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use super::panel::Panel;
use super::{BackAction, MenuFlags, MenuKey, PanelId, QuitBehavior};
use crate::core::events::{EventHub, MenuEvent};
use crate::core::template::TemplateRegistry;
use crate::core::MenuError;

//=== Menu Manager ========================================================

/// Manages menu panel lifecycle and stack-based navigation.
///
/// Create one with [`super::MenuManagerBuilder`] and pass it by reference
/// to whatever needs to navigate. All mutation happens synchronously on
/// the caller's thread.
pub struct MenuManager<K: MenuKey> {
    registry: TemplateRegistry<K>,
    panels: HashMap<PanelId, Panel<K>>,
    stack: Vec<PanelId>,
    next_id: u64,
    base_draw_order: i32,
    initial_menu: Option<K>,
    quit_behavior: QuitBehavior,
    quit_requested: bool,
    events: EventHub<K>,
}

impl<K: MenuKey> MenuManager<K> {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new(
        registry: TemplateRegistry<K>,
        base_draw_order: i32,
        initial_menu: Option<K>,
        quit_behavior: QuitBehavior,
    ) -> Self {
        Self {
            registry,
            panels: HashMap::new(),
            stack: Vec::new(),
            next_id: 1,
            base_draw_order,
            initial_menu,
            quit_behavior,
            quit_requested: false,
            events: EventHub::new(),
        }
    }

    /// Shows the configured initial menu, if any.
    pub fn start(&mut self) -> Result<Option<PanelId>, MenuError> {
        match self.initial_menu {
            Some(kind) => {
                info!("Starting menu manager with initial menu {:?}", kind);
                self.show(kind).map(Some)
            }
            None => {
                debug!("Starting menu manager without an initial menu");
                Ok(None)
            }
        }
    }

    //--- Instantiation ----------------------------------------------------

    /// Creates a hidden, unopened panel from the template for `kind`.
    pub fn create_instance(&mut self, kind: K) -> Result<PanelId, MenuError> {
        let template = self.registry.resolve(kind).map_err(|err| {
            error!("{}", err);
            err
        })?;

        let id = PanelId::from_raw(self.next_id);
        self.next_id += 1;

        debug!(
            "Instantiated {:?} from template '{}' as panel {}",
            kind,
            template.name(),
            id
        );

        let panel = Panel::new(
            kind,
            template.flags(),
            template.name().to_string(),
            template.instantiate(),
        );
        self.panels.insert(id, panel);

        Ok(id)
    }

    /// Opens a menu of `kind`, reusing a retained instance when available.
    pub fn show(&mut self, kind: K) -> Result<PanelId, MenuError> {
        let (id, created) = match self.retained_instance(kind) {
            Some(id) => {
                debug!("Reusing retained panel {} for {:?}", id, kind);
                (id, false)
            }
            None => (self.create_instance(kind)?, true),
        };

        if let Err(err) = self.open(id) {
            if created {
                self.panels.remove(&id);
            }
            return Err(err);
        }
        Ok(id)
    }

    //--- Panel Operations -------------------------------------------------

    /// Makes `id` visible, pushes it on top and fires `on_open`.
    pub fn open(&mut self, id: PanelId) -> Result<(), MenuError> {
        let kind = self.panel_kind(id)?;

        if self.stack.contains(&id) {
            let err = MenuError::AlreadyOpen {
                kind: format!("{:?}", kind),
            };
            error!("{}", err);
            return Err(err);
        }

        self.open_menu(id)?;

        if let Some(panel) = self.panels.get_mut(&id) {
            panel.visible = true;
            panel.menu.on_open();
        }

        self.events.publish(MenuEvent::Opened { id, kind });
        Ok(())
    }

    /// Opens `id` above the current top without closing anything.
    pub fn navigate_to(&mut self, id: PanelId) -> Result<(), MenuError> {
        if let Some(top) = self.top() {
            debug!("Navigating from panel {} to panel {}", top, id);
        }
        self.open(id)
    }

    /// Fires `on_close` on `id` and pops it. `id` must be the top.
    pub fn close(&mut self, id: PanelId) -> Result<(), MenuError> {
        self.ensure_closable(id)?;

        if let Some(panel) = self.panels.get_mut(&id) {
            panel.menu.on_close();
        }

        self.close_top_menu().map(|_| ())
    }

    /// Pops `id` without firing hooks. `id` must be the top.
    pub fn close_menu(&mut self, id: PanelId) -> Result<(), MenuError> {
        self.ensure_closable(id)?;
        self.close_top_menu().map(|_| ())
    }

    /// Pops the top panel, then re-activates panels from the new top down
    /// to and including the first one that disables what is underneath.
    pub fn close_top_menu(&mut self) -> Result<PanelId, MenuError> {
        let Some(id) = self.stack.pop() else {
            let err = MenuError::EmptyStack {
                kind: "Top menu".to_string(),
            };
            error!("{}", err);
            return Err(err);
        };

        let Some(mut panel) = self.panels.remove(&id) else {
            warn!("Popped panel {} had no instance", id);
            self.reveal_from_top();
            return Ok(id);
        };

        let kind = panel.kind;
        let destroyed = panel.flags.destroy_when_closed;

        if destroyed {
            debug!("Destroyed panel {} ({:?})", id, kind);
        } else {
            debug!("Hid panel {} ({:?}) for reuse", id, kind);
            panel.visible = false;
            self.panels.insert(id, panel);
        }

        self.reveal_from_top();

        self.events.publish(MenuEvent::Closed { id, kind, destroyed });
        Ok(id)
    }

    /// Fires `on_back` on `id` and returns its answer. Never touches the stack.
    pub fn go_back(&mut self, id: PanelId) -> Result<BackAction<K>, MenuError> {
        let kind = self.panel_kind(id)?;

        let action = match self.panels.get_mut(&id) {
            Some(panel) => panel.menu.on_back(),
            None => return Err(MenuError::UnknownPanel(id)),
        };

        debug!("Panel {} ({:?}) answered back with {:?}", id, kind, action);
        self.events.publish(MenuEvent::Back { id, kind, action });
        Ok(action)
    }

    /// Quits the session according to the configured [`QuitBehavior`].
    pub fn quit(&mut self) {
        info!("Quit requested ({:?})", self.quit_behavior);
        self.quit_requested = true;
        self.events.publish(MenuEvent::QuitRequested);

        if self.quit_behavior == QuitBehavior::ExitProcess {
            std::process::exit(0);
        }
    }

    //--- Back Navigation --------------------------------------------------

    /// Routes one back signal to the top panel and applies its answer.
    ///
    /// Returns `None` when no menu is open.
    pub fn handle_back(&mut self) -> Result<Option<BackAction<K>>, MenuError> {
        let Some(top) = self.top() else {
            debug!("Back signal ignored, menu stack is empty");
            return Ok(None);
        };

        let action = self.go_back(top)?;

        match action {
            BackAction::Close => self.close(top)?,
            BackAction::Open(kind) => {
                self.show(kind)?;
            }
            BackAction::Quit => self.quit(),
            BackAction::Ignore => {}
        }

        Ok(Some(action))
    }

    /// Per-tick entry point. Handles at most one back signal.
    pub fn update(&mut self, back_pressed: bool) -> Result<Option<BackAction<K>>, MenuError> {
        if !back_pressed {
            return Ok(None);
        }

        self.handle_back()
    }

    //--- Listeners --------------------------------------------------------

    /// Registers a listener for stack transitions.
    pub fn subscribe(&mut self) -> Receiver<MenuEvent<K>> {
        self.events.subscribe()
    }

    /// Listeners still connected as of the last published event.
    pub fn listener_count(&self) -> usize {
        self.events.listener_count()
    }

    //--- Query API --------------------------------------------------------

    /// Open panels, bottom first.
    pub fn stack(&self) -> &[PanelId] {
        &self.stack
    }

    /// The focused panel.
    pub fn top(&self) -> Option<PanelId> {
        self.stack.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.stack.contains(&id)
    }

    pub fn is_visible(&self, id: PanelId) -> bool {
        self.panels.get(&id).is_some_and(|panel| panel.visible)
    }

    /// Open panels that are currently visible, bottom first.
    pub fn visible_panels(&self) -> Vec<PanelId> {
        self.stack
            .iter()
            .copied()
            .filter(|&id| self.is_visible(id))
            .collect()
    }

    pub fn draw_order(&self, id: PanelId) -> Option<i32> {
        self.panels.get(&id).map(|panel| panel.draw_order)
    }

    pub fn kind_of(&self, id: PanelId) -> Option<K> {
        self.panels.get(&id).map(|panel| panel.kind)
    }

    pub fn flags(&self, id: PanelId) -> Option<MenuFlags> {
        self.panels.get(&id).map(|panel| panel.flags)
    }

    /// Name of the template `id` was created from.
    pub fn template_name(&self, id: PanelId) -> Option<&str> {
        self.panels.get(&id).map(|panel| panel.template.as_str())
    }

    /// Live panels, open or retained.
    pub fn instance_count(&self) -> usize {
        self.panels.len()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    pub fn registry(&self) -> &TemplateRegistry<K> {
        &self.registry
    }

    //--- Internal Helpers -------------------------------------------------

    fn open_menu(&mut self, id: PanelId) -> Result<(), MenuError> {
        let (kind, flags) = match self.panels.get(&id) {
            Some(panel) => (panel.kind, panel.flags),
            None => return Err(MenuError::UnknownPanel(id)),
        };

        // Resolve the order before touching visibility so a rejected push
        // leaves the stack exactly as it was.
        let draw_order = match self.top().and_then(|top| self.panels.get(&top)) {
            Some(top) => top.draw_order.checked_add(1).ok_or_else(|| {
                let err = MenuError::DrawOrderOverflow {
                    kind: format!("{:?}", kind),
                };
                error!("{}", err);
                err
            })?,
            None => self.base_draw_order,
        };

        if flags.disable_underneath {
            self.hide_underneath();
        }

        if let Some(panel) = self.panels.get_mut(&id) {
            panel.draw_order = draw_order;
        }

        debug!("Pushing panel {} onto stack at draw order {}", id, draw_order);
        self.stack.push(id);
        Ok(())
    }

    fn hide_underneath(&mut self) {
        // Everything below the first disabling panel is already hidden
        for id in self.stack.iter().rev() {
            if let Some(panel) = self.panels.get_mut(id) {
                panel.visible = false;

                if panel.flags.disable_underneath {
                    break;
                }
            }
        }
    }

    fn reveal_from_top(&mut self) {
        for id in self.stack.iter().rev() {
            if let Some(panel) = self.panels.get_mut(id) {
                panel.visible = true;

                if panel.flags.disable_underneath {
                    break;
                }
            }
        }
    }

    fn ensure_closable(&self, id: PanelId) -> Result<(), MenuError> {
        let kind = format!("{:?}", self.panel_kind(id)?);

        let err = match self.stack.last() {
            None => MenuError::EmptyStack { kind },
            Some(&top) if top != id => MenuError::NotOnTop { kind },
            Some(_) => return Ok(()),
        };

        error!("{}", err);
        Err(err)
    }

    fn panel_kind(&self, id: PanelId) -> Result<K, MenuError> {
        self.kind_of(id).ok_or_else(|| {
            let err = MenuError::UnknownPanel(id);
            error!("{}", err);
            err
        })
    }

    fn retained_instance(&self, kind: K) -> Option<PanelId> {
        self.panels
            .iter()
            .filter(|&(id, panel)| panel.kind == kind && !self.stack.contains(id))
            .map(|(&id, _)| id)
            .min()
    }
}

impl<K: MenuKey> Drop for MenuManager<K> {
    fn drop(&mut self) {
        debug!(
            "Menu manager shut down with {} open and {} live panel(s)",
            self.stack.len(),
            self.panels.len()
        );
    }
}

//=== Tests ===============================================================
