//=========================================================================
// Aetheric Menus — Library Root
//
// This crate defines a stack-based menu navigation layer.
//
// Responsibilities:
// - Expose the menu manager (`MenuManager`) and its builder
// - Resolve menu templates from fixed lists or resource folders
// - Translate platform input into a single per-tick back signal
//
// Typical usage:
// ```no_run
// use aetheric_menus::prelude::*;
//
// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
// enum Screen { Main }
// impl MenuKey for Screen {}
//
// struct MainMenu;
// impl Menu<Screen> for MainMenu {}
//
// let templates = TemplateList::new(vec![
//     MenuTemplate::new("MainMenu", Screen::Main, || MainMenu),
// ]);
//
// let mut menus = MenuManagerBuilder::new()
//     .with_templates(templates)
//     .with_initial_menu(Screen::Main)
//     .build();
//
// menus.start().expect("main menu template is registered");
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the menu stack, templates, events and errors.
//
// `platform` maps Winit window events into navigation input and collects
// them once per tick.
//
pub mod core;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------
pub use crate::core::{MenuError, MenuManager, MenuManagerBuilder};
