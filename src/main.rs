//! Zellij plugin wrapper and entry point.
//!
//! The thin layer between the library and the Zellij plugin runtime: it maps
//! Zellij events to [`dropdown::Event`]s, carries out the returned
//! [`dropdown::Action`]s and delegates rendering.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: `Key` and `Timer`
//! 3. **Update**: map the event, run `handle_event`, execute actions
//! 4. **Timer**: deliver queued change notifications
//! 5. **Render**: call the library renderer
//!
//! # Deferred notifications
//!
//! The control never notifies listeners inside the call that changed it.
//! `ScheduleNotifications` becomes `set_timeout(0.0)`, and the `Timer` event
//! that follows runs the queued deliveries on a fresh turn.
//!
//! The plugin only exists on the wasm target. Native builds get a stub `main`
//! so the library and its tests build without the Zellij host.

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use dropdown::{handle_event, Action, Config, Event};

    pub struct State {
        app: dropdown::AppState,
    }

    impl Default for State {
        fn default() -> Self {
            Self {
                app: dropdown::initialize(&Config::default()),
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            dropdown::observability::init_tracing(&config);

            let _guard = tracing::debug_span!("plugin_load").entered();
            tracing::debug!(name = %config.name, items = config.items.len(), "parsed configuration");

            self.app = dropdown::initialize(&config);

            subscribe(&[EventType::Key, EventType::Timer]);
            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let our_event = match event {
                zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                    Some(event) => event,
                    None => return false,
                },
                zellij_tile::prelude::Event::Timer(_) => Event::NotificationsDue,
                _ => return false,
            };

            let _guard =
                tracing::debug_span!("plugin_update_event", event_type = ?our_event).entered();

            match handle_event(&mut self.app, &our_event) {
                Ok((should_render, actions)) => {
                    tracing::debug!(
                        action_count = actions.len(),
                        should_render,
                        "event handled successfully"
                    );
                    for action in actions {
                        Self::execute_action(action);
                    }
                    should_render
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error handling event");
                    false
                }
            }
        }

        fn render(&mut self, rows: usize, cols: usize) {
            dropdown::ui::render(&self.app, rows, cols);
        }
    }

    impl State {
        fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
            tracing::trace!(bare_key = ?key.bare_key, "key event");

            if key.has_modifiers(&[KeyModifier::Ctrl]) {
                return match key.bare_key {
                    BareKey::Char('n') => Some(Event::KeyDown),
                    BareKey::Char('p') => Some(Event::KeyUp),
                    BareKey::Char('c') => Some(Event::CloseFocus),
                    _ => None,
                };
            }

            Some(match key.bare_key {
                BareKey::Up => Event::KeyUp,
                BareKey::Down => Event::KeyDown,
                BareKey::Left => Event::KeyLeft,
                BareKey::Right => Event::KeyRight,
                BareKey::Enter => Event::Enter,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        fn execute_action(action: Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::ScheduleNotifications => {
                    tracing::trace!("scheduling notification turn");
                    set_timeout(0.0);
                }
            }
        }
    }
}

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("dropdown is a Zellij plugin; build it for wasm32-wasip1 and load the .wasm from a layout");
}
