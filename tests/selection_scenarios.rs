//! End-to-end selection scenarios driven through the plugin's event handler
//! and the control's public API.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use dropdown::app::TerminalOverlay;
use dropdown::widget::{MessageQueue, OverlayEntry, OverlayProvider, StyleProvider};
use dropdown::{handle_event, initialize, Action, AppState, ComboBox, Config, Event, Notification};

fn fruit_config() -> Config {
    Config {
        name: "fruit".to_string(),
        items: ["1:Apple", "2:Banana", "-", "#Citrus", "3:Orange", "!4:Lime"]
            .iter()
            .map(|s| (*s).to_string())
            .collect(),
        ..Config::default()
    }
}

/// Sends `event` and returns the actions it produced.
fn send(state: &mut AppState, event: Event) -> Vec<Action> {
    let (_, actions) = handle_event(state, &event).expect("events never fail");
    actions
}

/// Simulates the timer turn the plugin requests.
fn next_turn(state: &mut AppState) {
    send(state, Event::NotificationsDue);
}

fn standalone_combo() -> (ComboBox, Rc<TerminalOverlay>, MessageQueue) {
    let overlay = Rc::new(TerminalOverlay::default());
    let queue = MessageQueue::new();
    let combo = ComboBox::new(
        "standalone",
        Rc::new(dropdown::Theme::default()) as Rc<dyn StyleProvider>,
        Rc::clone(&overlay) as Rc<dyn OverlayProvider>,
        queue.clone(),
    );
    combo.add_item("Red", 10);
    combo.add_item("Green", 20);
    (combo, overlay, queue)
}

#[test]
fn initial_selection_is_silent() {
    let mut state = initialize(&Config {
        selected: Some(2),
        ..fruit_config()
    });

    assert_eq!(state.combo.text(), "Banana");
    assert_eq!(state.queue.pending(), 0);

    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().count, 0);
}

#[test]
fn listeners_hear_about_changes_on_a_later_turn() {
    let mut state = initialize(&fruit_config());

    let actions = send(&mut state, Event::KeyDown);
    assert_eq!(state.combo.selected_id(), 1);
    assert_eq!(actions, vec![Action::ScheduleNotifications]);
    assert_eq!(state.last_change.borrow().count, 0);

    next_turn(&mut state);
    let record = state.last_change.borrow();
    assert_eq!(record.count, 1);
    assert_eq!(record.id, 1);
    assert_eq!(record.text, "Apple");
}

#[test]
fn rapid_changes_coalesce_into_one_delivery_of_the_final_state() {
    let mut state = initialize(&fruit_config());

    let first = send(&mut state, Event::KeyDown);
    let second = send(&mut state, Event::KeyDown);
    let third = send(&mut state, Event::KeyDown);

    assert_eq!(first, vec![Action::ScheduleNotifications]);
    assert!(second.is_empty());
    assert!(third.is_empty());

    next_turn(&mut state);
    let record = state.last_change.borrow();
    assert_eq!(record.count, 1);
    assert_eq!(record.id, 3);
    assert_eq!(record.text, "Orange");
}

#[test]
fn reselecting_the_current_item_stays_silent() {
    let mut state = initialize(&fruit_config());

    state.combo.set_selected_id(3, Notification::Send);
    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().count, 1);

    state.combo.set_selected_id(3, Notification::Send);
    state.combo.set_text("Orange", Notification::Send);
    assert!(!state.combo.has_pending_notification());

    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().count, 1);
}

#[test]
fn dont_send_changes_without_notifying() {
    let mut state = initialize(&fruit_config());

    state.combo.set_selected_id(2, Notification::DontSend);
    state.combo.set_selected_item_index(Some(0), Notification::DontSend);

    assert_eq!(state.combo.text(), "Apple");
    assert_eq!(state.queue.pending(), 0);
    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().count, 0);
}

#[test]
fn popup_choice_selects_and_notifies() {
    let mut state = initialize(&fruit_config());

    send(&mut state, Event::Enter);
    assert!(state.combo.is_popup_active());
    let (_, highlighted) = state.overlay.snapshot().expect("overlay open");
    assert_eq!(highlighted, Some(0));

    send(&mut state, Event::KeyDown);
    send(&mut state, Event::KeyDown);
    let actions = send(&mut state, Event::Enter);

    assert!(!state.combo.is_popup_active());
    assert_eq!(state.combo.text(), "Orange");
    assert_eq!(actions, vec![Action::ScheduleNotifications]);

    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().id, 3);
}

#[test]
fn popup_skips_headings_separators_and_disabled_rows() {
    let mut state = initialize(&fruit_config());
    send(&mut state, Event::Enter);

    for _ in 0..10 {
        send(&mut state, Event::KeyDown);
    }
    let (rows, highlighted) = state.overlay.snapshot().expect("overlay open");
    let row = &rows[highlighted.expect("a row is highlighted")];
    assert!(matches!(row, OverlayEntry::Item { id: 3, .. }));
}

#[test]
fn dismissing_the_popup_keeps_the_selection() {
    let mut state = initialize(&Config {
        selected: Some(2),
        ..fruit_config()
    });

    send(&mut state, Event::Enter);
    send(&mut state, Event::KeyUp);
    let actions = send(&mut state, Event::Escape);

    assert!(!state.combo.is_popup_active());
    assert_eq!(state.combo.selected_id(), 2);
    assert!(actions.is_empty());
}

#[test]
fn empty_list_offers_a_disabled_placeholder_row() {
    let mut state = initialize(&Config {
        no_choices_text: Some("nothing here".to_string()),
        ..Config::default()
    });

    send(&mut state, Event::Enter);
    let (rows, highlighted) = state.overlay.snapshot().expect("overlay open");
    assert_eq!(rows.len(), 1);
    assert!(matches!(
        &rows[0],
        OverlayEntry::Item { label, enabled: false, .. } if label == "nothing here"
    ));
    assert_eq!(highlighted, None);

    let actions = send(&mut state, Event::Enter);
    assert!(!state.combo.is_popup_active());
    assert_eq!(state.combo.selected_id(), 0);
    assert!(actions.is_empty());
}

#[test]
fn dropping_the_control_with_an_open_popup_closes_it() {
    let (combo, overlay, queue) = standalone_combo();
    combo.show_popup();
    assert!(overlay.is_open());

    drop(combo);
    assert!(!overlay.is_open());
    assert_eq!(queue.dispatch_pending(), 0);
}

#[test]
fn notification_for_a_dropped_control_is_discarded() {
    let (combo, _overlay, queue) = standalone_combo();
    let calls = Rc::new(Cell::new(0));
    let seen = Rc::clone(&calls);
    combo.add_listener(move |_: &ComboBox| seen.set(seen.get() + 1));

    combo.set_selected_id(20, Notification::Send);
    drop(combo);

    assert_eq!(queue.dispatch_pending(), 1);
    assert_eq!(calls.get(), 0);
}

#[test]
fn listener_removed_mid_delivery_is_skipped() {
    let (combo, _overlay, queue) = standalone_combo();
    let order = Rc::new(RefCell::new(Vec::new()));

    let second_id = Rc::new(Cell::new(None));
    let first_log = Rc::clone(&order);
    let to_remove = Rc::clone(&second_id);
    combo.add_listener(move |c: &ComboBox| {
        first_log.borrow_mut().push("first");
        if let Some(id) = to_remove.get() {
            c.remove_listener(id);
        }
    });
    let second_log = Rc::clone(&order);
    second_id.set(Some(
        combo.add_listener(move |_: &ComboBox| second_log.borrow_mut().push("second")),
    ));

    combo.set_selected_id(10, Notification::Send);
    queue.dispatch_pending();

    assert_eq!(*order.borrow(), vec!["first"]);
}

#[test]
fn typed_text_matching_an_item_selects_it() {
    let mut state = initialize(&Config {
        editable: true,
        ..fruit_config()
    });

    send(&mut state, Event::Char('e'));
    for c in "Banana".chars() {
        send(&mut state, Event::Char(c));
    }
    send(&mut state, Event::Enter);

    assert!(!state.combo.is_being_edited());
    assert_eq!(state.combo.selected_id(), 2);

    next_turn(&mut state);
    assert_eq!(state.last_change.borrow().text, "Banana");
}

#[test]
fn free_text_selects_nothing_and_survives_clear() {
    let mut state = initialize(&Config {
        editable: true,
        selected: Some(1),
        ..fruit_config()
    });

    state.combo.set_text("Mango", Notification::Send);
    assert_eq!(state.combo.selected_id(), 0);
    assert_eq!(state.combo.selected_item_index(), None);

    state.combo.clear(Notification::Send);
    assert_eq!(state.combo.num_items(), 0);
    assert_eq!(state.combo.text(), "Mango");
}

#[test]
fn clearing_a_read_only_control_drops_the_selection() {
    let mut state = initialize(&Config {
        selected: Some(1),
        ..fruit_config()
    });

    state.combo.clear(Notification::Send);
    assert_eq!(state.combo.text(), "");
    assert_eq!(state.combo.selected_id(), 0);

    next_turn(&mut state);
    let record = state.last_change.borrow();
    assert_eq!(record.count, 1);
    assert_eq!(record.id, 0);
}

#[test]
fn renamed_item_is_no_longer_selected() {
    let state = initialize(&Config {
        selected: Some(1),
        ..fruit_config()
    });

    state.combo.change_item_text(1, "Green apple");
    assert_eq!(state.combo.text(), "Apple");
    assert_eq!(state.combo.selected_id(), 0);
}
