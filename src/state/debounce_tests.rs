//! Tests for the debounced input.

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

// ===== Editing =====

#[test]
fn new_input_is_empty_and_idle() {
    let input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);
    assert_eq!(input.text(), "");
    assert_eq!(input.cursor(), 0);
    assert!(!input.is_pending());
}

#[test]
fn seeded_input_has_cursor_at_end_and_nothing_pending() {
    let input = DebouncedInput::seeded("climate change", DEFAULT_QUIET_PERIOD);
    assert_eq!(input.text(), "climate change");
    assert_eq!(input.cursor(), 14);
    assert!(!input.is_pending(), "Seeding is not a keystroke");
}

#[test]
fn insert_char_updates_buffer_immediately() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);

    input.insert_char('b', t0);
    input.insert_char('i', t0);

    assert_eq!(input.text(), "bi");
    assert_eq!(input.cursor(), 2);
    assert!(input.is_pending());
}

#[test]
fn insert_char_at_cursor_in_middle() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("bicoin", DEFAULT_QUIET_PERIOD);
    input.cursor_left();
    input.cursor_left();
    input.cursor_left();

    input.insert_char('t', t0);

    assert_eq!(input.text(), "bitcoin");
    assert_eq!(input.cursor(), 4);
}

#[test]
fn backspace_handles_multibyte_characters() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("café", DEFAULT_QUIET_PERIOD);

    input.backspace(t0);

    assert_eq!(input.text(), "caf");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn backspace_at_start_is_noop_and_starts_no_timer() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("abc", DEFAULT_QUIET_PERIOD);
    input.cursor_home();

    input.backspace(t0);

    assert_eq!(input.text(), "abc");
    assert!(!input.is_pending());
}

#[test]
fn delete_removes_char_under_cursor() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("abc", DEFAULT_QUIET_PERIOD);
    input.cursor_home();

    input.delete(t0);

    assert_eq!(input.text(), "bc");
    assert_eq!(input.cursor(), 0);
    assert!(input.is_pending());
}

#[test]
fn delete_at_end_is_noop() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("abc", DEFAULT_QUIET_PERIOD);
    input.delete(t0);
    assert_eq!(input.text(), "abc");
    assert!(!input.is_pending());
}

#[test]
fn cursor_moves_saturate_and_do_not_restart_timer() {
    let mut input = DebouncedInput::seeded("ab", DEFAULT_QUIET_PERIOD);

    input.cursor_right();
    assert_eq!(input.cursor(), 2);
    input.cursor_left();
    input.cursor_left();
    input.cursor_left();
    assert_eq!(input.cursor(), 0);
    input.cursor_end();
    assert_eq!(input.cursor(), 2);

    assert!(!input.is_pending());
}

// ===== Promotion =====

#[test]
fn nothing_promoted_before_quiet_period() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);
    input.set_input_text("bitcoin", t0);

    assert_eq!(input.poll(t0 + ms(599)), None);
    assert!(input.is_pending());
}

#[test]
fn promotes_verbatim_once_quiet_period_elapses() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);
    input.set_input_text("  bitcoin ", t0);

    assert_eq!(input.poll(t0 + ms(600)), Some("  bitcoin ".to_string()));
    assert!(!input.is_pending());
}

#[test]
fn promotes_only_once() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);
    input.set_input_text("bitcoin", t0);

    assert!(input.poll(t0 + ms(700)).is_some());
    assert_eq!(input.poll(t0 + ms(5000)), None);
}

#[test]
fn two_keystrokes_100ms_apart_promote_only_the_last() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);

    input.set_input_text("bi", t0);
    assert_eq!(input.poll(t0 + ms(100)), None);
    input.set_input_text("bitcoin", t0 + ms(100));

    // The first keystroke's deadline (t0+600) must not fire.
    assert_eq!(input.poll(t0 + ms(600)), None);
    assert_eq!(input.poll(t0 + ms(699)), None);
    assert_eq!(input.poll(t0 + ms(700)), Some("bitcoin".to_string()));
    assert_eq!(input.poll(t0 + ms(2000)), None);
}

#[test]
fn cleared_field_is_promoted_as_empty_string() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::seeded("bitcoin", DEFAULT_QUIET_PERIOD);

    input.clear(t0);

    assert_eq!(input.text(), "");
    assert_eq!(input.poll(t0 + ms(600)), Some(String::new()));
}

#[test]
fn next_deadline_tracks_latest_edit() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(ms(250));

    assert_eq!(input.next_deadline(), None);
    input.insert_char('a', t0);
    assert_eq!(input.next_deadline(), Some(t0 + ms(250)));
    input.insert_char('b', t0 + ms(50));
    assert_eq!(input.next_deadline(), Some(t0 + ms(300)));
}

#[test]
fn custom_quiet_period_is_respected() {
    let t0 = Instant::now();
    let mut input = DebouncedInput::new(ms(50));
    input.set_input_text("x", t0);

    assert_eq!(input.quiet_period(), ms(50));
    assert_eq!(input.poll(t0 + ms(49)), None);
    assert_eq!(input.poll(t0 + ms(50)), Some("x".to_string()));
}

// ===== Properties =====

proptest! {
    /// Keystrokes closer together than the quiet period coalesce into one
    /// promotion of the final value.
    #[test]
    fn rapid_keystrokes_promote_only_final_value(
        edits in prop::collection::vec(("[a-z ]{0,12}", 0u64..600), 1..20)
    ) {
        let t0 = Instant::now();
        let mut input = DebouncedInput::new(DEFAULT_QUIET_PERIOD);
        let mut now = t0;
        let mut promotions = Vec::new();

        for (text, gap) in &edits {
            now += Duration::from_millis(*gap);
            if let Some(p) = input.poll(now) {
                promotions.push(p);
            }
            input.set_input_text(text.clone(), now);
        }
        // One poll while still quiet-but-early, one after the quiet period.
        if let Some(p) = input.poll(now + Duration::from_millis(599)) {
            promotions.push(p);
        }
        if let Some(p) = input.poll(now + DEFAULT_QUIET_PERIOD) {
            promotions.push(p);
        }

        let last = edits.last().map(|(t, _)| t.clone()).unwrap_or_default();
        prop_assert_eq!(promotions, vec![last]);
    }
}
