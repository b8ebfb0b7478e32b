use std::cell::{Cell, RefCell};

use super::*;
use crate::error::StorageError;
use crate::storage::MemoryStore;

const KEY: &str = "sc_theme_preference";

// =============================================================
// Fakes
// =============================================================

#[derive(Default)]
struct FakeRoot {
    theme: Cell<Option<Theme>>,
}

impl ThemeRoot for FakeRoot {
    fn set_theme(&self, theme: Theme) {
        self.theme.set(Some(theme));
    }
}

struct FakeControl {
    option: Option<String>,
    active: Cell<Option<bool>>,
}

impl FakeControl {
    fn new(option: &str) -> Self {
        Self { option: Some(option.to_owned()), active: Cell::new(None) }
    }
}

impl ThemeControl for FakeControl {
    fn option(&self) -> Option<String> {
        self.option.clone()
    }

    fn set_active(&self, active: bool) {
        self.active.set(Some(active));
    }
}

fn selector_row() -> Vec<FakeControl> {
    vec![FakeControl::new("pink"), FakeControl::new("cream"), FakeControl::new("dark")]
}

fn active_options(controls: &[FakeControl]) -> Vec<String> {
    controls
        .iter()
        .filter(|c| c.active.get() == Some(true))
        .filter_map(|c| c.option.clone())
        .collect()
}

/// Store whose reads and writes always throw.
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Access("SecurityError".into()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

#[derive(Default)]
struct CountingStore {
    inner: MemoryStore,
    writes: RefCell<Vec<String>>,
}

impl KeyValueStore for CountingStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.borrow_mut().push(value.to_owned());
        self.inner.set(key, value)
    }
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_accepts_each_theme_name() {
    assert_eq!(normalize(Some("pink")), Theme::Pink);
    assert_eq!(normalize(Some("cream")), Theme::Cream);
    assert_eq!(normalize(Some("dark")), Theme::Dark);
}

#[test]
fn normalize_falls_back_to_cream() {
    for candidate in [None, Some(""), Some("blue"), Some("Dark"), Some(" dark"), Some("light")] {
        assert_eq!(normalize(candidate), Theme::Cream, "candidate {candidate:?}");
    }
}

#[test]
fn theme_display_round_trips_through_from_str() {
    for theme in Theme::ALL {
        assert_eq!(theme.to_string().parse::<Theme>(), Ok(theme));
    }
}

#[test]
fn from_str_reports_unknown_value() {
    let err = "mauve".parse::<Theme>().expect_err("not a theme");
    assert_eq!(err, UnknownTheme("mauve".into()));
}

// =============================================================
// apply
// =============================================================

#[test]
fn apply_marks_exactly_the_matching_control() {
    let root = FakeRoot::default();
    let controls = selector_row();
    for theme in Theme::ALL {
        apply(&root, &controls, theme);
        assert_eq!(root.theme.get(), Some(theme));
        assert_eq!(active_options(&controls), vec![theme.as_str().to_owned()]);
        assert!(controls.iter().all(|c| c.active.get().is_some()));
    }
}

#[test]
fn apply_clears_controls_with_bad_option() {
    let root = FakeRoot::default();
    let controls = vec![
        FakeControl::new("dark"),
        FakeControl { option: None, active: Cell::new(Some(true)) },
        FakeControl::new("neon"),
    ];
    apply(&root, &controls, Theme::Dark);
    assert_eq!(controls[1].active.get(), Some(false));
    assert_eq!(controls[2].active.get(), Some(false));
    assert_eq!(active_options(&controls), vec!["dark".to_owned()]);
}

// =============================================================
// ThemeController
// =============================================================

#[test]
fn restore_uses_persisted_dark() {
    let controller = ThemeController::new(MemoryStore::with_entry(KEY, "dark"), KEY);
    let root = FakeRoot::default();
    let controls = selector_row();

    let theme = controller.restore(&root, &controls);

    assert_eq!(theme, Theme::Dark);
    assert_eq!(root.theme.get(), Some(Theme::Dark));
    assert_eq!(active_options(&controls), vec!["dark".to_owned()]);
}

#[test]
fn load_defaults_when_absent() {
    let controller = ThemeController::new(MemoryStore::new(), KEY);
    assert_eq!(controller.load(), Theme::Cream);
}

#[test]
fn load_defaults_when_invalid() {
    let controller = ThemeController::new(MemoryStore::with_entry(KEY, "sepia"), KEY);
    assert_eq!(controller.load(), Theme::Cream);
}

#[test]
fn load_defaults_when_store_throws() {
    let controller = ThemeController::new(BrokenStore, KEY);
    assert_eq!(controller.load(), Theme::Cream);
}

#[test]
fn select_applies_and_persists() {
    let store = MemoryStore::new();
    let controller = ThemeController::new(&store, KEY);
    let root = FakeRoot::default();
    let controls = selector_row();

    let theme = controller.select(&root, &controls, Some("pink"));

    assert_eq!(theme, Theme::Pink);
    assert_eq!(root.theme.get(), Some(Theme::Pink));
    assert_eq!(active_options(&controls), vec!["pink".to_owned()]);
    assert_eq!(store.get(KEY), Ok(Some("pink".to_owned())));
}

#[test]
fn select_persists_normalized_value() {
    let store = CountingStore::default();
    let controller = ThemeController::new(&store, KEY);
    let root = FakeRoot::default();

    controller.select(&root, &selector_row(), Some("DARK"));

    assert_eq!(*store.writes.borrow(), vec!["cream".to_owned()]);
}

#[test]
fn select_still_applies_when_store_rejects_write() {
    let controller = ThemeController::new(BrokenStore, KEY);
    let root = FakeRoot::default();
    let controls = selector_row();

    let theme = controller.select(&root, &controls, Some("dark"));

    assert_eq!(theme, Theme::Dark);
    assert_eq!(root.theme.get(), Some(Theme::Dark));
    assert_eq!(active_options(&controls), vec!["dark".to_owned()]);
}

#[test]
fn selection_survives_reload() {
    let store = MemoryStore::new();
    ThemeController::new(&store, KEY).select(&FakeRoot::default(), &selector_row(), Some("pink"));

    let reloaded = ThemeController::new(&store, KEY);
    assert_eq!(reloaded.load(), Theme::Pink);
}
