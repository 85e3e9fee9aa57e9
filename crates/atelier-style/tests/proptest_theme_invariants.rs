//! Property-based invariant tests for ThemeController.
//!
//! 1. From load onwards, through any sequence of toggles/sets, the store
//!    holds the current mode.
//! 2. Reloading from the store reproduces the mode whatever the system says.
//! 3. Inversion is an involution and never touches the controller.

use atelier_style::{
    FixedPreference, MemoryStore, Palette, Section, ThemeController, ThemeMode, ThemeSource,
};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Toggle,
    Set(bool),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Toggle), any::<bool>().prop_map(Op::Set)]
}

fn pref_strategy() -> impl Strategy<Value = FixedPreference> {
    prop_oneof![
        Just(FixedPreference::DARK),
        Just(FixedPreference::LIGHT),
        Just(FixedPreference::UNKNOWN),
    ]
}

proptest! {
    #[test]
    fn store_tracks_mode_and_reload_restores(
        ops in proptest::collection::vec(op_strategy(), 0..40),
        first in pref_strategy(),
        second in pref_strategy(),
    ) {
        let store = MemoryStore::new();
        let mut controller = ThemeController::load(Box::new(store.clone()), &first);

        for op in std::iter::once(None).chain(ops.into_iter().map(Some)) {
            match op {
                Some(Op::Toggle) => {
                    controller.toggle();
                }
                Some(Op::Set(dark)) => {
                    controller.set(ThemeMode::from_is_dark(dark));
                }
                None => {}
            }
            let expected = if controller.is_dark() { "true" } else { "false" };
            let stored = store.get("darkMode");
            prop_assert_eq!(stored.as_deref(), Some(expected));
        }

        let reloaded = ThemeController::load(Box::new(store.clone()), &second);
        prop_assert_eq!(reloaded.mode(), controller.mode());
        prop_assert_eq!(reloaded.source(), ThemeSource::Persisted);
        prop_assert_eq!(store.len(), 1);
    }

    #[test]
    fn inversion_is_local(dark in any::<bool>()) {
        let store = MemoryStore::new();
        let mut controller = ThemeController::load(Box::new(store), &FixedPreference::UNKNOWN);
        controller.set(ThemeMode::from_is_dark(dark));
        let before = controller.mode();

        let inverted = Palette::for_section(Section::Services, before);
        prop_assert_eq!(inverted, Palette::for_mode(before.inverted()));
        prop_assert_eq!(before.inverted().inverted(), before);
        prop_assert_eq!(controller.mode(), before);
    }
}
