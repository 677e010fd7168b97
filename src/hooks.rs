//! Reactive Helpers
//!
//! Debounced signal mirror for the KPI search input.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Mirror `source` into a signal that only settles after `delay_ms` of
/// quiet. Each change starts a new timer; only the latest one is applied.
pub fn use_debounced(source: ReadSignal<String>, delay_ms: u32) -> ReadSignal<String> {
    let (debounced, set_debounced) = signal(source.get_untracked());
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let value = source.get();
        let current = generation.with_value(|g| g + 1);
        generation.set_value(current);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.get_value() == current {
                set_debounced.set(value);
            }
        });
    });

    debounced
}
