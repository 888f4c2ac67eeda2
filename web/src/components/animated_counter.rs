use std::time::Duration;

use booking_core::counter::CounterAnimation;
use leptos::prelude::*;

/// Outcome figure that counts up to `target` percent once the page is live.
#[component]
pub fn AnimatedCounter(target: u32) -> impl IntoView {
    let animation = CounterAnimation::new(target);
    let label = RwSignal::new(animation.label_at(Duration::ZERO));

    Effect::new(move |_| {
        if let Some(handle) = start(animation, label) {
            on_cleanup(move || handle.clear());
        }
    });

    view! { <span class="counter">{move || label.get()}</span> }
}

/// Writes the label for `elapsed` and reports whether the timer should keep
/// running. A disposed label (the counter has unmounted) stops it.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn advance(animation: CounterAnimation, label: RwSignal<String>, elapsed: Duration) -> bool {
    let mounted = label.try_set(animation.label_at(elapsed)).is_none();
    mounted && !animation.is_finished(elapsed)
}

#[cfg(feature = "hydrate")]
fn start(animation: CounterAnimation, label: RwSignal<String>) -> Option<IntervalHandle> {
    use std::cell::Cell;
    use std::rc::Rc;

    const FRAME: Duration = Duration::from_millis(16);

    let started = js_sys::Date::now();
    let interval = Rc::new(Cell::new(None::<IntervalHandle>));

    let tick = {
        let interval = Rc::clone(&interval);
        move || {
            let elapsed = Duration::from_secs_f64(((js_sys::Date::now() - started) / 1000.0).max(0.0));
            if !advance(animation, label, elapsed) {
                if let Some(handle) = interval.take() {
                    handle.clear();
                }
            }
        }
    };

    match set_interval_with_handle(tick, FRAME) {
        Ok(handle) => {
            interval.set(Some(handle));
            Some(handle)
        }
        Err(_) => {
            let _ = label.try_set(animation.label_at(animation.duration));
            None
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn start(_animation: CounterAnimation, _label: RwSignal<String>) -> Option<IntervalHandle> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_ticking_until_the_animation_ends() {
        let owner = Owner::new();
        let animation = CounterAnimation::new(90);
        let label = owner.with(|| RwSignal::new(String::new()));

        assert!(advance(animation, label, Duration::from_millis(500)));
        assert_ne!(label.get_untracked(), "0%");

        assert!(!advance(animation, label, animation.duration));
        assert_eq!(label.get_untracked(), "90%");
    }

    #[test]
    fn unmounted_counter_stops_without_touching_its_label() {
        let owner = Owner::new();
        let animation = CounterAnimation::new(90);
        let label = owner.with(|| RwSignal::new(String::new()));

        owner.cleanup();

        assert!(!advance(animation, label, Duration::from_millis(500)));
        assert!(!advance(animation, label, animation.duration));
    }
}
