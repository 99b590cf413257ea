use leptos::prelude::*;
use leptos_use::{use_raf_fn, use_window_scroll, UseRafFnCallbackArgs};

use super::browser::max_scroll_offset;
use crate::motion::ScrollProgress;

/// Reading progress bar pinned to the top of the viewport.
#[component]
pub fn ProgressBar() -> impl IntoView {
    let (_, y) = use_window_scroll();
    let progress = StoredValue::new(ScrollProgress::default());
    let (scale, set_scale) = signal(0.0_f64);

    Effect::new(move |_| {
        let offset = y.get();
        progress.update_value(|p| p.sample(offset, max_scroll_offset()));
    });

    use_raf_fn(move |args: UseRafFnCallbackArgs| {
        // delta is in milliseconds
        let dt = args.delta / 1000.0;
        if progress.try_update_value(|p| p.tick(dt)) == Some(true) {
            set_scale.set(progress.with_value(ScrollProgress::smoothed));
        }
    });

    view! {
        <div
            class="fixed top-0 left-0 right-0 h-1 bg-gradient-to-r from-amber-600 to-orange-600 origin-left z-50"
            style:transform=move || format!("scaleX({})", scale.get())
        ></div>
    }
}
