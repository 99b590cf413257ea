use leptos::{html, prelude::*};
use leptos_use::use_element_visibility;

/// Fades its children up into place the first time they scroll into view.
#[component]
pub fn Reveal(
    children: Children,
    #[prop(optional, into)] class: String,
    /// Extra delay before the transition starts, used to stagger grid items.
    #[prop(optional)]
    delay_ms: u32,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(target);
    let (revealed, set_revealed) = signal(false);

    Effect::new(move |_| {
        if visible.get() {
            set_revealed.set(true);
        }
    });

    let classes = move || {
        let state = if revealed.get() {
            "opacity-100 translate-y-0"
        } else {
            "opacity-0 translate-y-[60px]"
        };
        format!("transition-all duration-[600ms] ease-out {state} {class}")
    };

    view! {
        <div node_ref=target class=classes style:transition-delay=format!("{delay_ms}ms")>
            {children()}
        </div>
    }
}
