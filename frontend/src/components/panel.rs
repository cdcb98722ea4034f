//! Titled box used to frame a view.

use leptos::*;

#[component]
pub fn BoxComponent(
    /// Heading shown above the content
    #[prop(into)]
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class="box">
            <div class="box-title">{title}</div>
            <div class="box-content">{children()}</div>
        </section>
    }
}
