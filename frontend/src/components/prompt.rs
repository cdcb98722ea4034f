//! Modal confirmation prompt.

use leptos::*;

#[component]
pub fn Prompt(
    /// Whether the prompt is shown
    #[prop(into)]
    open: Signal<bool>,
    #[prop(into)]
    title: String,
    #[prop(into)]
    subtitle: Signal<String>,
    /// Called when the backdrop is clicked
    on_cancel: Callback<()>,
    /// Action buttons
    children: ChildrenFn,
) -> impl IntoView {
    let title = store_value(title);
    let children = store_value(children);

    view! {
        <Show when=move || open.get() fallback=|| view! { }>
            <div class="prompt-backdrop" on:click=move |_| on_cancel.call(())>
                <div class="prompt" role="dialog" on:click=|ev| ev.stop_propagation()>
                    <div class="prompt-icon">"⚠️"</div>
                    <div class="prompt-title">{title.get_value()}</div>
                    <div class="prompt-subtitle">{move || subtitle.get()}</div>
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}
