//! Exclusive content: the revealed body, or the payment button while locked.

use leptos::*;
use myriad_core::{ExclusiveContent, UserContext};
use serde_json::Value;

use super::ButtonPayment;
use crate::services::use_paid_signal;

#[component]
pub fn ExclusiveContentView(
    user: UserContext,
    #[prop(into)] url: String,
    #[prop(into)] content_id: String,
) -> impl IntoView {
    let (exclusive, set_exclusive) = create_signal(None::<ExclusiveContent>);
    let paid = use_paid_signal();

    view! {
        <div class="exclusive-content">
            <Show
                when=move || exclusive.with(|e| e.as_ref().is_some_and(ExclusiveContent::is_unlocked))
                fallback=move || view! {
                    <ButtonPayment
                        user=user.clone()
                        url=url.clone()
                        content_id=content_id.clone()
                        set_exclusive=set_exclusive
                        paid=paid
                    />
                }
            >
                <pre class="exclusive-body">
                    {move || exclusive.with(|e| e.as_ref().and_then(|e| e.content.as_ref()).map(render_body))}
                </pre>
            </Show>
        </div>
    }
}

fn render_body(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}
