//! Exclusive-content payment button with the switch-network prompt.

use leptos::*;
use myriad_core::{ExclusiveContent, NetworkPrompt, PaidSignal, PaymentOutcome, UserContext};

use super::Prompt;
use crate::services::payment_flow;

#[component]
pub fn ButtonPayment(
    /// Signed-in user
    user: UserContext,
    /// Exclusive-content url
    #[prop(into)]
    url: String,
    /// Id of the post or comment holding the content
    #[prop(into)]
    content_id: String,
    /// Receives the content once revealed
    set_exclusive: WriteSignal<Option<ExclusiveContent>>,
    /// Paid notifications from the tipping store
    paid: ReadSignal<PaidSignal>,
) -> impl IntoView {
    let user = store_value(user);
    let url = store_value(url);
    let content_id = store_value(content_id);

    let prompt = create_rw_signal(NetworkPrompt::default());
    let (busy, set_busy) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let handle_pay = move || {
        if busy.get_untracked() {
            return;
        }
        set_busy.set(true);
        set_error.set(None);

        spawn_local(async move {
            let flow = user.with_value(payment_flow);
            let result = flow.pay(&url.get_value(), &content_id.get_value()).await;

            match result {
                Ok(PaymentOutcome::Revealed(detail)) => set_exclusive.set(Some(detail)),
                Ok(PaymentOutcome::NetworkMismatch { accept, current }) => {
                    prompt.update(|p| p.show(accept, current));
                }
                Ok(PaymentOutcome::TipDispatched { reference_id }) => {
                    log::info!("⏳ Waiting for payment of {}", reference_id);
                }
                Err(e) => {
                    log::error!("❌ Exclusive content payment failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            }

            set_busy.set(false);
        });
    };

    // Reveal again once the tipping store reports this content as paid.
    create_effect(move |_| {
        if paid.with(|signal| url.with_value(|url| signal.matches(url))) {
            handle_pay();
        }
    });

    let close_prompt = Callback::new(move |_: ()| prompt.update(|p| p.close()));

    let on_switch = move |_| {
        let mut target = None;
        prompt.update(|p| target = p.confirm_switch());

        if let Some(network) = target {
            spawn_local(async move {
                let flow = user.with_value(payment_flow);
                if let Err(e) = flow.switch_network(&network).await {
                    log::error!("❌ Network switch failed: {}", e);
                    set_error.set(Some(e.user_message()));
                }
            });
        }
    };

    view! {
        <button
            class="button-payment"
            disabled=move || busy.get()
            on:click=move |_| handle_pay()
        >
            <span class="gift-icon">"🎁"</span>
            "Unlock exclusive content"
        </button>

        <Show
            when=move || error.get().is_some()
            fallback=|| view! { }
        >
            <div class="error-message">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>

        <Prompt
            open=Signal::derive(move || prompt.with(|p| p.is_open()))
            title="Network Error"
            subtitle=Signal::derive(move || prompt.with(|p| p.message()))
            on_cancel=close_prompt
        >
            <div class="prompt-actions">
                <button class="btn btn-secondary" on:click=move |_| close_prompt.call(())>
                    "Cancel"
                </button>
                <button class="btn btn-primary" on:click=on_switch>
                    "Switch Network"
                </button>
            </div>
        </Prompt>
    }
}
