//! Transaction history with All / In / Out tabs.

use leptos::*;
use myriad_core::{fetch_history, HistoryDisplay, HistoryTab, HistoryView, TxRow, UserContext};

use super::BoxComponent;
use crate::config::{retry_policy, API_URL};
use crate::services::{browser_sleep, TransactionClient};

#[component]
pub fn TransactionHistory(user: UserContext) -> impl IntoView {
    let view_state = create_rw_signal(HistoryView::new(user.address.clone()));
    let client = store_value(TransactionClient::new(API_URL, &user));

    let refresh = move || {
        let mut started = false;
        view_state.update(|v| started = v.begin_refresh());
        if !started {
            return;
        }

        spawn_local(async move {
            let client = client.get_value();
            let result = fetch_history(&client, &retry_policy(), browser_sleep).await;
            view_state.update(|v| v.finish(result));
        });
    };

    refresh();

    let error = move || view_state.with(|v| v.error().map(|e| e.user_message()));

    view! {
        <BoxComponent title="Transaction History">
            {move || match view_state.with(HistoryView::display) {
                HistoryDisplay::Loading => view! {
                    <div class="history-loading">
                        <div class="spinner"></div>
                        <p>"Loading transactions..."</p>
                    </div>
                }.into_view(),
                HistoryDisplay::Empty => view! {
                    <div class="history-empty">
                        <p>"Data not available"</p>
                    </div>
                }.into_view(),
                HistoryDisplay::Rows(rows) => view! {
                    <div class="history-tabs" role="tablist">
                        {HistoryTab::ALL.into_iter().map(|tab| view! {
                            <button
                                id=tab.dom_id()
                                role="tab"
                                class="history-tab"
                                class:active=move || view_state.with(|v| v.tab() == tab)
                                on:click=move |_| view_state.update(|v| v.select_tab(tab))
                            >
                                {tab.label()}
                            </button>
                        }).collect_view()}
                    </div>
                    <div class="history-rows">
                        {rows.into_iter().map(|row| view! { <TxRowItem row=row/> }).collect_view()}
                    </div>
                }.into_view(),
            }}

            <Show when=move || error().is_some() fallback=|| view! { }>
                <div class="error-message">{move || error().unwrap_or_default()}</div>
            </Show>

            <button
                class="btn btn-primary history-refresh"
                disabled=move || view_state.with(HistoryView::is_loading)
                on:click=move |_| refresh()
            >
                "Refresh history"
            </button>
        </BoxComponent>
    }
}

#[component]
fn TxRowItem(row: TxRow) -> impl IntoView {
    view! {
        <div class="history-row">
            <div class="history-row-main">
                <span class="history-counterpart" title=row.counterpart>
                    {row.counterpart_label}
                </span>
                <span class="history-hash" title=row.hash>"Tx: ..."</span>
            </div>
            <span class="status-chip">{row.status.label()}</span>
            <span class=row.direction.css_class()>{row.direction.label()}</span>
            <span class="history-amount">{row.amount}</span>
        </div>
    }
}
