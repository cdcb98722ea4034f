//! Social-link toggle widget.
//!
//! Renders one icon button per known platform. Clicking hands the
//! platform to the caller; connection state comes back through `connected`.

use leptos::*;
use myriad_core::{social_links, SocialMedia, SocialsEnum};

use super::BoxComponent;

#[component]
pub fn SocialMediaList(
    /// Social accounts linked by the user
    #[prop(into)]
    connected: Signal<Vec<SocialMedia>>,
    /// Invoked with the clicked platform
    toggle_verify: Callback<SocialsEnum>,
) -> impl IntoView {
    let socials = move || connected.with(|list| social_links(list));

    view! {
        <BoxComponent title="Social Media">
            <div class="social-list">
                <For
                    each=socials
                    key=|social| (social.id, social.connected)
                    children=move |social| {
                        let platform = social.id;
                        view! {
                            <button
                                class="icon-button social-icon"
                                class:primary=social.connected
                                class:secondary={!social.connected}
                                title=platform.label()
                                on:click=move |_| toggle_verify.call(platform)
                            >
                                <img src=social.icon alt=platform.label() width="24" height="24"/>
                            </button>
                        }
                    }
                />
            </div>
        </BoxComponent>
    }
}
