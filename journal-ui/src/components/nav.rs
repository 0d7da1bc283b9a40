//! Navigation Component
//!
//! Header bar with the app name, the active network and the connected account.

use leptos::*;
use leptos_router::*;

use crate::state::global::{AccountStatus, GlobalState};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let network_state = state.clone();

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📓"</span>
                        <span class="text-xl font-bold text-white">"Sui Journal"</span>
                    </A>

                    <div class="flex items-center space-x-4 text-sm">
                        // Active network
                        {move || {
                            network_state.network.get().map(|network| view! {
                                <span class="px-3 py-1 rounded-full bg-gray-700 text-gray-300">
                                    {network.network}
                                </span>
                            })
                        }}

                        // Connected account, or why the host could not tell us
                        {move || match state.account_status() {
                            AccountStatus::Unreachable(error) => view! {
                                <span class="flex items-center space-x-1 text-red-400" title=error.clone()>
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>{format!("Host unavailable: {}", error)}</span>
                                </span>
                            }.into_view(),
                            AccountStatus::Connected(account) => view! {
                                <span class="flex items-center space-x-1 text-green-400">
                                    <span class="w-2 h-2 bg-green-400 rounded-full" />
                                    <span class="font-mono">{account}</span>
                                </span>
                            }.into_view(),
                            AccountStatus::Disconnected => view! {
                                <span class="flex items-center space-x-1 text-red-400">
                                    <span class="w-2 h-2 bg-red-400 rounded-full" />
                                    <span>"No wallet connected"</span>
                                </span>
                            }.into_view(),
                        }}
                    </div>
                </div>
            </div>
        </nav>
    }
}
