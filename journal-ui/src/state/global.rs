//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

use crate::api::{self, NetworkInfo};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Wallet account reported by the host, if one is connected
    pub account: RwSignal<Option<String>>,
    /// Active network variables
    pub network: RwSignal<Option<NetworkInfo>>,
    /// Why the host could not be reached on the last refresh
    pub error: RwSignal<Option<String>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        account: create_rw_signal(None),
        network: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Reload the account and network from the host
    pub fn refresh(&self) {
        let state = self.clone();
        self.error.set(None);
        spawn_local(async move {
            match api::fetch_network().await {
                Ok(network) => state.network.set(Some(network)),
                Err(e) => state.error.set(Some(e)),
            }
            match api::fetch_account().await {
                Ok(account) => state.account.set(account),
                Err(e) => state.error.set(Some(e)),
            }
        });
    }

    /// Whether the connected account owns an object with `owner`
    pub fn owns(&self, owner: Option<&str>) -> bool {
        is_owner(self.account.get().as_deref(), owner)
    }

    /// What the header shows for the wallet
    pub fn account_status(&self) -> AccountStatus {
        account_status(self.account.get(), self.error.get())
    }
}

/// Wallet state as shown in the header
#[derive(Clone, Debug, PartialEq)]
pub enum AccountStatus {
    /// Account shortened for display, e.g. `0x1234…cdef`
    Connected(String),
    /// The host could not be reached
    Unreachable(String),
    Disconnected,
}

fn account_status(account: Option<String>, error: Option<String>) -> AccountStatus {
    match (account, error) {
        (Some(address), _) => AccountStatus::Connected(shorten(&address)),
        (None, Some(error)) => AccountStatus::Unreachable(error),
        (None, None) => AccountStatus::Disconnected,
    }
}

/// Both sides must be present and equal
pub fn is_owner(account: Option<&str>, owner: Option<&str>) -> bool {
    match (account, owner) {
        (Some(account), Some(owner)) => account.eq_ignore_ascii_case(owner),
        _ => false,
    }
}

fn shorten(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}
