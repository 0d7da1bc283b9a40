//! Sui Journal UI
//!
//! Browser front-end for on-chain journals, built with Leptos (WASM).
//!
//! # Features
//!
//! - Create a journal owned by the connected wallet account
//! - Read a journal and its timestamped entries
//! - Append entries to journals you own
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the journal host API over HTTP; the host holds the
//! ledger client and the wallet connector.

use leptos::*;

mod api;
mod app;
mod components;
mod format;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
