//! fitlog Dashboard
//!
//! Fitness log dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Charts of pushups, distance run and weight lifted per entry date
//! - Table of all entries with edit and delete
//! - Edit form saving the whole entry
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to the fitlog record service over HTTP; see
//! [`api::client::get_api_base`] for how the service URL is chosen.

use leptos::*;

mod api;
mod app;
mod components;
mod console;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    mount_to_body(|| view! { <app::App /> });
}
