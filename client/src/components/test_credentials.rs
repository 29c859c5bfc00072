//! Sign-in hint for the public demo API.

use leptos::prelude::*;

/// Account the demo API accepts for both login and registration.
pub const DEMO_EMAIL: &str = "eve.holt@reqres.in";
pub const DEMO_PASSWORD: &str = "cityslicka";

#[component]
pub fn TestCredentials() -> impl IntoView {
    view! {
        <div class="test-credentials">
            <div class="test-credentials__divider">
                <span>"Test credentials"</span>
            </div>
            <p>"Email: " {DEMO_EMAIL}</p>
            <p>"Password: " {DEMO_PASSWORD}</p>
        </div>
    }
}
