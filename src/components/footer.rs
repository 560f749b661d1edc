//! Page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__copyright">"© 2025 Barış Güngör. Built with Rust, Leptos, and Trunk."</p>
            <p class="footer__roles">"Software Heritage Ambassador | AI Specialist | Software Developer"</p>
        </footer>
    }
}
