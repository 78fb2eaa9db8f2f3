//! Footer component.

use leptos::prelude::*;

const OWNER: &str = "Sagar Kadgond";
const CONTACT_EMAIL: &str = "kadgonds@gmail.com";
const LOCATION: &str = "India";

/// Page footer with contact details and the current year.
#[component]

pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <h3>{OWNER}</h3>
                    <p>
                        "I'm a video editor with a passion for storytelling through visual media. "
                        "Turning ideas into impactful visual experiences."
                    </p>
                </div>
                <div class="footer-contact">
                    <h4>"Contact"</h4>
                    <a href=format!("mailto:{CONTACT_EMAIL}")>{CONTACT_EMAIL}</a>
                    <span>{LOCATION}</span>
                </div>
            </div>
            <p class="footer-copy">{format!("© {year} {OWNER}. All rights reserved.")}</p>
        </footer>
    }
}
