//! Contact section with location rows and professional links.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Contact() -> impl IntoView {
    view! {
        <section id="contact" class="section section--dark contact">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title section__title--on-banner">"Get In Touch"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="contact__columns">
                    <div>
                        <h3 class="contact__subtitle">"Let's Connect"</h3>
                        <p class="contact__intro">
                            "I'm always interested in new opportunities, collaborations, and innovative projects. Feel free to reach out if you'd like to discuss technology, AI, or potential partnerships."
                        </p>
                        <div class="contact__rows">
                            <div class="contact__row">
                                <span class="contact__row-icon">"📍"</span>
                                <span>{content::LOCATION}</span>
                            </div>
                            <div class="contact__row">
                                <span class="contact__row-icon">"🌐"</span>
                                <span>{content::AVAILABILITY}</span>
                            </div>
                        </div>
                    </div>
                    <div>
                        <h3 class="contact__subtitle">"Professional Links"</h3>
                        <div class="contact__links">
                            <a
                                href=content::LINKEDIN_URL
                                target="_blank"
                                rel="noopener noreferrer"
                                class="contact__link contact__link--linkedin"
                            >
                                <span class="contact__link-icon">"💼"</span>
                                <span>
                                    <span class="contact__link-title">"LinkedIn Profile"</span>
                                    <span class="contact__link-caption">"Connect with me professionally"</span>
                                </span>
                            </a>
                            <div class="contact__link">
                                <span class="contact__link-icon">"🏛️"</span>
                                <span>
                                    <span class="contact__link-title">"Software Heritage Ambassador"</span>
                                    <span class="contact__link-caption">"Contributing to open-source preservation"</span>
                                </span>
                            </div>
                            <div class="contact__link">
                                <span class="contact__link-icon">"🎓"</span>
                                <span>
                                    <span class="contact__link-title">"Professional Memberships"</span>
                                    <span class="contact__link-caption">{content::MEMBERSHIPS}</span>
                                </span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
