//! Education history and certification list.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Education() -> impl IntoView {
    view! {
        <section id="education" class="section section--alt education">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">"Education & Certifications"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="education__columns">
                    <div>
                        <h3 class="education__subtitle">"Education"</h3>
                        <div class="education__list">
                            {content::EDUCATION
                                .into_iter()
                                .map(|edu| {
                                    view! {
                                        <article class="card education__card">
                                            <h4 class="education__degree">{edu.degree}</h4>
                                            <h5 class="education__institution">{edu.institution}</h5>
                                            <p class="education__period">{edu.period}</p>
                                            <p class="education__location">{edu.location}</p>
                                        </article>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div>
                        <h3 class="education__subtitle">"Key Certifications"</h3>
                        <div class="education__certs">
                            {content::CERTIFICATIONS
                                .into_iter()
                                .map(|cert| {
                                    view! {
                                        <div class="card education__cert">
                                            <span class="education__cert-dot"></span>
                                            <span>{cert}</span>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
