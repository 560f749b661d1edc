//! Professional experience timeline cards.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id="experience" class="section section--alt experience">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">"Professional Experience"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="experience__list">
                    {content::EXPERIENCES
                        .into_iter()
                        .map(|exp| {
                            view! {
                                <article class="card experience__card">
                                    <div class="experience__card-head">
                                        <div>
                                            <h3 class="experience__role">{exp.title}</h3>
                                            <h4 class="experience__company">{exp.company}</h4>
                                        </div>
                                        <div class="experience__meta">
                                            <div class="experience__period">{exp.period}</div>
                                            <div class="experience__location">{exp.location}</div>
                                        </div>
                                    </div>
                                    <p class="experience__description">{exp.description}</p>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
