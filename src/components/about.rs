//! About section: biography paragraphs and headline stat cards.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="section about">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">"About Me"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="about__columns">
                    <div class="about__bio">
                        {content::ABOUT_PARAGRAPHS
                            .into_iter()
                            .map(|paragraph| view! { <p class="about__paragraph">{paragraph}</p> })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="about__stats">
                        {content::STATS
                            .into_iter()
                            .map(|stat| {
                                view! {
                                    <div class="card about__stat">
                                        <div class="about__stat-value">{stat.value}</div>
                                        <div class="about__stat-label">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </div>
        </section>
    }
}
