//! Featured project cards with technology chips.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="section section--banner projects">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title section__title--on-banner">"Featured Projects"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="projects__grid">
                    {content::PROJECTS
                        .into_iter()
                        .map(|project| {
                            view! {
                                <article class="card projects__card">
                                    <h3 class="projects__title">{project.title}</h3>
                                    <p class="projects__period">{project.period}</p>
                                    <p class="projects__description">{project.description}</p>
                                    <h4 class="projects__tech-heading">"Technologies:"</h4>
                                    <div class="projects__tech-list">
                                        {project
                                            .technologies
                                            .iter()
                                            .map(|tech| view! { <span class="projects__tech-chip">{*tech}</span> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
