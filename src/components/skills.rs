//! Technical skill category cards.

use leptos::prelude::*;

use crate::content;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section id="skills" class="section skills">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">"Technical Skills"</h2>
                    <div class="section__rule"></div>
                </header>
                <div class="skills__grid">
                    {content::SKILL_CATEGORIES
                        .into_iter()
                        .map(|category| {
                            view! {
                                <div class="card skills__card">
                                    <h3 class="skills__category">{category.name}</h3>
                                    <ul class="skills__list">
                                        {category
                                            .skills
                                            .iter()
                                            .map(|skill| {
                                                view! {
                                                    <li class="skills__item">
                                                        <span class="skills__bullet"></span>
                                                        {*skill}
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
