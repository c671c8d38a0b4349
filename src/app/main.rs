use leptos::prelude::*;

use super::{backtop::BackTop, css::stylesheet};

const SECTIONS: usize = 24;

/// The demo page: enough content to scroll past the threshold.
#[component]
pub fn Main() -> impl IntoView {
    view! {
        <style>{stylesheet()}</style>
        <header>
            <a href="#content" class="skip-link">"Skip to content"</a>
            <h1>"Back to top"</h1>
        </header>
        <main id="content">
            {(1..=SECTIONS)
                .map(|n| {
                    view! {
                        <section>
                            <h2>{format!("Section {n}")}</h2>
                            <p>
                                "Scroll down far enough and a link appears that takes you back up here."
                            </p>
                            <button type="button">{format!("Action {n}")}</button>
                        </section>
                    }
                })
                .collect_view()}
        </main>
        <BackTop />
    }
}
