use leptos::prelude::*;

/// Screenshot and caption for one area of the product.
struct Shot {
    image: &'static str,
    title: &'static str,
    caption: &'static str,
}

static SHOTS: [Shot; 4] = [
    Shot {
        image: "/images/tab-1.webp",
        title: "Boards",
        caption: "Drag work across stages and see blockers at a glance.",
    },
    Shot {
        image: "/images/tab-2.webp",
        title: "Timelines",
        caption: "Gantt views that follow your dependencies, not the other way round.",
    },
    Shot {
        image: "/images/tab-3.webp",
        title: "Docs",
        caption: "Specs and meeting notes live next to the tasks they produce.",
    },
    Shot {
        image: "/images/tab-4.webp",
        title: "Goals",
        caption: "Tie every project to a company objective and track progress live.",
    },
];

#[component]
pub fn Showcase() -> impl IntoView {
    view! {
        <section id="showcase" class="showcase">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Built for how teams work"</p>
                    <h2 class="section-title">"Every view your team needs"</h2>
                </div>
                <div class="showcase-grid">
                    {SHOTS
                        .iter()
                        .map(|shot| {
                            view! {
                                <figure class="showcase-item">
                                    <img src=shot.image alt=shot.title loading="lazy" />
                                    <figcaption>
                                        <h3 class="showcase-title">{shot.title}</h3>
                                        <p class="showcase-caption">{shot.caption}</p>
                                    </figcaption>
                                </figure>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
