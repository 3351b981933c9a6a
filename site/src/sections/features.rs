use leptos::prelude::*;

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"Features"</p>
                    <h2 class="section-title">"From idea to launch, without the spreadsheet"</h2>
                    <p class="section-description">
                        "Bird connects company-wide goals to the work needed to achieve them. "
                        "Everything else is a click away."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="Portfolio view"
                        description="Roll up every project into one dashboard with status, owners and risk."
                    />
                    <FeatureCard
                        icon="[2]"
                        title="Workload balancing"
                        description="See who is overloaded before deadlines slip and reassign in one move."
                    />
                    <FeatureCard
                        icon="[3]"
                        title="Automations"
                        description="Move tasks, notify reviewers and open follow-ups when work changes state."
                    />
                    <FeatureCard
                        icon="[4]"
                        title="Forms and intake"
                        description="Turn requests from any team into triaged, assigned tasks."
                    />
                    <FeatureCard
                        icon="[5]"
                        title="Reporting"
                        description="Burn-up charts, cycle time and goal progress without exporting a thing."
                    />
                    <FeatureCard
                        icon="[6]"
                        title="Integrations"
                        description="Works with the chat, code hosting and calendar tools you already use."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
        </article>
    }
}
