use contracts::usecases::u101_new_measurement::WizardStep;
use leptos::prelude::*;

/// Полоса прогресса и заголовки шагов мастера
#[component]
pub fn WizardProgress(step: Signal<WizardStep>, percent: Signal<u32>) -> impl IntoView {
    view! {
        <div class="wizard-progress">
            <div class="wizard-progress__meta">
                <span>{move || format!("Step {} of {}", step.get().number(), WizardStep::ALL.len())}</span>
                <span>{move || format!("{}% complete", percent.get())}</span>
            </div>
            <div class="progress">
                <div class="progress__bar" style=move || format!("width: {}%", percent.get())></div>
            </div>
            <ol class="wizard-progress__steps">
                {WizardStep::ALL.into_iter().map(|s| view! {
                    <li
                        class="wizard-progress__step"
                        class:wizard-progress__step--current=move || step.get() == s
                        class:wizard-progress__step--done={move || step.get().number() > s.number()}
                    >
                        {format!("{}. {}", s.number(), s.title())}
                    </li>
                }).collect_view()}
            </ol>
        </div>
    }
}
