use super::progress::WizardProgress;
use super::step_customer::StepSelectCustomer;
use super::step_measurements::StepMeasurements;
use super::step_type::StepSelectType;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::AppRoute;
use crate::shared::components::PageHeader;
use crate::shared::data::use_store;
use crate::shared::date_utils;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::CustomerId;
use contracts::enums::MeasurementStatus;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u101_new_measurement::{NewMeasurement, WizardSession, WizardStep};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Мастер новой мерки. Сессия живёт, пока открыта страница;
/// при ошибке сохранения данные всех шагов остаются.
#[component]
pub fn NewMeasurementWizard(preselected: Option<CustomerId>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let store = use_store();

    let today = date_utils::today();
    let initial = match preselected {
        Some(id) if store.customer(id).is_ok() => WizardSession::with_customer(today, id),
        Some(id) => {
            log::warn!("wizard: preselected customer {} not found", id);
            WizardSession::new(today)
        }
        None => WizardSession::new(today),
    };
    let session = RwSignal::new(initial);
    let error = RwSignal::new(None::<String>);

    let step = Memo::new(move |_| session.with(|s| s.step()));
    let percent = Memo::new(move |_| session.with(|s| s.progress_percent()));
    let customer_name = Memo::new(move |_| {
        session
            .with(|s| s.customer_id())
            .and_then(|id| store.customer(id).ok())
            .map(|c| c.name)
    });

    let go_next = move |_| match session.try_update(|s| s.next()) {
        Some(Err(e)) => error.set(Some(e.to_string())),
        _ => error.set(None),
    };
    let go_back = move |_| {
        error.set(None);
        if step.get_untracked() == WizardStep::SelectCustomer {
            ctx.navigate(AppRoute::Measurements);
        } else {
            session.update(|s| {
                s.back();
            });
        }
    };
    let finish_save = move |status: MeasurementStatus| {
        let result = session.try_update(|s| store.complete_wizard_save(s, status));
        match result {
            Some(Ok(saved)) => {
                error.set(None);
                notifications.success(format!(
                    "{} measurement saved as {}",
                    saved.garment_type.label(),
                    saved.status.label()
                ));
                ctx.navigate(AppRoute::Measurements);
            }
            Some(Err(e)) => {
                notifications.error(e.to_string());
                error.set(Some(e.to_string()));
            }
            None => {}
        }
    };
    let save = Callback::new(move |status: MeasurementStatus| {
        match session.try_update(|s| s.begin_save()) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                error.set(Some(e.to_string()));
                return;
            }
            None => return,
        }
        // Запись на следующем тике: кнопки успевают стать неактивными
        Timeout::new(0, move || finish_save(status)).forget();
    });
    let is_saving = Memo::new(move |_| session.with(|s| s.is_saving()));

    view! {
        <div class="page page--narrow wizard">
            <PageHeader
                title=NewMeasurement::display_name().to_string()
                subtitle=NewMeasurement::description().to_string()
            >
                {()}
            </PageHeader>

            <WizardProgress step=step.into() percent=percent.into() />

            <div class="card wizard__body">
                <div class="wizard__heading">
                    <h2 class="card__title">{move || step.get().title()}</h2>
                    {move || customer_name.get().map(|name| view! {
                        <span class="text-muted">{icon("user")} " " {name}</span>
                    })}
                </div>

                {move || error.get().map(|e| view! {
                    <div class="alert alert--error">{icon("alert")} " " {e}</div>
                })}

                {move || match step.get() {
                    WizardStep::SelectCustomer => view! { <StepSelectCustomer session=session /> }.into_any(),
                    WizardStep::SelectType => view! { <StepSelectType session=session /> }.into_any(),
                    WizardStep::EnterMeasurements => {
                        view! { <StepMeasurements session=session error=error /> }.into_any()
                    }
                }}
            </div>

            <div class="wizard__footer">
                <button class="button button--secondary" on:click=go_back>
                    {icon("arrow-left")}
                    {move || if step.get() == WizardStep::SelectCustomer { " Cancel" } else { " Back" }}
                </button>
                <Show
                    when=move || step.get() == WizardStep::EnterMeasurements
                    fallback=move || view! {
                        <button class="button button--primary" on:click=go_next>
                            "Next "
                            {icon("chevron-right")}
                        </button>
                    }
                >
                    <button
                        class="button button--secondary"
                        disabled=move || is_saving.get()
                        on:click=move |_| save.run(MeasurementStatus::Draft)
                    >
                        {icon("file-text")}
                        " Save Draft"
                    </button>
                    <button
                        class="button button--primary"
                        disabled=move || is_saving.get()
                        on:click=move |_| save.run(MeasurementStatus::Completed)
                    >
                        {icon("check")}
                        {move || if is_saving.get() { " Saving..." } else { " Save & Complete" }}
                    </button>
                </Show>
            </div>
        </div>
    }
}
