use super::view_model::CustomerFormViewModel;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::notifications::NotificationService;
use crate::routes::AppRoute;
use crate::shared::components::ui::{Input, Textarea};
use crate::shared::components::PageHeader;
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use contracts::domain::a001_customer::aggregate::Customer;
use leptos::prelude::*;

/// Форма нового клиента: страница и модальное окно мастера используют её
#[component]
pub fn CustomerForm(
    on_saved: Callback<Customer>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let store = use_store();
    let vm = CustomerFormViewModel::new();

    let save = move |_| {
        if let Some(customer) = vm.save_command(&store) {
            vm.reset();
            on_saved.run(customer);
        }
    };

    view! {
        <div class="details-form customer-form">
            {move || vm.error.get().map(|e| view! {
                <div class="alert alert--error">{icon("alert")} {e}</div>
            })}

            <div class="form__row">
                <Input
                    label="Full name"
                    id="customer-name"
                    required=true
                    placeholder="Jane Smith"
                    value=Signal::derive(move || vm.form.with(|f| f.name.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.name = v))
                    error=Signal::derive(move || vm.name_error())
                />
                <Input
                    label="Phone"
                    id="customer-phone"
                    input_type="tel"
                    required=true
                    placeholder="+1 (555) 123-4567"
                    value=Signal::derive(move || vm.form.with(|f| f.phone.clone()))
                    on_input=Callback::new(move |v: String| vm.form.update(|f| f.phone = v))
                    error=Signal::derive(move || vm.phone_error())
                />
            </div>
            <div class="form__row">
                <Input
                    label="Email"
                    id="customer-email"
                    input_type="email"
                    placeholder="jane@example.com"
                    value=Signal::derive(move || vm.form.with(|f| f.email.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.set_optional(v, |f| &mut f.email))
                />
                <Input
                    label="Address"
                    id="customer-address"
                    value=Signal::derive(move || vm.form.with(|f| f.address.clone().unwrap_or_default()))
                    on_input=Callback::new(move |v: String| vm.set_optional(v, |f| &mut f.address))
                />
            </div>
            <Textarea
                label="Notes"
                id="customer-notes"
                placeholder="Preferences, fitting remarks..."
                value=Signal::derive(move || vm.form.with(|f| f.notes.clone().unwrap_or_default()))
                on_input=Callback::new(move |v: String| vm.set_optional(v, |f| &mut f.notes))
            />

            <div class="details-actions">
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button class="button button--primary" on:click=save>
                    {icon("check")}
                    " Save Customer"
                </button>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn NewCustomerPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    let on_saved = Callback::new(move |customer: Customer| {
        notifications.success(format!("Customer {} added", customer.name));
        ctx.navigate(AppRoute::CustomerDetails(customer.id));
    });
    let on_cancel = Callback::new(move |_: ()| ctx.navigate(AppRoute::Customers));

    view! {
        <div class="page page--narrow">
            <PageHeader
                title="New Customer".to_string()
                subtitle="Add a customer to start taking measurements".to_string()
                on_back=on_cancel
            >
                {()}
            </PageHeader>
            <div class="card">
                <CustomerForm on_saved=on_saved on_cancel=on_cancel />
            </div>
        </div>
    }
}
