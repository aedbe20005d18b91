use crate::domain::a001_customer::ui::form::CustomerForm;
use crate::layout::notifications::NotificationService;
use crate::shared::data::use_store;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::shared::modal::Modal;
use contracts::domain::a001_customer::aggregate::Customer;
use contracts::usecases::u101_new_measurement::WizardSession;
use leptos::prelude::*;

/// Шаг 1: поиск и выбор клиента, либо создание нового
#[component]
pub fn StepSelectCustomer(session: RwSignal<WizardSession>) -> impl IntoView {
    let store = use_store();
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");
    let show_new_customer = RwSignal::new(false);

    let query = Signal::derive(move || session.with(|s| s.customer_query().to_string()));
    let customers = Memo::new(move |_| {
        let all = store.customers();
        session.with(|s| s.filtered_customers(&all))
    });
    let selected = Memo::new(move |_| session.with(|s| s.customer_id()));

    let on_created = Callback::new(move |customer: Customer| {
        notifications.success(format!("Customer {} added", customer.name));
        session.update(|s| {
            s.set_customer_query(String::new());
            s.select_customer(customer.id);
        });
        show_new_customer.set(false);
    });
    let close_modal = Callback::new(move |_: ()| show_new_customer.set(false));

    view! {
        <div class="wizard-step">
            <div class="toolbar">
                <SearchInput
                    value=query
                    on_change=Callback::new(move |v: String| session.update(|s| s.set_customer_query(v)))
                    placeholder="Search by name, phone or email..."
                />
                <button class="button button--secondary" on:click=move |_| show_new_customer.set(true)>
                    {icon("user-plus")}
                    " Add New Customer"
                </button>
            </div>

            <Show
                when=move || !customers.with(Vec::is_empty)
                fallback=|| view! {
                    <div class="empty-state text-muted">"No customers match the search"</div>
                }
            >
                <div class="choice-list">
                    {move || {
                        let search = query.get_untracked();
                        customers.get().into_iter().map(|c| {
                            let id = c.id;
                            view! {
                                <button
                                    class="choice-card"
                                    class:choice-card--selected=move || selected.get() == Some(id)
                                    on:click=move |_| session.update(|s| {
                                        if s.customer_id() == Some(id) {
                                            s.clear_customer();
                                        } else {
                                            s.select_customer(id);
                                        }
                                    })
                                >
                                    <div class="avatar">{c.initials()}</div>
                                    <div class="choice-card__body">
                                        <div class="choice-card__title">{highlight_matches(&c.name, &search)}</div>
                                        <div class="text-muted">{highlight_matches(&c.phone, &search)}</div>
                                    </div>
                                    <Show when=move || selected.get() == Some(id)>
                                        <span class="choice-card__check">{icon("check-circle")}</span>
                                    </Show>
                                </button>
                            }
                        }).collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || show_new_customer.get()>
                <Modal title="Add New Customer" on_close=close_modal>
                    <CustomerForm on_saved=on_created on_cancel=close_modal />
                </Modal>
            </Show>
        </div>
    }
}
