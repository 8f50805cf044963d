//! Inputs rendered from a field schema.

use leptos::prelude::*;

use crate::util::form::{FieldSpec, FormValues};

#[component]
pub fn FieldInputs(fields: &'static [FieldSpec], values: RwSignal<FormValues>) -> impl IntoView {
    fields
        .iter()
        .map(|field| {
            let name = field.name;
            view! {
                <label class="field">
                    <span class="field__label">{field.label}</span>
                    <input
                        class="input"
                        name=name
                        type=field.kind.input_type()
                        required=field.required
                        prop:value=move || values.with(|v| v.get(name).cloned().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            values.update(|v| {
                                v.insert(name, value);
                            });
                        }
                    />
                </label>
            }
        })
        .collect_view()
}
