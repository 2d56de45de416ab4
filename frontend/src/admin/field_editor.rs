use serde_json::Value;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::cms::form::{
    build_section, parse_number, FieldControl, LabeledField, NavLinkRow, PendingEdit, SectionForm,
    UNAVAILABLE_MESSAGE,
};

#[derive(Properties, PartialEq)]
pub struct SectionEditorProps {
    pub section: AttrValue,
    pub value: Option<Value>,
    pub on_edit: Callback<PendingEdit>,
}

#[function_component]
pub fn SectionEditor(props: &SectionEditorProps) -> Html {
    let on_edit = &props.on_edit;

    match build_section(&props.section, props.value.as_ref()) {
        SectionForm::Fields { heading, fields } => html! {
            <>
                <h3 class="cms-heading">{heading}</h3>
                <div class="cms-fields">
                    { for fields.iter().map(|field| render_labeled(field, on_edit)) }
                </div>
            </>
        },
        SectionForm::List { heading, control } => html! {
            <>
                <h3 class="cms-heading">{heading}</h3>
                { render_control(&control, on_edit) }
            </>
        },
        SectionForm::NavLinks { links, rows } => {
            let add = {
                let on_edit = on_edit.clone();
                let edit = links.append(SectionForm::new_nav_link());
                Callback::from(move |_: MouseEvent| on_edit.emit(edit.clone()))
            };
            html! {
                <>
                    <h3 class="cms-heading">{"Navigation Links"}</h3>
                    <div class="cms-fields">
                        {
                            for rows.iter().enumerate().map(|(index, row)| {
                                let on_remove = links.remove(index).map(|edit| {
                                    let on_edit = on_edit.clone();
                                    Callback::from(move |_: MouseEvent| on_edit.emit(edit.clone()))
                                });
                                render_nav_row(row, index, on_remove, on_edit)
                            })
                        }
                        <button class="cms-add-button" onclick={add}>{"Add Navigation Link"}</button>
                    </div>
                </>
            }
        }
        SectionForm::Unavailable => html! {
            <p class="cms-unsupported">{UNAVAILABLE_MESSAGE}</p>
        },
    }
}

fn render_labeled(field: &LabeledField, on_edit: &Callback<PendingEdit>) -> Html {
    html! {
        <div class="cms-field">
            <label class="cms-label">{&field.label}</label>
            { render_control(&field.control, on_edit) }
        </div>
    }
}

fn render_control(control: &FieldControl, on_edit: &Callback<PendingEdit>) -> Html {
    match control {
        FieldControl::Text { path, value, multiline: true, .. } => {
            let oninput = {
                let path = path.clone();
                let on_edit = on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlTextAreaElement = e.target_unchecked_into();
                    on_edit.emit(PendingEdit::new(path.clone(), input.value()));
                })
            };
            html! {
                <textarea class="cms-input" rows="5" value={value.clone()} oninput={oninput} />
            }
        }
        FieldControl::Text { path, value, placeholder, .. } => {
            let oninput = {
                let path = path.clone();
                let on_edit = on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_edit.emit(PendingEdit::new(path.clone(), input.value()));
                })
            };
            html! {
                <input
                    type="text"
                    class="cms-input"
                    value={value.clone()}
                    placeholder={placeholder.unwrap_or_default()}
                    oninput={oninput}
                />
            }
        }
        FieldControl::Number { path, value } => {
            let oninput = {
                let path = path.clone();
                let on_edit = on_edit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    if let Some(number) = parse_number(&input.value()) {
                        on_edit.emit(PendingEdit::new(path.clone(), number));
                    }
                })
            };
            html! {
                <input type="number" class="cms-input" value={value.clone()} oninput={oninput} />
            }
        }
        FieldControl::Toggle { path, checked } => {
            let onchange = {
                let path = path.clone();
                let on_edit = on_edit.clone();
                Callback::from(move |e: Event| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    on_edit.emit(PendingEdit::new(path.clone(), input.checked()));
                })
            };
            html! {
                <div class="cms-toggle">
                    <input type="checkbox" checked={*checked} onchange={onchange} />
                    <span>{ if *checked { "Enabled" } else { "Disabled" } }</span>
                </div>
            }
        }
        FieldControl::Group { fields } => html! {
            <div class="cms-group">
                { for fields.iter().map(|field| render_labeled(field, on_edit)) }
            </div>
        },
        FieldControl::List { array, items } => {
            let add = {
                let on_edit = on_edit.clone();
                let edit = array.append_default();
                Callback::from(move |_: MouseEvent| on_edit.emit(edit.clone()))
            };
            html! {
                <div class="cms-list">
                    {
                        for items.iter().enumerate().map(|(index, item)| {
                            let remove = array.remove(index).map(|edit| {
                                let on_edit = on_edit.clone();
                                Callback::from(move |_: MouseEvent| on_edit.emit(edit.clone()))
                            });
                            html! {
                                <div class="cms-item" key={index}>
                                    <div class="cms-item-header">
                                        <h4>{&item.title}</h4>
                                        <button class="cms-remove-button" onclick={remove}>{"Remove"}</button>
                                    </div>
                                    { render_control(&item.control, on_edit) }
                                </div>
                            }
                        })
                    }
                    <button class="cms-add-button" onclick={add}>{"Add Item"}</button>
                </div>
            }
        }
    }
}

fn render_nav_row(
    row: &NavLinkRow,
    index: usize,
    on_remove: Option<Callback<MouseEvent>>,
    on_edit: &Callback<PendingEdit>,
) -> Html {
    let on_name = {
        let row = row.clone();
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(row.edit_name(&input.value()));
        })
    };
    let on_href = {
        let row = row.clone();
        let on_edit = on_edit.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_edit.emit(row.edit_href(&input.value()));
        })
    };

    html! {
        <div class="cms-item" key={index}>
            <div class="cms-item-header">
                <h4>{&row.title}</h4>
                <button class="cms-remove-button" onclick={on_remove}>{"Remove"}</button>
            </div>
            <div class="cms-field">
                <label class="cms-label">{"Name"}</label>
                <input type="text" class="cms-input" value={row.name.clone()} oninput={on_name} />
            </div>
            <div class="cms-field">
                <label class="cms-label">{"Link (href)"}</label>
                <input type="text" class="cms-input" value={row.href.clone()} oninput={on_href} />
            </div>
        </div>
    }
}
