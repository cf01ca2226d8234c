use tasklane_core::draft::TaskDraft;
use tasklane_core::wire::TaskPriority;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html};

use super::priority_options;

#[derive(Properties, PartialEq)]
pub struct NewTaskModalProps {
    pub open: bool,
    pub busy: bool,
    pub draft: TaskDraft,
    pub on_change: Callback<TaskDraft>,
    pub on_submit: Callback<()>,
    pub on_close: Callback<()>,
}

#[function_component(NewTaskModal)]
pub fn new_task_modal(props: &NewTaskModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let field = |apply: fn(&mut TaskDraft, String)| {
        let draft = props.draft.clone();
        let on_change = props.on_change.clone();
        move |value: String| {
            let mut next = draft.clone();
            apply(&mut next, value);
            on_change.emit(next);
        }
    };

    let on_title = {
        let set = field(|draft, value| draft.title = value);
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_description = {
        let set = field(|draft, value| draft.description = value);
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_priority = {
        let set = field(|draft, value| {
            draft.priority = value.parse().unwrap_or(TaskPriority::Mid);
        });
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_due_date = {
        let set = field(|draft, value| draft.due_date = value);
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_due_time = {
        let set = field(|draft, value| draft.due_time = value);
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: web_sys::MouseEvent| {
            let clicked_backdrop = match (e.target(), e.current_target()) {
                (Some(target), Some(current)) => target == current,
                _ => false,
            };
            if clicked_backdrop {
                on_close.emit(());
            }
        })
    };
    let on_close_button = props.on_close.clone();
    let on_cancel = props.on_close.clone();
    let draft = &props.draft;

    html! {
        <div class="modal-backdrop" onclick={on_backdrop}>
            <div class="modal" role="dialog" aria-modal="true">
                <div class="modal-header">
                    <h2>{ "New task" }</h2>
                    <button class="btn close" aria-label="Close" onclick={move |_| on_close_button.emit(())}>{ "×" }</button>
                </div>
                <form class="task-form" onsubmit={on_submit}>
                    <input class="field" placeholder="Title" autofocus=true value={draft.title.clone()} oninput={on_title} />
                    <textarea class="field" placeholder="Description" value={draft.description.clone()} oninput={on_description} />
                    <div class="row">
                        <select class="field" onchange={on_priority}>
                            { priority_options(draft.priority) }
                        </select>
                        <input class="field" type="date" value={draft.due_date.clone()} onchange={on_due_date} />
                        <input class="field" type="time" value={draft.due_time.clone()} onchange={on_due_time} />
                    </div>
                    <div class="row actions">
                        <button class="btn ok" type="submit" disabled={props.busy}>{ "Add task" }</button>
                        <button class="btn" type="button" onclick={move |_| on_cancel.emit(())}>{ "Cancel" }</button>
                    </div>
                </form>
            </div>
        </div>
    }
}
