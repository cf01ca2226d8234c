use tasklane_core::draft::TaskDraft;
use tasklane_core::wire::{TaskDto, TaskId, TaskPriority};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::{Callback, Html, Properties, TargetCast, function_component, html, use_state};

use super::priority_options;

#[derive(Properties, PartialEq)]
pub struct TaskEditorProps {
    pub task: TaskDto,
    pub on_save: Callback<(TaskId, TaskDraft)>,
    pub on_cancel: Callback<()>,
}

/// Inline editor that replaces a card while open. The scrim behind it closes
/// the editor on an outside click.
#[function_component(TaskEditor)]
pub fn task_editor(props: &TaskEditorProps) -> Html {
    let draft = {
        let task = props.task.clone();
        use_state(move || TaskDraft::from_task(&task))
    };

    let edit = |apply: fn(&mut TaskDraft, String)| {
        let draft = draft.clone();
        move |value: String| {
            let mut next = (*draft).clone();
            apply(&mut next, value);
            draft.set(next);
        }
    };

    let on_title = {
        let set = edit(|draft, value| draft.title = value);
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_description = {
        let set = edit(|draft, value| draft.description = value);
        Callback::from(move |e: web_sys::InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_priority = {
        let set = edit(|draft, value| {
            draft.priority = value.parse().unwrap_or(TaskPriority::Mid);
        });
        Callback::from(move |e: web_sys::Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set(select.value());
        })
    };
    let on_due_date = {
        let set = edit(|draft, value| draft.due_date = value);
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };
    let on_due_time = {
        let set = edit(|draft, value| draft.due_time = value);
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set(input.value());
        })
    };

    let on_submit = {
        let draft = draft.clone();
        let on_save = props.on_save.clone();
        let id = props.task.id;
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_save.emit((id, (*draft).clone()));
        })
    };
    let on_cancel = props.on_cancel.clone();
    let on_scrim = props.on_cancel.clone();

    html! {
        <li class="task-card editing">
            <div class="editor-scrim" onclick={move |_| on_scrim.emit(())}></div>
            <form class="task-editor" onsubmit={on_submit}>
                <input class="field" placeholder="Title" value={draft.title.clone()} oninput={on_title} />
                <textarea class="field" placeholder="Description" value={draft.description.clone()} oninput={on_description} />
                <div class="row">
                    <select class="field" onchange={on_priority}>
                        { priority_options(draft.priority) }
                    </select>
                    <input class="field" type="date" value={draft.due_date.clone()} onchange={on_due_date} />
                    <input class="field" type="time" value={draft.due_time.clone()} onchange={on_due_time} />
                </div>
                <div class="row actions">
                    <button class="btn ok" type="submit">{ "Save" }</button>
                    <button class="btn" type="button" onclick={move |_| on_cancel.emit(())}>{ "Cancel" }</button>
                </div>
            </form>
        </li>
    }
}
