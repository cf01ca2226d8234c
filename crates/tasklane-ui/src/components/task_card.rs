use tasklane_core::display::{description_or_placeholder, meta_line};
use tasklane_core::wire::{TaskDto, TaskId};
use web_sys::HtmlInputElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
    pub task: TaskDto,
    pub selected: bool,
    pub on_toggle_select: Callback<TaskId>,
    pub on_toggle_done: Callback<(TaskId, bool)>,
    pub on_edit: Callback<TaskId>,
    pub on_delete: Callback<TaskDto>,
}

#[function_component(TaskCard)]
pub fn task_card(props: &TaskCardProps) -> Html {
    let task = &props.task;
    let id = task.id;

    let on_toggle_select = props.on_toggle_select.clone();
    let on_toggle_done = {
        let on_toggle_done = props.on_toggle_done.clone();
        Callback::from(move |e: web_sys::Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_toggle_done.emit((id, input.checked()));
        })
    };
    let on_edit = props.on_edit.clone();
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let task = task.clone();
        Callback::from(move |_| on_delete.emit(task.clone()))
    };

    let priority_class = format!("priority-{}", task.priority.as_key().to_ascii_lowercase());

    html! {
        <li class={classes!("task-card", priority_class, task.is_done.then_some("done"))}>
            <input
                type="checkbox"
                class="bulk-check"
                title="Select for bulk actions"
                checked={props.selected}
                onchange={move |_| on_toggle_select.emit(id)}
            />
            <input
                type="checkbox"
                class="done-check"
                title="Mark as done"
                checked={task.is_done}
                onchange={on_toggle_done}
            />
            <div class="task-body">
                <div class="task-title">{ &task.title }</div>
                <div class="task-desc">{ description_or_placeholder(task) }</div>
                <div class="task-meta">{ meta_line(task) }</div>
            </div>
            <div class="task-actions">
                <button class="btn" onclick={move |_| on_edit.emit(id)}>{ "Edit" }</button>
                <button class="btn danger" onclick={on_delete}>{ "Delete" }</button>
            </div>
        </li>
    }
}
