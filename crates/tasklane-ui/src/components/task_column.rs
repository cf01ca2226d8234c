use tasklane_core::draft::TaskDraft;
use tasklane_core::selection::BulkSelection;
use tasklane_core::wire::{TaskDto, TaskId};
use yew::{AttrValue, Callback, Html, Properties, function_component, html};

use super::task_card::TaskCard;
use super::task_editor::TaskEditor;

#[derive(Properties, PartialEq)]
pub struct TaskColumnProps {
    pub title: AttrValue,
    pub empty_message: AttrValue,
    pub tasks: Vec<TaskDto>,
    pub selection: BulkSelection,
    pub editing: Option<TaskId>,
    pub on_toggle_select: Callback<TaskId>,
    pub on_toggle_done: Callback<(TaskId, bool)>,
    pub on_edit: Callback<TaskId>,
    pub on_delete: Callback<TaskDto>,
    pub on_save_edit: Callback<(TaskId, TaskDraft)>,
    pub on_cancel_edit: Callback<()>,
}

#[function_component(TaskColumn)]
pub fn task_column(props: &TaskColumnProps) -> Html {
    html! {
        <section class="column">
            <h2 class="column-title">{ props.title.clone() }</h2>
            {
                if props.tasks.is_empty() {
                    html! { <div class="empty">{ props.empty_message.clone() }</div> }
                } else {
                    html! {
                        <ul class="task-list">
                            {
                                for props.tasks.iter().map(|task| {
                                    if props.editing == Some(task.id) {
                                        html! {
                                            <TaskEditor
                                                key={task.id.to_string()}
                                                task={task.clone()}
                                                on_save={props.on_save_edit.clone()}
                                                on_cancel={props.on_cancel_edit.clone()}
                                            />
                                        }
                                    } else {
                                        html! {
                                            <TaskCard
                                                key={task.id.to_string()}
                                                task={task.clone()}
                                                selected={props.selection.contains(task.id)}
                                                on_toggle_select={props.on_toggle_select.clone()}
                                                on_toggle_done={props.on_toggle_done.clone()}
                                                on_edit={props.on_edit.clone()}
                                                on_delete={props.on_delete.clone()}
                                            />
                                        }
                                    }
                                })
                            }
                        </ul>
                    }
                }
            }
        </section>
    }
}
