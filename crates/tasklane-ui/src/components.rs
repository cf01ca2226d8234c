mod bulk_bar;
mod calendar_sidebar;
mod new_task_modal;
mod progress_bar;
mod task_card;
mod task_column;
mod task_editor;
mod toast;
mod toolbar;

pub use bulk_bar::BulkBar;
pub use calendar_sidebar::CalendarSidebar;
pub use new_task_modal::NewTaskModal;
pub use progress_bar::ProgressBar;
pub use task_column::TaskColumn;
pub use toast::ToastView;
pub use toolbar::Toolbar;

use tasklane_core::wire::TaskPriority;
use yew::{Html, html};

fn priority_options(selected: TaskPriority) -> Html {
    html! {
        {
            for TaskPriority::all().into_iter().map(|priority| html! {
                <option value={priority.as_key()} selected={priority == selected}>
                    { priority.as_key() }
                </option>
            })
        }
    }
}
