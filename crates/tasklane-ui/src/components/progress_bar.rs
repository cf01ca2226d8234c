use tasklane_core::cache::Progress;
use yew::{Html, Properties, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
    pub progress: Progress,
}

#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    let percent = props.progress.percent();
    html! {
        <div class="progress" title={format!("{} of {} done", props.progress.done, props.progress.total)}>
            <div class="progress-fill" style={format!("width:{percent}%;")}></div>
            <span class="progress-label">{ format!("{percent}%") }</span>
        </div>
    }
}
