use std::io::{self, IsTerminal, Write};

use tasklane_core::cache::{BoardView, DateFilter};
use tasklane_core::display::{description_or_placeholder, due_label};
use tasklane_core::wire::{TaskDto, TaskPriority};
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn new() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self { color }
    }

    pub fn plain() -> Self {
        Self { color: false }
    }

    #[tracing::instrument(skip(self, view, filter))]
    pub fn print_board(&self, view: &BoardView, filter: &DateFilter) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        self.write_board(&mut out, view, filter)
    }

    pub fn write_board<W: Write>(
        &self,
        mut out: W,
        view: &BoardView,
        filter: &DateFilter,
    ) -> anyhow::Result<()> {
        if filter.is_active()
            && let Some(date) = filter.date.as_deref()
        {
            writeln!(out, "{}", self.paint(&format!("Due on {date}"), "36"))?;
            writeln!(out)?;
        }

        writeln!(out, "{}", self.paint("Ongoing Tasks", "1"))?;
        self.write_column(&mut out, &view.active, "No ongoing tasks")?;
        writeln!(out)?;

        writeln!(out, "{}", self.paint("Completed Tasks", "1"))?;
        self.write_column(&mut out, &view.done, "No completed tasks")?;
        writeln!(out)?;

        let progress = view.progress;
        writeln!(
            out,
            "Progress: {}% ({}/{})",
            progress.percent(),
            progress.done,
            progress.total
        )?;
        Ok(())
    }

    fn write_column<W: Write>(
        &self,
        out: &mut W,
        tasks: &[TaskDto],
        empty: &str,
    ) -> anyhow::Result<()> {
        if tasks.is_empty() {
            writeln!(out, "  {empty}")?;
            return Ok(());
        }

        let headers = vec![
            "ID".to_string(),
            "Pri".to_string(),
            "Due".to_string(),
            "Title".to_string(),
            "Description".to_string(),
        ];

        let mut rows = Vec::with_capacity(tasks.len());
        for task in tasks {
            let priority = match task.priority {
                TaskPriority::High => self.paint("high", "31"),
                TaskPriority::Mid => self.paint("mid", "33"),
                TaskPriority::Low => self.paint("low", "32"),
            };
            let title = if task.is_done {
                self.paint(&task.title, "9")
            } else {
                task.title.clone()
            };
            rows.push(vec![
                self.paint(&task.id.to_string(), "33"),
                priority,
                due_label(task).unwrap_or_default(),
                title,
                description_or_placeholder(task).to_string(),
            ]);
        }

        write_table(out, headers, rows)
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn write_table<W: Write>(
    writer: &mut W,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
) -> anyhow::Result<()> {
    let column_count = headers.len();
    let mut widths = vec![0usize; column_count];

    for (idx, header) in headers.iter().enumerate() {
        widths[idx] = widths[idx].max(UnicodeWidthStr::width(header.as_str()));
    }
    for row in &rows {
        for (idx, cell) in row.iter().enumerate() {
            widths[idx] = widths[idx].max(UnicodeWidthStr::width(strip_ansi(cell).as_str()));
        }
    }

    let last = column_count.saturating_sub(1);
    let write_row = |writer: &mut W, cells: &[String]| -> anyhow::Result<()> {
        write!(writer, " ")?;
        for (idx, cell) in cells.iter().enumerate() {
            if idx == last {
                write!(writer, " {cell}")?;
            } else {
                let visible = UnicodeWidthStr::width(strip_ansi(cell).as_str());
                let padding = widths[idx].saturating_sub(visible);
                write!(writer, " {cell}{}", " ".repeat(padding))?;
            }
        }
        writeln!(writer)?;
        Ok(())
    };

    write_row(writer, &headers)?;
    let rule: Vec<String> = widths.iter().map(|width| "-".repeat(*width)).collect();
    write_row(writer, &rule)?;
    for row in &rows {
        write_row(writer, row)?;
    }

    Ok(())
}

fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut escaped = false;

    for ch in s.chars() {
        if escaped {
            if ch == 'm' {
                escaped = false;
            }
            continue;
        }
        if ch == '\x1b' {
            escaped = true;
            continue;
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use tasklane_core::cache::TaskCache;

    use super::*;

    fn task(id: u64, title: &str, done: bool) -> TaskDto {
        TaskDto {
            id,
            title: title.to_string(),
            description: None,
            priority: TaskPriority::High,
            due_date: Some("2025-10-05".to_string()),
            due_time: Some("09:00".to_string()),
            is_done: done,
            created_at: None,
        }
    }

    fn render(view: &BoardView, filter: &DateFilter) -> String {
        let mut buf = Vec::new();
        Renderer::plain()
            .write_board(&mut buf, view, filter)
            .expect("render board");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[test]
    fn board_lists_both_columns_and_progress() {
        let cache = TaskCache::new(vec![
            task(1, "Write report", false),
            task(2, "Pay rent", true),
            task(3, "Call mom", true),
        ]);
        let output = render(&cache.view(&DateFilter::default()), &DateFilter::default());

        let ongoing = output.find("Ongoing Tasks").expect("ongoing header");
        let completed = output.find("Completed Tasks").expect("completed header");
        let report = output.find("Write report").expect("active task listed");
        let rent = output.find("Pay rent").expect("done task listed");
        assert!(ongoing < report && report < completed && completed < rent);
        assert!(output.contains("2025-10-05 at 09:00"));
        assert!(output.contains("No description"));
        assert!(output.trim_end().ends_with("Progress: 67% (2/3)"));
    }

    #[test]
    fn empty_columns_get_placeholders() {
        let output = render(&BoardView::default(), &DateFilter::default());
        assert!(output.contains("No ongoing tasks"));
        assert!(output.contains("No completed tasks"));
        assert!(output.contains("Progress: 0% (0/0)"));
    }

    #[test]
    fn active_filter_is_announced() {
        let filter = DateFilter::new(true, Some("2025-10-05".to_string()));
        let output = render(&BoardView::default(), &filter);
        assert!(output.starts_with("Due on 2025-10-05"));
    }

    #[test]
    fn wide_titles_keep_columns_aligned() {
        let mut rows = Vec::new();
        rows.push(vec!["1".to_string(), "日本語".to_string(), "x".to_string()]);
        rows.push(vec!["22".to_string(), "ab".to_string(), "y".to_string()]);
        let mut buf = Vec::new();
        write_table(
            &mut buf,
            vec!["ID".to_string(), "Title".to_string(), "Note".to_string()],
            rows,
        )
        .expect("table renders");
        let text = String::from_utf8(buf).expect("utf8");
        let lines: Vec<&str> = text.lines().collect();
        let column = |line: &str| UnicodeWidthStr::width(&line[..line.rfind(' ').unwrap_or(0)]);
        assert_eq!(column(lines[2]), column(lines[3]));
    }

    #[test]
    fn strip_ansi_removes_color_codes() {
        assert_eq!(strip_ansi("\x1b[31mhigh\x1b[0m"), "high");
    }
}
