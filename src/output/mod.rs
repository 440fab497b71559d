//! Output formatting module for taskpulse
//!
//! Provides table formatting and display utilities for CLI output.

use chrono::{DateTime, Utc};
use taskpulse_core::{ScoreBreakdown, Task, TaskSummary};

/// Maximum width for the title column before truncation
const MAX_TITLE_WIDTH: usize = 30;

/// Maximum width for the tags column before truncation
const MAX_TAGS_WIDTH: usize = 20;

const DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Truncate a string to the specified maximum width in characters, adding
/// ellipsis if needed.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width <= 3 {
        s.chars().take(max_width).collect()
    } else {
        let head: String = s.chars().take(max_width - 3).collect();
        format!("{}...", head)
    }
}

/// Format tags as a comma-separated string.
fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        "-".to_string()
    } else {
        tags.join(", ")
    }
}

/// Score column text; completed tasks show `-` instead of the sentinel.
fn format_score(task: &Task) -> String {
    if task.completed {
        "-".to_string()
    } else {
        format!("{:.2}", task.sort_score)
    }
}

/// Deadline column text, with `!` appended for overdue open tasks.
fn format_deadline(task: &Task, now: DateTime<Utc>) -> String {
    let deadline = task.deadline.format(DEADLINE_FORMAT).to_string();
    if task.is_overdue(now) {
        format!("{}!", deadline)
    } else {
        deadline
    }
}

/// Format tasks into an aligned table string.
///
/// Produces output in the format:
/// ```text
/// ID      Priority  Category  Deadline           Score  Title          Tags   Done
/// ------  --------  --------  -----------------  -----  -------------  -----  ----
/// a1b2c3  high      finance   2025-10-01 08:00!  7.40   Pay rent       bills
/// ```
///
/// A trailing `!` on the deadline marks an overdue task.
pub fn format_task_table(tasks: &[Task], now: DateTime<Utc>) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let headers = [
        "ID", "Priority", "Category", "Deadline", "Score", "Title", "Tags", "Done",
    ];

    let rows: Vec<[String; 8]> = tasks
        .iter()
        .map(|task| {
            [
                task.id.clone(),
                task.priority.to_string(),
                task.category.to_string(),
                format_deadline(task, now),
                format_score(task),
                truncate(&task.title, MAX_TITLE_WIDTH),
                truncate(&format_tags(&task.tags), MAX_TAGS_WIDTH),
                if task.completed { "[x]" } else { "" }.to_string(),
            ]
        })
        .collect();

    // Calculate column widths based on content
    let mut widths = headers.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(headers.iter().copied(), &widths));
    lines.push(format_row(widths.iter().map(|w| "-".repeat(*w)), &widths));
    for row in &rows {
        lines.push(format_row(row.iter().map(String::as_str), &widths));
    }

    lines.join("\n")
}

fn format_row<I, S>(cells: I, widths: &[usize]) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    cells
        .into_iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Format a single task with its score breakdown.
pub fn format_task_detail(task: &Task, breakdown: &ScoreBreakdown, now: DateTime<Utc>) -> String {
    let mut lines = vec![
        format!("ID:          {}", task.id),
        format!("Title:       {}", task.title),
    ];
    if !task.description.is_empty() {
        lines.push(format!("Description: {}", task.description));
    }
    lines.push(format!("Priority:    {}", task.priority));
    lines.push(format!("Category:    {}", task.category));
    lines.push(format!("Tags:        {}", format_tags(&task.tags)));
    lines.push(format!("Deadline:    {}", format_deadline(task, now)));
    lines.push(format!(
        "Created:     {}",
        task.created_at.format(DEADLINE_FORMAT)
    ));
    lines.push(format!(
        "Status:      {}",
        if task.completed { "completed" } else { "active" }
    ));

    if task.completed {
        lines.push(format!("Score:       {:.4} (completed)", breakdown.total));
    } else {
        lines.push(format!("Score:       {:.4}", breakdown.total));
        lines.push(format!("  priority   {:.4}", breakdown.priority));
        lines.push(format!("  deadline   {:.4}", breakdown.deadline));
        lines.push(format!("  age        {:.4}", breakdown.age));
    }

    lines.join("\n")
}

/// Format collection counts.
pub fn format_summary(summary: &TaskSummary) -> String {
    let mut lines = vec![
        format!("Total:      {}", summary.total),
        format!("Active:     {}", summary.active),
        format!(
            "Completed:  {} ({}%)",
            summary.completed, summary.percentage
        ),
        format!("Overdue:    {}", summary.overdue),
        format!("Due soon:   {}", summary.due_soon),
    ];

    if !summary.by_category.is_empty() {
        lines.push("By category:".to_string());
        for (category, count) in &summary.by_category {
            lines.push(format!("  {:<10} {}", category.as_str(), count));
        }
    }

    lines.join("\n")
}
