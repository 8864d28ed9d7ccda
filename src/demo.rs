//! Demonstration reports
//!
//! Each demonstration builds a [`DemoReport`] instead of printing directly,
//! so the same output can be rendered as text, serialized as JSON, or
//! asserted against in tests. Printing is presentation, not contract; the
//! behavior shown here is locked down by the unit and integration tests.

use serde::Serialize;

use crate::boxing::{box_value, unbox_value};
use crate::domain::entities::{Task, TaskHandle};
use crate::domain::value_objects::Priority;
use crate::error::TaskModelResult;
use crate::passing;
use crate::samples::sample_tasks;

/// Output of one demonstration: a heading plus narrated lines
#[derive(Debug, Serialize)]
pub struct DemoReport {
    /// Section heading
    pub title: String,
    /// Narrated output lines, in order
    pub lines: Vec<String>,
}

impl DemoReport {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            lines: Vec::new(),
        }
    }

    fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Render as plain text
    pub fn render(&self) -> String {
        let mut out = format!("=== {} ===\n", self.title);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> TaskModelResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Value semantics: copies are independent
pub fn value_semantics() -> DemoReport {
    let mut report = DemoReport::new("Value semantics");

    let original = 1;
    let mut copied = original;
    report.line(format!("copy starts equal: {copied}"));
    copied = 5;
    report.line(format!("original integer: {original}"));
    report.line(format!("mutated copy: {copied}"));

    let priority = Priority::high();
    let copy = priority.clone();
    report.line(format!("priority: {priority}"));
    report.line(format!("cloned priority: {copy}"));
    report.line("replacing one copy never touches the other".to_string());

    report
}

/// Reference semantics: cloned handles alias the same record
pub fn reference_semantics() -> DemoReport {
    let mut report = DemoReport::new("Reference semantics");

    let task = TaskHandle::new(
        Task::new(1)
            .with_title("Implement authentication")
            .with_priority(Priority::high()),
    );
    let alias = task.clone();
    alias.set_title("Implement authorization");

    report.line(format!("first handle:  {task}"));
    report.line(format!("second handle: {alias}"));
    report.line(format!(
        "handles share one record: {}",
        task.same_record(&alias)
    ));

    let mut detached = task.detach();
    detached.set_title("Detached copy");
    report.line(format!("after detach+rename, handle still reads: {task}"));

    report
}

/// Parameter passing: by value, by mutable borrow, and the handle pitfall
pub fn passing_modes() -> DemoReport {
    let mut report = DemoReport::new("Passing modes");

    let number = 50;
    let returned = passing::overwrite_copy(number);
    report.line(format!(
        "by value: caller still holds {number}, callee copy became {returned}"
    ));

    let mut number = 50;
    passing::overwrite_in_place(&mut number);
    report.line(format!("by mutable borrow: caller now holds {number}"));

    let task = TaskHandle::new(Task::new(1).with_title("Original"));
    passing::rename(task.clone(), "Modified");
    report.line(format!(
        "handle by value: caller observes title '{}'",
        task.title().unwrap_or_default()
    ));

    let priority = Priority::medium();
    report.line(format!(
        "shared borrow: {} (no copy, no mutation possible)",
        passing::describe(&priority)
    ));

    report
}

/// Loops: indexed and sequential traversal visit the same order
pub fn loops() -> DemoReport {
    let mut report = DemoReport::new("Loops");
    let tasks = sample_tasks();

    report.line("indexed traversal:".to_string());
    for (position, task) in tasks.indexed() {
        report.line(format!(
            "  index {position}: {}",
            task.title().unwrap_or_default()
        ));
    }

    report.line("sequential traversal:".to_string());
    for task in &tasks {
        report.line(format!(
            "  {} - {}",
            task.title().unwrap_or_default(),
            task.status()
        ));
    }

    report
}

/// Boxing: heap-allocate a value behind `dyn Any`, then downcast it back
pub fn boxing() -> TaskModelResult<DemoReport> {
    let mut report = DemoReport::new("Boxing");

    let boxed = box_value(42i32);
    let unboxed: i32 = unbox_value(boxed)?;
    report.line(format!("boxed 42, unboxed back: {unboxed}"));

    let wrong = unbox_value::<String>(box_value(42i32));
    match wrong {
        Ok(_) => report.line("unexpected: mismatched unbox succeeded".to_string()),
        Err(err) => report.line(format!("mismatched unbox rejected: {err}")),
    }

    Ok(report)
}

/// Run every demonstration in presentation order
pub fn all() -> TaskModelResult<Vec<DemoReport>> {
    Ok(vec![
        value_semantics(),
        reference_semantics(),
        passing_modes(),
        loops(),
        boxing()?,
    ])
}
