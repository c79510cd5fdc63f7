//! Line-oriented rendering surface.

use log::{debug, warn};
use std::io::Write;
use std::rc::Rc;
use taskpad_core::{IntentHandlers, RenderSurface, Task, EMPTY_PLACEHOLDER};

/// Writes the full list to `out` on every render.
pub struct TerminalSurface<W: Write> {
    out: W,
    handlers: Option<Rc<IntentHandlers>>,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            handlers: None,
        }
    }

    /// Writes a message outside of the task list (help, errors).
    pub fn message(&mut self, text: &str) {
        if let Err(err) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            warn!("event=terminal_write module=cli status=error error={err}");
        }
    }
}

pub fn format_task(task: &Task) -> String {
    if task.complete {
        format!("{}. [x] ~~{}~~", task.id, task.text)
    } else {
        format!("{}. [ ] {}", task.id, task.text)
    }
}

impl<W: Write> RenderSurface for TerminalSurface<W> {
    fn render(&mut self, tasks: &[Task]) {
        debug!("event=render module=cli status=ok tasks={tasks:?}");

        let mut frame = String::new();
        if tasks.is_empty() {
            frame.push_str(EMPTY_PLACEHOLDER);
            frame.push('\n');
        }
        for task in tasks {
            frame.push_str(&format_task(task));
            frame.push('\n');
        }
        if let Err(err) = self
            .out
            .write_all(frame.as_bytes())
            .and_then(|()| self.out.flush())
        {
            warn!("event=render module=cli status=error error={err}");
        }
    }

    fn bind_intents(&mut self, handlers: Rc<IntentHandlers>) {
        self.handlers = Some(handlers);
    }

    fn intent_handlers(&self) -> Option<Rc<IntentHandlers>> {
        self.handlers.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{format_task, TerminalSurface};
    use taskpad_core::{RenderSurface, Task};

    #[test]
    fn renders_open_and_complete_tasks() {
        let mut surface = TerminalSurface::new(Vec::new());
        let done = Task {
            complete: true,
            ..Task::new(2, "Code four hours today")
        };

        surface.render(&[Task::new(1, "Buy groceries"), done]);

        assert_eq!(
            String::from_utf8(surface.out).unwrap(),
            "1. [ ] Buy groceries\n2. [x] ~~Code four hours today~~\n"
        );
    }

    #[test]
    fn ids_are_not_padded() {
        assert_eq!(format_task(&Task::new(12, "Play tennis")), "12. [ ] Play tennis");
    }

    #[test]
    fn renders_placeholder_for_empty_list() {
        let mut surface = TerminalSurface::new(Vec::new());
        surface.render(&[]);
        assert_eq!(
            String::from_utf8(surface.out).unwrap(),
            "No tasks yet! Add one?\n"
        );
    }
}
