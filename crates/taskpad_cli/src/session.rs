//! Interactive read-dispatch loop.

use crate::command::{parse_command, Command, HELP};
use crate::terminal::TerminalSurface;
use log::info;
use std::io::{self, BufRead, Write};
use taskpad_core::{Coordinator, KeyValueStore, TaskStore};

/// Runs commands from `input` until it ends or `quit` is read.
pub fn run_session<S, I, W>(kv: S, input: I, out: W) -> io::Result<()>
where
    S: KeyValueStore + 'static,
    I: BufRead,
    W: Write + 'static,
{
    let app = Coordinator::new(TaskStore::load(kv), TerminalSurface::new(out));
    info!(
        "event=session_start module=cli status=ok source={:?}",
        app.store().borrow().load_source()
    );

    for line in input.lines() {
        match parse_command(&line?) {
            Ok(Command::Intent(intent)) => {
                app.raise(intent);
            }
            Ok(Command::List) => app.refresh(),
            Ok(Command::Help) => app.surface().borrow_mut().message(HELP),
            Ok(Command::Quit) => break,
            Ok(Command::Nothing) => {}
            Err(err) => app.surface().borrow_mut().message(&format!("error: {err}")),
        }
    }

    info!("event=session_end module=cli status=ok");
    Ok(())
}
