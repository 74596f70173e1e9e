//! Interactive console session.
//!
//! A session owns the address book for its whole lifetime: it is loaded
//! from the repository when the session opens and saved back when the
//! loop ends, whether by `exit`/`close` or end of input.

use crate::commands::{dispatch, parse_input, render_error, Outcome};
use crate::error::SessionResult;
use crate::models::AddressBook;
use crate::repositories::BookRepository;
use crate::services::Clock;
use std::borrow::Cow;
use std::io::{BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";

/// A console session over one address book.
pub struct Session<R: BookRepository> {
    repository: R,
    book: AddressBook,
}

impl<R: BookRepository> Session<R> {
    /// Open a session, loading the book from `repository`.
    pub fn open(repository: R) -> SessionResult<Self> {
        let book = repository.load()?;
        Ok(Self { repository, book })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Read commands from `input` until exit or end of input, writing replies to `output`.
    ///
    /// The book is saved before returning, even when console I/O fails
    /// part way through. Command failures are reported to the user and
    /// never end the loop.
    pub fn run<I, O, C>(&mut self, input: I, output: O, clock: &C) -> SessionResult<()>
    where
        I: BufRead,
        O: Write,
        C: Clock + ?Sized,
    {
        let served = self.serve(input, output, clock);
        if let Err(e) = &served {
            tracing::error!("Console I/O failed, saving before exit: {}", e);
        }

        let saved = self.repository.save(&self.book);
        served?;
        saved?;
        Ok(())
    }

    fn serve<I, O, C>(&mut self, mut input: I, mut output: O, clock: &C) -> SessionResult<()>
    where
        I: BufRead,
        O: Write,
        C: Clock + ?Sized,
    {
        writeln!(output, "{}", WELCOME)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::info!("End of input, closing session");
                writeln!(output)?;
                return Ok(());
            }

            // Bytes that are not UTF-8 become U+FFFD rather than ending the session.
            let line = String::from_utf8_lossy(&buf);
            if matches!(line, Cow::Owned(_)) {
                tracing::warn!("Input line was not valid UTF-8, replaced invalid bytes");
            }

            let Some((command, args)) = parse_input(&line) else {
                continue;
            };

            match dispatch(command, &args, &mut self.book, clock.today()) {
                Ok(Outcome::Continue(reply)) => writeln!(output, "{}", reply)?,
                Ok(Outcome::Exit(reply)) => {
                    writeln!(output, "{}", reply)?;
                    return Ok(());
                }
                Err(e) => {
                    tracing::warn!(
                        command = command.name(),
                        kind = ?e.kind(),
                        "Command failed: {}",
                        e
                    );
                    writeln!(output, "{}", render_error(command, &e))?;
                }
            }
        }
    }
}
