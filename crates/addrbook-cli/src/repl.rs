use crate::dispatch::{BookSink, Dispatcher, Outcome};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

const PROMPT: &str = ">>> ";

pub fn welcome_banner() -> String {
    let rule = "═".repeat(40);
    format!(
        "{rule}\n hello                 -> list commands\n exit, close, good bye -> save and exit\n{rule}"
    )
}

/// Feeds `input` line by line to the dispatcher until an exit token or EOF.
pub fn run<S, R, W, F>(
    dispatcher: &mut Dispatcher<S>,
    mut input: R,
    mut output: W,
    today: F,
) -> io::Result<()>
where
    S: BookSink,
    R: BufRead,
    W: Write,
    F: Fn() -> NaiveDate,
{
    writeln!(output, "{}", welcome_banner())?;
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match dispatcher.handle(&line, today()) {
            Outcome::Reply(reply) => writeln!(output, "{reply}")?,
            Outcome::Exit(farewell) => {
                writeln!(output, "{farewell}")?;
                break;
            }
        }
    }
    output.flush()
}
