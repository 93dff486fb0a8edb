// crates/cli/src/menu.rs
use crate::error::Result;
use crate::options::OutputFormat;
use crate::presentation;
use freq_tally_engine::counter::FrequencyCounter;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    ListAll,
    Histogram,
    Exit,
}

impl MenuChoice {
    /// Parse one line of console input; `None` for anything but 1-4.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().parse::<u32>().ok()? {
            1 => Some(Self::Search),
            2 => Some(Self::ListAll),
            3 => Some(Self::Histogram),
            4 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Drive the interactive menu until the user exits or input runs out.
///
/// # Errors
///
/// Only console I/O failures; an unknown choice is reported and re-prompted.
pub fn run_menu<R, W>(
    counter: &FrequencyCounter,
    format: OutputFormat,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    loop {
        presentation::print_menu(out)?;
        let Some(line) = read_line(input)? else {
            // EOF behaves like choosing Exit
            writeln!(out)?;
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::Search) => {
                presentation::print_prompt(out, "Enter item name: ")?;
                let Some(name) = read_line(input)? else {
                    writeln!(out)?;
                    break;
                };
                presentation::print_frequency(out, &name, counter.query(&name))?;
            }
            Some(MenuChoice::ListAll) => presentation::print_all(out, counter, format)?,
            Some(MenuChoice::Histogram) => presentation::print_histogram(out, counter)?,
            Some(MenuChoice::Exit) => break,
            None => {
                log::debug!("rejected menu input {:?}", line.trim());
                writeln!(out, "{}", presentation::INVALID_CHOICE)?;
            }
        }
    }

    writeln!(out, "{}", presentation::FAREWELL)?;
    out.flush()?;
    Ok(())
}

/// Read a full line with its terminator stripped, `None` at end of input.
///
/// Bytes that are not UTF-8 are replaced, so a garbled selection is just an
/// invalid choice rather than a console failure.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    if input.read_until(b'\n', &mut buf)? == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
}
