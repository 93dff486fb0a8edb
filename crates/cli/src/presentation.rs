// crates/cli/src/presentation.rs
use crate::error::Result;
use crate::options::OutputFormat;
use freq_tally_engine::counter::FrequencyCounter;
use std::io::Write;

pub const MENU_TITLE: &str = "--- Corner Grocer Menu ---";
pub const INVALID_CHOICE: &str = "Invalid choice. Please try again.";
pub const FAREWELL: &str = "Exiting the program. Goodbye!";

pub fn print_menu<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{MENU_TITLE}")?;
    writeln!(out, "1. Search for an item")?;
    writeln!(out, "2. Display all item frequencies")?;
    writeln!(out, "3. Display histogram of item frequencies")?;
    writeln!(out, "4. Exit")?;
    print_prompt(out, "Enter your choice: ")
}

pub fn print_prompt<W: Write>(out: &mut W, prompt: &str) -> Result<()> {
    write!(out, "{prompt}")?;
    out.flush()?;
    Ok(())
}

pub fn print_frequency<W: Write>(out: &mut W, name: &str, count: u64) -> Result<()> {
    writeln!(out, "Frequency of {name}: {count}")?;
    Ok(())
}

pub fn print_all<W: Write>(out: &mut W, counter: &FrequencyCounter, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(out, counter),
        OutputFormat::Json => print_json(out, counter),
    }
}

fn print_text<W: Write>(out: &mut W, counter: &FrequencyCounter) -> Result<()> {
    writeln!(out, "Item Frequencies:")?;
    for (name, count) in counter.list_all() {
        writeln!(out, "{name} {count}")?;
    }
    Ok(())
}

fn print_json<W: Write>(out: &mut W, counter: &FrequencyCounter) -> Result<()> {
    let json = serde_json::to_string_pretty(counter.table())?;
    writeln!(out, "{json}")?;
    Ok(())
}

pub fn print_histogram<W: Write>(out: &mut W, counter: &FrequencyCounter) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "Histogram:")?;
    for row in counter.histogram() {
        writeln!(out, "{} {}", row.name, row.marks)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter() -> FrequencyCounter {
        let table = "apple banana apple apple banana cherry".split(' ').collect();
        FrequencyCounter::from_table(table, '*')
    }

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_menu_lists_four_actions() {
        let text = render(|out| print_menu(out));
        assert!(text.contains(MENU_TITLE));
        for action in ["1. ", "2. ", "3. ", "4. Exit"] {
            assert!(text.contains(action), "missing {action}");
        }
        assert!(text.ends_with("Enter your choice: "));
    }

    #[test]
    fn test_text_listing() {
        let text = render(|out| print_all(out, &counter(), OutputFormat::Text));
        assert_eq!(text, "Item Frequencies:\napple 3\nbanana 2\ncherry 1\n");
    }

    #[test]
    fn test_json_listing() {
        let text = render(|out| print_all(out, &counter(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["apple"], 3);
        assert_eq!(value["cherry"], 1);
        assert_eq!(value.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_histogram_rendering() {
        let text = render(|out| print_histogram(out, &counter()));
        assert_eq!(text, "\nHistogram:\napple ***\nbanana **\ncherry *\n");
    }

    #[test]
    fn test_frequency_line_keeps_spaces() {
        let text = render(|out| print_frequency(out, "green beans", 0));
        assert_eq!(text, "Frequency of green beans: 0\n");
    }
}
