//! Interactive menu over a store: search, duplicates, list, refresh.
//!
//! Reads line-by-line from any `BufRead` and writes to any `Write`, so a
//! session can be scripted. End of input leaves whatever prompt is open and
//! then exits the menu.

use rolodex_core::paginate::Page;
use rolodex_core::search::{duplicate_emails, search_by_field};
use rolodex_core::{LoadOutcome, Record, StoreHandle};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use crate::render::page_table;

pub struct Browser<R, W> {
    store: Arc<StoreHandle>,
    input: R,
    out: W,
    per_page: usize,
}

impl<R: BufRead, W: Write> Browser<R, W> {
    pub fn new(store: Arc<StoreHandle>, input: R, out: W, per_page: usize) -> Self {
        Self {
            store,
            input,
            out,
            per_page: per_page.max(1),
        }
    }

    pub fn into_output(self) -> W {
        self.out
    }

    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                writeln!(self.out)?;
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.handle_search()?,
                "2" => self.handle_duplicates()?,
                "3" => self.handle_list_all()?,
                "4" => self.handle_refresh()?,
                "5" => return Ok(()),
                _ => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n== Rolodex ==")?;
        writeln!(self.out, "1. Search clients by field")?;
        writeln!(self.out, "2. Find duplicate emails")?;
        writeln!(self.out, "3. List all clients")?;
        writeln!(self.out, "4. Refresh client data")?;
        writeln!(self.out, "5. Exit")?;
        self.prompt("> ")
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)?;
        self.out.flush()
    }

    /// Next trimmed input line, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn handle_search(&mut self) -> io::Result<()> {
        let store = self.store.snapshot();
        let Some(field) = self.prompt_field_selection(store.field_names())? else {
            return Ok(());
        };
        self.prompt(&format!("Enter search query for '{}': ", field))?;
        let Some(query) = self.read_line()? else {
            return Ok(());
        };
        let hits = search_by_field(&store, &field, &query);
        self.paginate(&hits)
    }

    fn handle_duplicates(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nDuplicate Emails:")?;
        let store = self.store.snapshot();
        let dups = duplicate_emails(&store);
        self.paginate(&dups)
    }

    fn handle_list_all(&mut self) -> io::Result<()> {
        writeln!(self.out, "\nAll Clients:")?;
        let store = self.store.snapshot();
        let all: Vec<&Record> = store.records().iter().collect();
        self.paginate(&all)
    }

    fn handle_refresh(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "\nRefreshing client data from {}...",
            self.store.source().display()
        )?;
        let refresh = self.store.refresh();
        let store = &refresh.current;
        match &refresh.outcome {
            LoadOutcome::Ok => writeln!(
                self.out,
                "Loaded {} clients ({} fields), fingerprint {}",
                store.len(),
                store.field_names().len(),
                store
                    .fingerprint_hex()
                    .map(|h| h[..12].to_string())
                    .unwrap_or_default()
            )?,
            LoadOutcome::NotFound => {
                writeln!(self.out, "File not found: {}", self.store.source().display())?
            }
            LoadOutcome::Malformed(detail) => {
                writeln!(self.out, "Failed to load clients: {}", detail)?
            }
            LoadOutcome::Unreadable(detail) => {
                writeln!(self.out, "Failed to read clients file: {}", detail)?
            }
        }
        writeln!(self.out, "Done!")
    }

    /// Lists fields numbered from 1 and reads a choice.
    fn prompt_field_selection(&mut self, fields: &[String]) -> io::Result<Option<String>> {
        if fields.is_empty() {
            writeln!(self.out, "\nNo fields available. Try refreshing the client data.")?;
            return Ok(None);
        }

        writeln!(self.out, "\nFields available for search:")?;
        for (i, field) in fields.iter().enumerate() {
            writeln!(self.out, "  {}. {}", i + 1, field)?;
        }
        self.prompt("\nSelect a field by number: ")?;

        let Some(input) = self.read_line()? else {
            return Ok(None);
        };
        match input.parse::<usize>() {
            Ok(n) if (1..=fields.len()).contains(&n) => Ok(Some(fields[n - 1].clone())),
            _ => {
                writeln!(
                    self.out,
                    "Invalid field selection. Please enter a number between 1 and {}.",
                    fields.len()
                )?;
                Ok(None)
            }
        }
    }

    fn paginate(&mut self, results: &[&Record]) -> io::Result<()> {
        if results.is_empty() {
            writeln!(self.out, "\nNo results found.")?;
            return Ok(());
        }

        let mut index = 0;
        loop {
            let page = Page::new(results, index, self.per_page);
            self.print_page(&page)?;

            let Some(input) = self.read_line()? else {
                return Ok(());
            };
            match input.to_lowercase().as_str() {
                "n" => {
                    if page.has_next() {
                        index += 1;
                    }
                }
                "p" => {
                    if page.has_previous() {
                        index -= 1;
                    }
                }
                "q" => return Ok(()),
                _ => writeln!(self.out, "Invalid input.")?,
            }
        }
    }

    fn print_page(&mut self, page: &Page<'_, &Record>) -> io::Result<()> {
        writeln!(self.out, "--- Page {} of {} ---", page.index + 1, page.total_pages)?;
        writeln!(self.out, "{}", page_table(page))?;
        writeln!(self.out, "\n(n)ext, (p)revious, (q)uit")?;
        self.prompt("> ")
    }
}
