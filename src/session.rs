// 🧭 Console Session - Login + menu loop over a Catalog
//
// All reading and writing happens here; the catalog core never touches I/O.
// Generic over the input and output streams so whole sessions can be scripted.

use crate::catalog::{Catalog, UpdateField};
use crate::compare::{compare_price, PriceComparison};
use crate::config::SessionConfig;
use crate::entry::Entry;
use crate::error::CatalogError;
use anyhow::{Context, Result};
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MENU: &str = "\n---------- Welcome to Library Management System ----------\n\
1. Add Book/EBook\n\
2. Display All Books\n\
3. Search Book\n\
4. Compare Book Prices\n\
5. Update Book Details\n\
6. Delete Book\n\
7. Exit\n";

// ============================================================================
// MENU CHOICES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    DisplayAll,
    Search,
    Compare,
    Update,
    Delete,
    Exit,
}

impl MenuChoice {
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(MenuChoice::Add),
            2 => Some(MenuChoice::DisplayAll),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::Compare),
            5 => Some(MenuChoice::Update),
            6 => Some(MenuChoice::Delete),
            7 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Credentials rejected, catalog never opened
    AccessDenied,

    /// Operator chose Exit
    Exited,

    /// Input stream ended before Exit
    InputClosed,
}

/// Operator-facing text for a catalog failure
pub fn describe_error(err: &CatalogError) -> String {
    match err {
        CatalogError::CatalogFull { .. } => "Library is Full.".to_string(),
        CatalogError::NotFound { .. } => "Book not found!".to_string(),
        CatalogError::InvalidField(_) => "Invalid choice!".to_string(),
        CatalogError::InvalidValue { field, value } => {
            format!("Invalid {}: '{}' (must be a non-negative number)", field, value)
        }
        CatalogError::ZeroCapacity => "Library capacity must be greater than zero.".to_string(),
    }
}

// ============================================================================
// SESSION
// ============================================================================

pub struct Session<R, W> {
    config: SessionConfig,
    input: R,
    output: W,

    /// Render "Display All Books" as JSON
    json_listing: bool,

    /// Set once the input stream hits EOF
    closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(config: SessionConfig, input: R, output: W) -> Self {
        Session {
            config,
            input,
            output,
            json_listing: false,
            closed: false,
        }
    }

    /// Builder pattern: list entries as JSON
    pub fn with_json_listing(mut self, enabled: bool) -> Self {
        self.json_listing = enabled;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Authenticate, open the catalog, and serve the menu until Exit or EOF
    pub fn run(&mut self) -> Result<SessionOutcome> {
        if !self.login()? {
            return Ok(if self.closed {
                SessionOutcome::InputClosed
            } else {
                SessionOutcome::AccessDenied
            });
        }

        let capacity = match self.config.capacity {
            Some(capacity) => capacity,
            None => {
                let answer = self.prompt_parsed("Enter library capacity: ", |n: &usize| {
                    if *n == 0 {
                        Err("Capacity must be greater than zero!")
                    } else {
                        Ok(())
                    }
                })?;
                match answer {
                    Some(capacity) => capacity,
                    None => return Ok(self.abandoned()),
                }
            }
        };

        let mut catalog = Catalog::new(capacity)?;
        tracing::info!(capacity, "catalog opened");

        let outcome = self.menu_loop(&mut catalog)?;

        writeln!(self.output, "\n----- Exiting Library System... -----")?;
        tracing::info!(remaining = catalog.len(), ?outcome, "session ended");

        Ok(outcome)
    }

    fn abandoned(&self) -> SessionOutcome {
        if self.closed {
            SessionOutcome::InputClosed
        } else {
            SessionOutcome::Exited
        }
    }

    fn login(&mut self) -> Result<bool> {
        let attempts = self.config.login_attempts.max(1);

        for attempt in 1..=attempts {
            let Some(username) = self.prompt("Enter username: ")? else {
                return Ok(false);
            };
            let Some(password) = self.prompt("Enter password: ")? else {
                return Ok(false);
            };

            if self.config.credentials.verify(&username, &password) {
                tracing::info!(username = %username, "admin logged in");
                return Ok(true);
            }

            tracing::warn!(username = %username, attempt, "login rejected");
            if attempt < attempts {
                writeln!(self.output, "Invalid credentials, try again.")?;
            }
        }

        writeln!(self.output, "Access denied!")?;
        Ok(false)
    }

    fn menu_loop(&mut self, catalog: &mut Catalog) -> Result<SessionOutcome> {
        loop {
            write!(self.output, "{}", MENU)?;

            let Some(raw) = self.prompt("Enter Your Choice: ")? else {
                return Ok(SessionOutcome::InputClosed);
            };

            let choice = raw.parse::<u32>().ok().and_then(MenuChoice::from_number);

            match choice {
                Some(MenuChoice::Add) => self.add_entry(catalog)?,
                Some(MenuChoice::DisplayAll) => self.display_all(catalog)?,
                Some(MenuChoice::Search) => self.search(catalog)?,
                Some(MenuChoice::Compare) => self.compare(catalog)?,
                Some(MenuChoice::Update) => self.update(catalog)?,
                Some(MenuChoice::Delete) => self.delete(catalog)?,
                Some(MenuChoice::Exit) => return Ok(SessionOutcome::Exited),
                None => writeln!(self.output, "Invalid choice!")?,
            }

            if self.closed {
                return Ok(SessionOutcome::InputClosed);
            }
        }
    }

    // ========================================================================
    // MENU ACTIONS
    // ========================================================================

    fn add_entry(&mut self, catalog: &mut Catalog) -> Result<()> {
        if catalog.is_full() {
            return self.say("\nLibrary is Full.");
        }

        let Some(electronic) = self.choose_kind()? else {
            return Ok(());
        };
        let label = if electronic { "EBook" } else { "Book" };

        let Some(title) = self.prompt_text(&format!("Enter Title of {}: ", label))? else {
            return Ok(());
        };
        let Some(author) = self.prompt_text(&format!("Enter Author of {}: ", label))? else {
            return Ok(());
        };
        let Some(price) = self.prompt_non_negative(
            &format!("Enter Price of {}: ", label),
            "Price can't be negative!",
        )?
        else {
            return Ok(());
        };

        let result = if electronic {
            let Some(file_size) =
                self.prompt_non_negative("Enter FileSize of Ebook: ", "File Size can't be negative!")?
            else {
                return Ok(());
            };
            catalog.add_electronic(title, author, price, file_size)
        } else {
            catalog.add_physical(title, author, price)
        };

        match result {
            Ok(()) => self.say(format!("{} added successfully.", label)),
            Err(err) => self.say(describe_error(&err)),
        }
    }

    /// Bounded retry over the Book / EBook prompt; `Some(true)` means EBook
    fn choose_kind(&mut self) -> Result<Option<bool>> {
        for _ in 0..=self.config.max_retries {
            let Some(raw) = self.prompt("\n1. Book\n2. EBook\nEnter Your Choice: ")? else {
                return Ok(None);
            };

            match raw.as_str() {
                "1" => return Ok(Some(false)),
                "2" => return Ok(Some(true)),
                _ => self.say("Invalid Choice! Try again.")?,
            }
        }

        self.say("Too many invalid attempts.")?;
        Ok(None)
    }

    fn display_all(&mut self, catalog: &Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.say("\nLibrary is empty!");
        }

        if self.json_listing {
            let entries: Vec<&Entry> = catalog.list_all().collect();
            let json =
                serde_json::to_string_pretty(&entries).context("Failed to render catalog as JSON")?;
            return self.say(json);
        }

        writeln!(self.output, "\nAll Book Details:-")?;
        for entry in catalog {
            writeln!(self.output, "{}", entry)?;
        }
        Ok(())
    }

    fn search(&mut self, catalog: &Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.say("\nNo Books to display!");
        }

        let Some((title, author)) = self.prompt_key("Enter Book Name: ", "Enter Book Author: ")?
        else {
            return Ok(());
        };

        match catalog.find(&title, &author) {
            Some(entry) => self.say(entry),
            None => self.say(format!("Book {} not found!", title)),
        }
    }

    fn compare(&mut self, catalog: &Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.say("\nNo Books to display!");
        }

        let Some((title1, author1)) =
            self.prompt_key("Enter First Book Name: ", "Enter First Book Author: ")?
        else {
            return Ok(());
        };
        let Some(first) = catalog.find(&title1, &author1) else {
            return self.say("This book is not available in our Library");
        };

        let Some((title2, author2)) =
            self.prompt_key("Enter Second Book Name: ", "Enter Second Book Author: ")?
        else {
            return Ok(());
        };
        let Some(second) = catalog.find(&title2, &author2) else {
            return self.say("This book is not available in our Library");
        };

        match compare_price(first, second) {
            PriceComparison::AGreater => self.say(format!("{} is more expensive.", first.title())),
            PriceComparison::BGreater => self.say(format!("{} is more expensive.", second.title())),
            PriceComparison::Equal => self.say("Both have same price."),
        }
    }

    fn update(&mut self, catalog: &mut Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.say("\nNo Books to update!");
        }

        let Some((title, author)) = self.prompt_key("Enter Book Title: ", "Enter Author: ")? else {
            return Ok(());
        };

        if catalog.find(&title, &author).is_none() {
            return self.say(describe_error(&CatalogError::not_found(&title, &author)));
        }

        let Some(selector) = self.prompt(
            "\nWhat do you want to update?\n1. Title\n2. Author\n3. Price\nEnter choice: ",
        )?
        else {
            return Ok(());
        };

        let field = match selector.parse::<UpdateField>() {
            Ok(field) => field,
            Err(err) => return self.say(describe_error(&err)),
        };

        let message = format!("Enter new {}: ", field.name());
        let value = match field {
            UpdateField::Price => self.prompt(&message)?,
            UpdateField::Title | UpdateField::Author => self.prompt_text(&message)?,
        };
        let Some(value) = value else {
            return Ok(());
        };

        match catalog.update(&title, &author, field.name(), &value) {
            Ok(()) => self.say("\nBook details updated successfully!"),
            Err(err) => self.say(describe_error(&err)),
        }
    }

    fn delete(&mut self, catalog: &mut Catalog) -> Result<()> {
        if catalog.is_empty() {
            return self.say("\nNo Books to delete!");
        }

        let Some((title, author)) = self.prompt_key("Enter Book Title: ", "Enter Book Author: ")?
        else {
            return Ok(());
        };

        match catalog.delete(&title, &author) {
            Ok(removed) => {
                self.say(format!("Deleting book: {}", removed))?;
                self.say("Book deleted successfully.")
            }
            Err(err) => self.say(describe_error(&err)),
        }
    }

    // ========================================================================
    // PROMPTING
    // ========================================================================

    fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    /// Print `message` and read one trimmed line; `None` at end of input
    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        Ok(self.prompt_text(message)?.map(|line| line.trim().to_string()))
    }

    /// Free text (titles, authors): only the line terminator is stripped
    fn prompt_text(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read operator input")?;

        if read == 0 {
            self.closed = true;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt_key(&mut self, title_prompt: &str, author_prompt: &str) -> Result<Option<(String, String)>> {
        let Some(title) = self.prompt_text(title_prompt)? else {
            return Ok(None);
        };
        let Some(author) = self.prompt_text(author_prompt)? else {
            return Ok(None);
        };
        Ok(Some((title, author)))
    }

    /// Read a value, re-prompting at most `max_retries` times on bad input
    fn prompt_parsed<T, F>(&mut self, message: &str, accept: F) -> Result<Option<T>>
    where
        T: FromStr,
        F: Fn(&T) -> Result<(), &'static str>,
    {
        for _ in 0..=self.config.max_retries {
            let Some(raw) = self.prompt(message)? else {
                return Ok(None);
            };

            match raw.parse::<T>() {
                Ok(value) => match accept(&value) {
                    Ok(()) => return Ok(Some(value)),
                    Err(reason) => self.say(reason)?,
                },
                Err(_) => self.say("Please enter a valid number.")?,
            }
        }

        self.say("Too many invalid attempts.")?;
        Ok(None)
    }

    fn prompt_non_negative(&mut self, message: &str, negative: &'static str) -> Result<Option<f64>> {
        self.prompt_parsed(message, |value: &f64| {
            if !value.is_finite() {
                Err("Please enter a valid number.")
            } else if *value < 0.0 {
                Err(negative)
            } else {
                Ok(())
            }
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
