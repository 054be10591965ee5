//! The modal interface loop.
//!
//! # Design
//! One command at a time: each menu action runs to completion — including
//! its single blocking HTTP round-trip — before the next prompt is shown.
//! Every successful mutation funnels through `refresh`, which re-fetches the
//! whole list (refetch-after-write); failures print the mapped message and
//! leave the snapshot untouched. The loop reads from any `BufRead` and
//! writes to any `Write`, so whole sessions can be scripted in tests.

use std::io::{self, BufRead, Write};

use crm_core::selector::{self, SelectorEntry};
use crm_core::{ApiError, CreateForm, CustomerStore, DeleteControl, ListState, UpdateForm};

use crate::api::CustomerApi;
use crate::screen;
use crate::transport::Transport;

/// Resolve selector input to a customer id.
///
/// Accepts the 1-based number printed next to the option, or the option
/// label itself (`"#5 - Ann"` or a bare id). The resolved id must belong to
/// one of the listed entries; anything else means no selection.
fn resolve_selection(input: &str, entries: &[SelectorEntry]) -> Option<u64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=entries.len()).contains(&index) {
            return Some(entries[index - 1].id);
        }
    }
    let id = selector::parse_id(trimmed)?;
    entries.iter().find(|entry| entry.id == id).map(|entry| entry.id)
}

/// Interactive admin session over a customer API.
pub struct Session<T, R, W> {
    api: CustomerApi<T>,
    store: CustomerStore,
    input: R,
    output: W,
}

impl<T: Transport, R: BufRead, W: Write> Session<T, R, W> {
    pub fn new(api: CustomerApi<T>, input: R, output: W) -> Self {
        Self {
            api,
            store: CustomerStore::new(),
            input,
            output,
        }
    }

    /// Run until quit or end of input. The initial fetch failure degrades to
    /// the empty state rather than aborting.
    pub fn run(&mut self) -> io::Result<()> {
        self.refresh()?;
        self.render_list()?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", screen::menu())?;
            let Some(choice) = self.prompt("> ")? else { break };
            match choice.trim() {
                "1" | "r" => {
                    self.refresh()?;
                    self.render_list()?;
                }
                "2" | "c" => self.create()?,
                "3" | "u" => self.update()?,
                "4" | "d" => self.delete()?,
                "q" | "quit" => break,
                "" => {}
                other => writeln!(self.output, "Unknown command: {other}")?,
            }
        }
        Ok(())
    }

    /// Re-fetch the full list. On failure the previous snapshot stays
    /// displayed and the error is surfaced.
    fn refresh(&mut self) -> io::Result<()> {
        if let Err(err) = self.store.apply_fetch(self.api.list()) {
            writeln!(self.output, "Failed to fetch customers: {err}")?;
        }
        Ok(())
    }

    fn render_list(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Customers")?;
        match self.store.state() {
            ListState::Empty => writeln!(self.output, "{}", screen::empty_state()),
            ListState::Loaded => write!(self.output, "{}", screen::card_grid(self.store.customers())),
        }
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Prompt showing the current value. Enter keeps it, `-` clears it.
    fn prompt_field(&mut self, label: &str, current: &str) -> io::Result<Option<String>> {
        let Some(entered) = self.prompt(&format!("{label} [{current}]: "))? else {
            return Ok(None);
        };
        Ok(Some(match entered.as_str() {
            "" => current.to_string(),
            "-" => String::new(),
            _ => entered,
        }))
    }

    fn select_target(&mut self, entries: &[SelectorEntry]) -> io::Result<Option<u64>> {
        write!(self.output, "{}", screen::selector_list(entries))?;
        let Some(choice) = self.prompt("Select a customer: ")? else {
            return Ok(None);
        };
        match resolve_selection(&choice, entries) {
            Some(id) => Ok(Some(id)),
            None => {
                writeln!(self.output, "No customer selected.")?;
                Ok(None)
            }
        }
    }

    fn create(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Create customer")?;
        let mut form = CreateForm::with_default_id(self.store.customers());

        let Some(id) = self.prompt(&format!("ID [{}]: ", form.id))? else { return Ok(()) };
        if !id.is_empty() {
            form.id = id;
        }
        let Some(name) = self.prompt("Name: ")? else { return Ok(()) };
        form.name = name;
        let Some(email) = self.prompt("Email: ")? else { return Ok(()) };
        form.email = email;
        let Some(phone) = self.prompt("Phone: ")? else { return Ok(()) };
        form.phone = phone;
        let Some(address) = self.prompt("Address: ")? else { return Ok(()) };
        form.address = address;

        let payload = match form.payload() {
            Ok(payload) => payload,
            Err(err) => {
                writeln!(self.output, "Create failed: {err}")?;
                return Ok(());
            }
        };
        match self.api.create(&payload) {
            Ok(()) => {
                writeln!(self.output, "Customer created successfully")?;
                self.refresh()?;
                self.render_list()?;
            }
            Err(err) => writeln!(self.output, "Create failed: {err}")?,
        }
        Ok(())
    }

    fn update(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Update customer")?;
        let entries = selector::entries(self.store.customers());
        if entries.is_empty() {
            writeln!(self.output, "Select a customer to edit.")?;
            return Ok(());
        }
        let Some(id) = self.select_target(&entries)? else { return Ok(()) };
        let Some(customer) = self.store.find(id).cloned() else {
            writeln!(self.output, "No customer selected.")?;
            return Ok(());
        };

        let mut form = UpdateForm::for_customer(&customer);
        writeln!(self.output, "Press Enter to keep a value, '-' to clear it.")?;
        let Some(name) = self.prompt_field("Name", &form.name)? else { return Ok(()) };
        form.name = name;
        let Some(email) = self.prompt_field("Email", &form.email)? else { return Ok(()) };
        form.email = email;
        let Some(phone) = self.prompt_field("Phone", &form.phone)? else { return Ok(()) };
        form.phone = phone;
        let Some(address) = self.prompt_field("Address", &form.address)? else { return Ok(()) };
        form.address = address;

        let payload = match form.payload() {
            Ok(payload) => payload,
            Err(err) => {
                writeln!(self.output, "Update failed: {err}")?;
                return Ok(());
            }
        };
        match self.api.update(form.id(), &payload) {
            Ok(()) => {
                writeln!(self.output, "Customer updated successfully")?;
                self.refresh()?;
                self.render_list()?;
            }
            Err(ApiError::NotFound) => writeln!(self.output, "Customer not found")?,
            Err(err) => writeln!(self.output, "Update failed: {err}")?,
        }
        Ok(())
    }

    fn delete(&mut self) -> io::Result<()> {
        writeln!(self.output)?;
        writeln!(self.output, "Delete customer")?;
        let entries = selector::entries(self.store.customers());
        if entries.is_empty() {
            writeln!(self.output, "Select a customer to delete.")?;
            return Ok(());
        }
        let Some(id) = self.select_target(&entries)? else { return Ok(()) };

        let mut control = DeleteControl::new();
        control.select(id);
        writeln!(self.output, "This action cannot be undone.")?;
        let Some(answer) = self.prompt(&format!("Delete #{id}? [y/N]: "))? else {
            return Ok(());
        };
        if answer.trim().eq_ignore_ascii_case("y") {
            control.confirm();
        }
        let Some(id) = control.take_request() else {
            writeln!(self.output, "Delete cancelled.")?;
            return Ok(());
        };

        match self.api.delete(id) {
            Ok(()) => {
                writeln!(self.output, "Customer deleted successfully")?;
                self.refresh()?;
                self.render_list()?;
            }
            Err(ApiError::NotFound) => writeln!(self.output, "Customer not found")?,
            Err(err) => writeln!(self.output, "Delete failed: {err}")?,
        }
        Ok(())
    }
}
