use crate::commands::Context;
use crate::error::CliError;
use addrbook_core::{CoreError, Name, PhoneNumber, Record};
use anyhow::Result;

const EMPTY_BOOK: &str = "Address book is empty";

pub fn add_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let phone = PhoneNumber::new(args[1])?;
    if ctx.book.contains(&name) {
        return Err(CoreError::DuplicateContact(name.to_string()).into());
    }
    ctx.book.add_record(Record::with_phone(name, phone));
    Ok("Contact added successfully".to_string())
}

pub fn show_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let record = ctx.book.require(&name)?;
    Ok(record.to_string())
}

pub fn show_all(ctx: &mut Context<'_>, _args: &[&str]) -> Result<String> {
    if ctx.book.is_empty() {
        return Ok(EMPTY_BOOK.to_string());
    }
    let lines: Vec<String> = ctx.book.records().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

pub fn show_book(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let page_size = match args.first() {
        Some(raw) => parse_page_size(raw)?,
        None => ctx.page_size,
    };
    if ctx.book.is_empty() {
        return Ok(EMPTY_BOOK.to_string());
    }
    let rendered: String = ctx.book.paginate(page_size).collect();
    Ok(rendered.trim_end_matches('\n').to_string())
}

pub fn delete_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    ctx.book.delete_record(&name)?;
    Ok("Contact deleted successfully".to_string())
}

pub fn rename_contact(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let old = Name::new(args[0])?;
    let new = Name::new(args[1])?;
    ctx.book.rename_record(&old, new)?;
    Ok("Contact renamed successfully".to_string())
}

pub fn find_contacts(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let found = ctx.book.find(args[0]);
    if found.is_empty() {
        return Ok("No contacts found".to_string());
    }
    let lines: Vec<String> = found.iter().map(ToString::to_string).collect();
    Ok(lines.join("\n"))
}

fn parse_page_size(raw: &str) -> Result<usize, CliError> {
    match raw.parse::<usize>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(CliError::InvalidPageSize(raw.to_string())),
    }
}
