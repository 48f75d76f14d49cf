use crate::commands::Context;
use addrbook_core::{CoreError, Name, PhoneNumber};
use anyhow::Result;

pub fn add_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let phone = PhoneNumber::new(args[1])?;
    let record = ctx.book.require_mut(&name)?;
    if record.has_phone(&phone) {
        return Err(CoreError::DuplicatePhone(phone.to_string()).into());
    }
    record.add_phone(phone);
    Ok("Phone added successfully".to_string())
}

pub fn change_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let old = PhoneNumber::new(args[1])?;
    let new = PhoneNumber::new(args[2])?;
    let record = ctx.book.require_mut(&name)?;
    if old != new && record.has_phone(&new) {
        return Err(CoreError::DuplicatePhone(new.to_string()).into());
    }
    if !record.change_phone(&old, new) {
        return Err(CoreError::PhoneNotFound(old.to_string()).into());
    }
    Ok("Phone changed successfully".to_string())
}

pub fn delete_phone(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let phone = PhoneNumber::new(args[1])?;
    ctx.book.require_mut(&name)?.delete_phone(&phone)?;
    Ok("Phone deleted successfully".to_string())
}
