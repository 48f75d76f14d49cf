use crate::commands::Context;
use crate::error::CliError;
use addrbook_core::{BirthDate, Name};
use anyhow::Result;

pub fn set_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let birthday = BirthDate::parse(args[1])?;
    ctx.book.require_mut(&name)?.set_birthday(birthday);
    Ok("Birthday added successfully".to_string())
}

pub fn days_to_birthday(ctx: &mut Context<'_>, args: &[&str]) -> Result<String> {
    let name = Name::new(args[0])?;
    let record = ctx.book.require(&name)?;
    let days = record
        .days_to_birthday(ctx.today)
        .ok_or_else(|| CliError::NoBirthday(name.to_string()))?;
    Ok(match days {
        0 => format!("Today is {}'s birthday!", name),
        1 => format!("1 day until {}'s birthday", name),
        _ => format!("{} days until {}'s birthday", days, name),
    })
}

#[cfg(test)]
mod tests {
    use super::{days_to_birthday, set_birthday};
    use crate::commands::Context;
    use crate::error::CliError;
    use addrbook_core::{AddressBook, CoreError, Name, Record};
    use chrono::NaiveDate;

    fn book() -> AddressBook {
        let mut book = AddressBook::new();
        book.add_record(Record::new(Name::new("john").unwrap()));
        book
    }

    fn context(book: &mut AddressBook, year: i32, month: u32, day: u32) -> Context<'_> {
        Context {
            book,
            page_size: 5,
            today: NaiveDate::from_ymd_opt(year, month, day).expect("date"),
        }
    }

    #[test]
    fn days_counts_to_this_years_occurrence() {
        let mut book = book();
        let mut ctx = context(&mut book, 2026, 10, 18);
        set_birthday(&mut ctx, &["john", "2030-01-01"]).expect("set birthday");
        let reply = days_to_birthday(&mut ctx, &["john"]).expect("days");
        assert_eq!(reply, "75 days until John's birthday");
    }

    #[test]
    fn days_handles_today_and_tomorrow() {
        let mut book = book();
        let mut ctx = context(&mut book, 2026, 5, 17);
        set_birthday(&mut ctx, &["john", "1990-05-17"]).unwrap();
        assert_eq!(
            days_to_birthday(&mut ctx, &["john"]).unwrap(),
            "Today is John's birthday!"
        );

        let mut ctx = context(&mut book, 2026, 5, 16);
        assert_eq!(
            days_to_birthday(&mut ctx, &["john"]).unwrap(),
            "1 day until John's birthday"
        );
    }

    #[test]
    fn days_without_birthday_is_reported() {
        let mut book = book();
        let mut ctx = context(&mut book, 2026, 10, 18);
        let err = days_to_birthday(&mut ctx, &["john"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CliError>(),
            Some(&CliError::NoBirthday("John".to_string()))
        );
    }

    #[test]
    fn set_birthday_rejects_bad_format() {
        let mut book = book();
        let mut ctx = context(&mut book, 2026, 10, 18);
        let err = set_birthday(&mut ctx, &["john", "01.01.2030"]).unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoreError>(),
            Some(&CoreError::InvalidBirthday)
        );
    }
}
