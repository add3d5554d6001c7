use std::iter::Peekable;
use std::vec::IntoIter;

use log::debug;

use crate::cal::datetime::{LocalDate, LocalTime, LocalDateTime, Month};
use crate::cal::offset::{Offset, OffsetDateTime};
use super::{within_range, Error};


/// Parses an RFC 2822 date, such as `Tue, 26 Jan 2016 13:48:02 GMT`, or
/// the looser English layout `December 17, 1995 03:24:00`.
///
/// Month and weekday names may be written in full or abbreviated to three
/// letters, in any case. A weekday, if present, is not checked against the
/// date. A missing time means midnight, and a missing zone means UTC.
/// Parenthesised comments are skipped.
///
/// ### Examples
///
/// ```
/// use datecalc::{parse_rfc2822, DatePiece, TimePiece, Month};
///
/// let then = parse_rfc2822("Tue, 26 Jan 2016 13:48:02 GMT").unwrap();
/// assert_eq!(then.epoch_ms(), 1_453_816_082_000);
///
/// let then = parse_rfc2822("December 17, 1995 03:24:00").unwrap();
/// assert_eq!((then.year(), then.month(), then.day()), (1995, Month::December, 17));
/// assert_eq!((then.hour(), then.minute()), (3, 24));
///
/// assert!(parse_rfc2822("the day after tomorrow").is_err());
/// ```
pub fn parse_rfc2822(input: &str) -> Result<OffsetDateTime, Error> {
    tokenise(input)
        .and_then(|tokens| Rfc2822Parser { tokens: tokens.into_iter().peekable() }.parse())
        .map_err(|e| {
            debug!("Rejected RFC 2822 date {:?}: {}", input, e);
            e
        })
}


#[derive(PartialEq, Debug, Clone, Copy)]
enum Token<'a> {
    Word(&'a str),
    Number(&'a str),
    Punct(char),
}

/// Splits the input into words, runs of digits, and the punctuation the
/// grammar uses, dropping whitespace and comments.
fn tokenise(input: &str) -> Result<Vec<Token<'_>>, Error> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }
        else if c == '(' {
            let mut depth = 1;
            while depth > 0 {
                match chars.next() {
                    Some((_, '(')) => depth += 1,
                    Some((_, ')')) => depth -= 1,
                    Some(_)        => {},
                    None           => return Err(Error::Syntax("unclosed comment".into())),
                }
            }
        }
        else if c.is_ascii_alphabetic() || c.is_ascii_digit() {
            let mut end = start + c.len_utf8();
            while let Some(&(i, next)) = chars.peek() {
                if next.is_ascii_alphabetic() != c.is_ascii_alphabetic() || !next.is_ascii_alphanumeric() {
                    break;
                }
                end = i + next.len_utf8();
                let _ = chars.next();
            }

            let text = &input[start .. end];
            tokens.push(if c.is_ascii_digit() { Token::Number(text) } else { Token::Word(text) });
        }
        else if ",:+-.".contains(c) {
            tokens.push(Token::Punct(c));
        }
        else {
            return Err(Error::Syntax(format!("unexpected character {:?}", c)));
        }
    }

    Ok(tokens)
}


struct Rfc2822Parser<'a> {
    tokens: Peekable<IntoIter<Token<'a>>>,
}

impl<'a> Rfc2822Parser<'a> {

    fn parse(mut self) -> Result<OffsetDateTime, Error> {
        if let Some(Token::Word(word)) = self.tokens.peek() {
            if weekday_index(word).is_some() {
                let _ = self.tokens.next();
                let _ = self.eat(',');
            }
        }

        let (day, month) = match self.tokens.next() {
            Some(Token::Number(day)) => {
                let month = self.month()?;
                (day, month)
            },
            Some(Token::Word(word)) => {
                let month = month_named(word)?;
                let day = self.number("day")?;
                let _ = self.eat(',');
                (day, month)
            },
            other => return Err(unexpected(other, "day or month")),
        };

        let day = digits(day, 1, 2, "day")? as i8;
        let year = self.year()?;
        let date = LocalDate::ymd(year, month, day)?;

        let time = match self.tokens.peek() {
            Some(Token::Number(_)) => self.time()?,
            _                      => LocalTime::midnight(),
        };

        let offset = self.zone()?;
        if let Some(token) = self.tokens.next() {
            return Err(unexpected(Some(token), "end of date"));
        }

        within_range(offset.transform_date(LocalDateTime::new(date, time)))
    }

    /// Consumes the given punctuation if it comes next.
    fn eat(&mut self, punct: char) -> bool {
        if self.tokens.peek() == Some(&Token::Punct(punct)) {
            let _ = self.tokens.next();
            true
        }
        else {
            false
        }
    }

    fn expect(&mut self, punct: char) -> Result<(), Error> {
        if self.eat(punct) { Ok(()) }
                      else { Err(unexpected(self.tokens.peek().cloned(), "punctuation")) }
    }

    fn number(&mut self, what: &str) -> Result<&'a str, Error> {
        match self.tokens.next() {
            Some(Token::Number(n)) => Ok(n),
            other                  => Err(unexpected(other, what)),
        }
    }

    fn month(&mut self) -> Result<Month, Error> {
        match self.tokens.next() {
            Some(Token::Word(word)) => month_named(word),
            other                   => Err(unexpected(other, "month")),
        }
    }

    /// Reads a year, widening the obsolete two- and three-digit forms:
    /// 00 to 49 are 2000 to 2049, 50 to 99 are 1950 to 1999, and three
    /// digits count from 1900.
    fn year(&mut self) -> Result<i64, Error> {
        let text = self.number("year")?;
        let year = digits(text, 2, 9, "year")?;

        Ok(match text.len() {
            2 if year < 50  => year + 2000,
            2               => year + 1900,
            3               => year + 1900,
            _               => year,
        })
    }

    fn time(&mut self) -> Result<LocalTime, Error> {
        let hour = digits(self.number("hour")?, 1, 2, "hour")?;
        self.expect(':')?;
        let minute = digits(self.number("minute")?, 2, 2, "minute")?;

        let second = if self.eat(':') { digits(self.number("second")?, 2, 2, "second")? }
                                  else { 0 };

        Ok(LocalTime::hms(hour as i8, minute as i8, second as i8)?)
    }

    fn zone(&mut self) -> Result<Offset, Error> {
        let named = match self.tokens.peek() {
            Some(Token::Word(word)) => Some(zone_named(word)?),
            _                       => None,
        };

        if let Some(hours) = named {
            let _ = self.tokens.next();
            if hours != 0 {
                return Ok(Offset::of_hours_and_minutes(hours, 0)?);
            }
        }

        let negative = match self.tokens.peek() {
            Some(Token::Punct('+')) => false,
            Some(Token::Punct('-')) => true,
            _                       => return Ok(Offset::utc()),
        };
        let _ = self.tokens.next();

        let text = self.number("offset")?;
        let (hours, minutes) = if text.len() == 4 {
            (digits(&text[.. 2], 2, 2, "offset")?, digits(&text[2 ..], 2, 2, "offset")?)
        }
        else {
            let hours = digits(text, 2, 2, "offset")?;
            self.expect(':')?;
            (hours, digits(self.number("offset")?, 2, 2, "offset")?)
        };

        if hours == 0 && minutes == 0 {
            return Ok(Offset::utc());
        }

        let sign = if negative { -1 } else { 1 };
        Ok(Offset::of_hours_and_minutes(sign * hours as i8, sign * minutes as i8)?)
    }
}


/// Reads a run of digits, checking its length.
fn digits(text: &str, min: usize, max: usize, what: &str) -> Result<i64, Error> {
    if text.len() < min || text.len() > max {
        return Err(Error::Syntax(format!("{} should have {} to {} digits, not {:?}", what, min, max, text)));
    }

    text.parse().map_err(|_| Error::Syntax(format!("invalid {} {:?}", what, text)))
}

fn unexpected(token: Option<Token<'_>>, wanted: &str) -> Error {
    match token {
        Some(Token::Word(w))    => Error::Syntax(format!("expected {}, found {:?}", wanted, w)),
        Some(Token::Number(n))  => Error::Syntax(format!("expected {}, found {:?}", wanted, n)),
        Some(Token::Punct(c))   => Error::Syntax(format!("expected {}, found {:?}", wanted, c)),
        None                    => Error::Syntax(format!("expected {}, found end of input", wanted)),
    }
}

fn month_named(word: &str) -> Result<Month, Error> {
    let english = locale::Time::english();

    let index = (0 .. 12).find(|&m| word.eq_ignore_ascii_case(&english.short_month_name(m))
                                 || word.eq_ignore_ascii_case(&english.long_month_name(m)));

    match index {
        Some(m) => Ok(Month::from_zero(m as i8)?),
        None    => Err(Error::Syntax(format!("unknown month {:?}", word))),
    }
}

fn weekday_index(word: &str) -> Option<usize> {
    let english = locale::Time::english();

    (0 .. 7).find(|&d| word.eq_ignore_ascii_case(&english.short_day_name(d))
                    || word.eq_ignore_ascii_case(&english.long_day_name(d)))
}

/// The hours from UTC of the zone names RFC 2822 allows.
fn zone_named(word: &str) -> Result<i8, Error> {
    Ok(match &*word.to_ascii_uppercase() {
        "UT" | "UTC" | "GMT" | "Z"  =>  0,
        "EDT"                       => -4,
        "EST" | "CDT"               => -5,
        "CST" | "MDT"               => -6,
        "MST" | "PDT"               => -7,
        "PST"                       => -8,
        _ => return Err(Error::Syntax(format!("unknown zone {:?}", word))),
    })
}
