use std::borrow::Cow;

use super::{Component, Property};
use crate::Error;

pub(super) fn parse(ics: &str) -> Result<Component, Error> {
    let mut stack: Vec<Component> = Vec::new();
    let mut roots: Vec<Component> = Vec::new();

    for line in ContentLines::new(ics) {
        let (name, value) = split_content_line(&line)?;

        if name.eq_ignore_ascii_case("BEGIN") {
            if value.is_empty() {
                return Err(Error::InvalidComponent("empty component name"));
            }
            stack.push(Component::new(value));
        } else if name.eq_ignore_ascii_case("END") {
            let component = match stack.pop() {
                Some(component) => component,
                None => return Err(Error::InvalidComponent("END without matching BEGIN")),
            };

            if !component.name.eq_ignore_ascii_case(value) {
                return Err(Error::InvalidComponent("mismatched END component name"));
            }

            match stack.last_mut() {
                Some(parent) => parent.components.push(component),
                None => roots.push(component),
            }
        } else {
            match stack.last_mut() {
                Some(component) => component.properties.push(Property::new(name, value)),
                None => return Err(Error::InvalidComponent("content line outside of a component")),
            }
        }
    }

    if !stack.is_empty() {
        return Err(Error::InvalidComponent("unterminated component"));
    }

    if roots.is_empty() {
        return Err(Error::InvalidComponent("no components found"));
    }

    // A VTIMEZONE is accepted both standalone and nested in a VCALENDAR
    for root in roots {
        if root.name.eq_ignore_ascii_case("VTIMEZONE") {
            return Ok(root);
        }

        let nested = root
            .components
            .into_iter()
            .find(|component| component.name.eq_ignore_ascii_case("VTIMEZONE"));

        if let Some(component) = nested {
            return Ok(component);
        }
    }

    Err(Error::MissingVTimezone)
}

/// Iterator over unfolded content lines
///
/// Folded lines are joined after stripping the leading space or horizontal
/// tab, per RFC 5545 section 3.1. Both CRLF and bare LF terminators are
/// accepted, and blank lines are skipped.
struct ContentLines<'a> {
    remaining: &'a str,
}

impl<'a> ContentLines<'a> {
    fn new(ics: &'a str) -> Self {
        Self { remaining: ics }
    }

    /// Returns the next physical line, without its terminator
    fn next_physical_line(&mut self) -> Option<&'a str> {
        if self.remaining.is_empty() {
            return None;
        }

        let (line, rest) = match self.remaining.find('\n') {
            Some(position) => (&self.remaining[..position], &self.remaining[position + 1..]),
            None => (self.remaining, ""),
        };

        self.remaining = rest;
        Some(line.strip_suffix('\r').unwrap_or(line))
    }
}

impl<'a> Iterator for ContentLines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut unfolded = loop {
            match self.next_physical_line()? {
                "" => continue,
                line => break Cow::Borrowed(line),
            }
        };

        while let Some(rest) = self.remaining.strip_prefix([' ', '\t']) {
            self.remaining = rest;
            if let Some(continuation) = self.next_physical_line() {
                unfolded.to_mut().push_str(continuation);
            }
        }

        Some(unfolded)
    }
}

/// Split a content line into its property name and value
///
/// Parameters between the name and the value are scanned only to find the
/// value separator, since a quoted parameter value may itself contain colons
/// or semicolons. The parameters are not retained.
fn split_content_line(line: &str) -> Result<(&str, &str), Error> {
    let mut name_end = None;
    let mut in_quotes = false;

    for (position, byte) in line.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b';' if !in_quotes && name_end.is_none() => name_end = Some(position),
            b':' if !in_quotes => {
                let name = &line[..name_end.unwrap_or(position)];

                if name.is_empty() {
                    return Err(Error::InvalidContentLine("empty property name"));
                }

                if !name.bytes().all(|byte| byte.is_ascii_alphanumeric() || byte == b'-') {
                    return Err(Error::InvalidContentLine("invalid character in property name"));
                }

                return Ok((name, &line[position + 1..]));
            }
            _ => {}
        }
    }

    match in_quotes {
        true => Err(Error::InvalidContentLine("unterminated quoted parameter value")),
        false => Err(Error::InvalidContentLine("missing value separator")),
    }
}
