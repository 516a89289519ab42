use crate::report::ReportSet;
use crate::severity::Severity;
use log::{debug, warn};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed XML at byte {position}: {err}")]
    Xml {
        position: usize,
        #[source]
        err: quick_xml::Error,
    },
    #[error("invalid {attribute} '{value}' at byte {position}")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
        position: usize,
    },
    #[error("unexpected end of input: <{0}> is never closed")]
    UnexpectedEof(String),
}

/// What an open element means to the decoder.
enum Scope {
    /// Outside any checkstyle report.
    Other,
    Report,
    File(String),
    /// Contents are of no interest, down to the matching end tag.
    Skipped,
}

/// Reads every `<checkstyle>` report in `input` into `reports`.
///
/// Reports may be concatenated; elements outside a report are skipped.
/// Returns the number of reports read. Nothing read before an error should be
/// printed: the input as a whole is rejected.
pub fn read_reports<R: BufRead>(input: R, reports: &mut ReportSet) -> Result<usize, DecodeError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut open: Vec<(String, Scope)> = Vec::new();
    let mut count = 0;

    loop {
        buf.clear();
        let position = reader.buffer_position();
        let event = match reader.read_event_into(&mut buf) {
            Ok(event) => event,
            Err(err) => {
                return Err(DecodeError::Xml {
                    position: reader.buffer_position(),
                    err,
                })
            }
        };
        match event {
            Event::Start(ref e) => {
                check_attributes(e, position)?;
                let parent = open.last().map(|(_, scope)| scope);
                let scope = enter(parent, e, position, reports, &mut count)?;
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                open.push((name, scope));
            }
            Event::Empty(ref e) => {
                check_attributes(e, position)?;
                let parent = open.last().map(|(_, scope)| scope);
                enter(parent, e, position, reports, &mut count)?;
            }
            // the reader has already matched the end tag against its start
            Event::End(_) => {
                open.pop();
            }
            Event::Text(ref t) => {
                t.unescape()
                    .map_err(|err| DecodeError::Xml { position, err })?;
            }
            Event::Eof => {
                if let Some((name, _)) = open.pop() {
                    return Err(DecodeError::UnexpectedEof(name));
                }
                break;
            }
            _ => {}
        }
    }

    debug!("read {} checkstyle report(s)", count);
    Ok(count)
}

fn enter(
    parent: Option<&Scope>,
    e: &BytesStart,
    position: usize,
    reports: &mut ReportSet,
    count: &mut usize,
) -> Result<Scope, DecodeError> {
    let scope = match (parent, e.local_name().as_ref()) {
        (None, b"checkstyle") | (Some(Scope::Other), b"checkstyle") => {
            *count += 1;
            Scope::Report
        }
        (None, _) | (Some(Scope::Other), _) => Scope::Other,
        (Some(Scope::Report), b"file") => {
            Scope::File(attribute(e, b"name", position)?.unwrap_or_default())
        }
        (Some(Scope::File(filename)), b"error") => {
            record_violation(e, filename, position, reports)?;
            Scope::Skipped
        }
        _ => Scope::Skipped,
    };
    Ok(scope)
}

fn record_violation(
    e: &BytesStart,
    filename: &str,
    position: usize,
    reports: &mut ReportSet,
) -> Result<(), DecodeError> {
    let line = number(e, "line", position)?;
    let column = number(e, "column", position)?;
    let severity = attribute(e, b"severity", position)?.unwrap_or_default();
    let message = attribute(e, b"message", position)?.unwrap_or_default();

    match severity.parse::<Severity>() {
        Ok(severity) => reports.record(filename, line, column, severity, &message),
        Err(err) => warn!(
            "{}:{}:{}: dropping violation at byte {}: {}",
            filename, line, column, position, err
        ),
    }
    Ok(())
}

/// Rejects the element if any of its attributes is malformed or holds a bad
/// escape, whether or not the decoder reads it.
fn check_attributes(e: &BytesStart, position: usize) -> Result<(), DecodeError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| DecodeError::Xml {
            position,
            err: err.into(),
        })?;
        attr.unescape_value()
            .map_err(|err| DecodeError::Xml { position, err })?;
    }
    Ok(())
}

fn attribute(e: &BytesStart, name: &[u8], position: usize) -> Result<Option<String>, DecodeError> {
    for attr in e.attributes() {
        let attr = attr.map_err(|err| DecodeError::Xml {
            position,
            err: err.into(),
        })?;
        if attr.key.local_name().as_ref() == name {
            let value = attr
                .unescape_value()
                .map_err(|err| DecodeError::Xml { position, err })?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// A missing or blank attribute counts as zero.
fn number(e: &BytesStart, name: &'static str, position: usize) -> Result<i64, DecodeError> {
    let value = match attribute(e, name.as_bytes(), position)? {
        Some(value) => value,
        None => return Ok(0),
    };
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| DecodeError::InvalidNumber {
        attribute: name,
        value,
        position,
    })
}
