use log::debug;
use thiserror::Error;

use crate::config::MalformedLinePolicy;
use crate::http::headers::HeaderStore;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No colon separator, or nothing before it.
    #[error("malformed header line: {line:?}")]
    MalformedHeader { line: String },

    #[error("header line is {len} bytes, limit is {max}")]
    LineTooLong { len: usize, max: usize },
}

/// Splits `raw` at its first colon into a trimmed `(name, value)` pair.
///
/// The value may itself contain colons (timestamps, URLs).
/// `max_line_len` of `None` accepts lines of any length.
pub fn split_line(raw: &str, max_line_len: Option<usize>) -> Result<(&str, &str), ParseError> {
    if let Some(max) = max_line_len {
        if raw.len() > max {
            return Err(ParseError::LineTooLong {
                len: raw.len(),
                max,
            });
        }
    }

    let malformed = || ParseError::MalformedHeader {
        line: raw.to_string(),
    };

    let (name, value) = raw.split_once(':').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    Ok((name, value.trim()))
}

impl HeaderStore {
    /// Parses a single `Name: Value` line and stores it.
    ///
    /// On error the store is left unchanged.
    pub fn parse_line(&mut self, raw: &str) -> Result<(), ParseError> {
        let (name, value) = split_line(raw, self.config.max_line_len)?;
        self.set(name, value);
        Ok(())
    }

    /// Parses `raws` in order and returns how many lines were stored.
    ///
    /// Malformed lines are handled according to
    /// [`StoreConfig::malformed_lines`](crate::config::StoreConfig::malformed_lines):
    /// with [`MalformedLinePolicy::Skip`] they are dropped, with
    /// [`MalformedLinePolicy::Abort`] the first error is returned and nothing
    /// is stored.
    pub fn parse_lines<I, S>(&mut self, raws: I) -> Result<usize, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max = self.config.max_line_len;

        match self.config.malformed_lines {
            MalformedLinePolicy::Skip => {
                let mut applied = 0;
                for raw in raws {
                    match split_line(raw.as_ref(), max) {
                        Ok((name, value)) => {
                            self.set(name, value);
                            applied += 1;
                        }
                        Err(err) => debug!("skipping header line: {err}"),
                    }
                }
                Ok(applied)
            }
            MalformedLinePolicy::Abort => {
                let raws: Vec<S> = raws.into_iter().collect();
                let pairs = raws
                    .iter()
                    .map(|raw| split_line(raw.as_ref(), max))
                    .collect::<Result<Vec<_>, _>>()?;

                let applied = pairs.len();
                self.extend(pairs);
                Ok(applied)
            }
        }
    }

    /// Parses a raw header block, one header per line.
    ///
    /// Lines may end with `\n` or `\r\n`; blank lines are ignored.
    pub fn parse_block(&mut self, block: &str) -> Result<usize, ParseError> {
        let lines = block
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .filter(|line| !line.trim().is_empty());

        self.parse_lines(lines)
    }
}
