//! Register definitions for contextual information, such as multi-mode CPUs
//! whose instruction encoding depends on state outside the instruction bytes.

use crate::reg::{Error, Result};
use std::cmp::Ordering;
use std::collections::btree_map::{BTreeMap, Iter};
use std::iter::FromIterator;
use std::{fmt, str};

/// The full set of context register values held by a `DecodingContext`.
///
/// Iteration order is the register name order, which is stable but carries no
/// meaning beyond that.
pub type ContextValues = BTreeMap<String, u64>;

/// The bag of processor-mode state which determines how instruction bytes
/// must be decoded.
///
/// A context maps the names of context registers (which need not correspond
/// to real hardware registers) to their values. Registers that are not present
/// in the map are unknown, which is not the same thing as being zero.
///
/// Contexts are plain values. The `put_context_reg` and
/// `context_without_register` methods yield a modified copy and leave the
/// receiver alone, so a decoder that forks at a branch can hand each successor
/// its own context. Owners of a single context may instead edit it in place
/// with `update_context_reg` and `drop_reg`; both styles produce equal results
/// from equal starting contexts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DecodingContext {
    context_values: ContextValues,
}

impl DecodingContext {
    /// Construct a context with no registers set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Determine if this context knows the value of a given register.
    pub fn has_value_for_reg(&self, creg: &str) -> bool {
        self.context_values.contains_key(creg)
    }

    /// Get the value of a context register.
    ///
    /// Reading a register that this context does not hold yields
    /// `Error::MissingRegister`. Use `has_value_for_reg` first if the register
    /// is not already known to be present.
    pub fn get_context_value(&self, creg: &str) -> Result<u64> {
        self.try_context_value(creg)
            .ok_or_else(|| Error::MissingRegister(creg.to_string()))
    }

    /// Get the value of a context register, if it has one.
    pub fn try_context_value(&self, creg: &str) -> Option<u64> {
        self.context_values.get(creg).copied()
    }

    /// Set a context register in place, overwriting any previous value.
    pub fn update_context_reg(&mut self, creg: impl Into<String>, value: u64) {
        self.context_values.insert(creg.into(), value);
    }

    /// Remove a context register in place.
    ///
    /// The value the register held, if any, is returned. Dropping a register
    /// that is not present does nothing.
    pub fn drop_reg(&mut self, creg: &str) -> Option<u64> {
        self.context_values.remove(creg)
    }

    /// Produce a copy of this context with a register set to a given value.
    pub fn put_context_reg(&self, creg: impl Into<String>, value: u64) -> Self {
        let mut new_context = self.clone();
        new_context.update_context_reg(creg, value);

        new_context
    }

    /// Produce a copy of this context without a given register.
    pub fn context_without_register(&self, creg: &str) -> Self {
        let mut new_context = self.clone();
        new_context.drop_reg(creg);

        new_context
    }

    /// View every register value held by this context.
    pub fn context_values(&self) -> &ContextValues {
        &self.context_values
    }

    pub fn iter(&self) -> Iter<'_, String, u64> {
        self.context_values.iter()
    }

    pub fn len(&self) -> usize {
        self.context_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.context_values.is_empty()
    }
}

impl From<ContextValues> for DecodingContext {
    fn from(context_values: ContextValues) -> Self {
        DecodingContext { context_values }
    }
}

impl From<DecodingContext> for ContextValues {
    fn from(context: DecodingContext) -> Self {
        context.context_values
    }
}

impl<K> FromIterator<(K, u64)> for DecodingContext
where
    K: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, u64)>>(iter: I) -> Self {
        DecodingContext {
            context_values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DecodingContext {
    type Item = (&'a String, &'a u64);
    type IntoIter = Iter<'a, String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Contexts sort register by register in name order. For the first register
/// on which two contexts differ, a context without the register sorts before
/// one with it, and otherwise the smaller value sorts first.
impl Ord for DecodingContext {
    fn cmp(&self, rhs: &Self) -> Ordering {
        let mut lhs_iter = self.context_values.iter().peekable();
        let mut rhs_iter = rhs.context_values.iter().peekable();

        loop {
            match (lhs_iter.peek(), rhs_iter.peek()) {
                (None, None) => return Ordering::Equal,
                (Some(_), None) => return Ordering::Greater,
                (None, Some(_)) => return Ordering::Less,
                (Some((lhs_key, lhs_val)), Some((rhs_key, rhs_val))) => {
                    match lhs_key.cmp(rhs_key) {
                        Ordering::Less => return Ordering::Greater,
                        Ordering::Greater => return Ordering::Less,
                        Ordering::Equal => {
                            let ordering = lhs_val.cmp(rhs_val);
                            if ordering != Ordering::Equal {
                                return ordering;
                            }
                        }
                    }
                }
            }

            lhs_iter.next();
            rhs_iter.next();
        }
    }
}

impl PartialOrd for DecodingContext {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}

fn parse_value(register: &str, value: &str) -> Result<u64> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"));

    if digits.unwrap_or(value).starts_with('+') {
        return Err(Error::SignedValue(register.to_string()));
    }

    let parsed = match digits {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => value.parse::<u64>(),
    };

    parsed.map_err(|source| Error::InvalidValue {
        register: register.to_string(),
        source,
    })
}

/// Undo the escaping `Display` applies to register names.
fn unescape_register(escaped: &str) -> Result<String> {
    let mut register = String::with_capacity(escaped.len());
    let mut chars = escaped.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(e @ '\\') | Some(e @ '!') => register.push(e),
                _ => return Err(Error::InvalidEscape(escaped.to_string())),
            }
        } else {
            register.push(c);
        }
    }

    Ok(register)
}

/// Split a textual context on every `!` that is not escaped.
fn split_entries(s: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut entry_start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == '!' {
            entries.push(&s[entry_start..i]);
            entry_start = i + 1;
        }
    }

    entries.push(&s[entry_start..]);
    entries
}

/// Parse a context from its textual form.
///
/// The textual form is a list of `register_value` entries separated by `!`,
/// e.g. `TMReg_1!BANK_0x2`. Register names may themselves contain
/// underscores; the value is everything after the last one. Within a register
/// name, `\\` and `\!` stand for a literal backslash and bang, and an empty
/// name is written as nothing at all (`_7`). Values are unsigned, decimal
/// unless prefixed with `0x`. The empty string is the empty context.
impl str::FromStr for DecodingContext {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut context = DecodingContext::new();

        if s.is_empty() {
            return Ok(context);
        }

        for entry in split_entries(s) {
            if entry.is_empty() {
                return Err(Error::EmptyEntry);
            }

            let (escaped, value) = entry
                .rsplit_once('_')
                .ok_or_else(|| Error::MissingValue(entry.to_string()))?;
            let register = unescape_register(escaped)?;

            if value.is_empty() {
                return Err(Error::MissingValue(register));
            }

            if context.has_value_for_reg(&register) {
                return Err(Error::DuplicateRegister(register));
            }

            let value = parse_value(&register, value)?;
            context.update_context_reg(register, value);
        }

        Ok(context)
    }
}

impl fmt::Display for DecodingContext {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;

        for (creg, value) in self.context_values.iter() {
            if !first {
                write!(f, "!")?;
            }

            for c in creg.chars() {
                if c == '\\' || c == '!' {
                    write!(f, "\\")?;
                }

                write!(f, "{}", c)?;
            }

            write!(f, "_{}", value)?;
            first = false;
        }

        Ok(())
    }
}

derive_deserialize_from_str!(DecodingContext, "valid decoding context");
derive_serialize_from_display!(DecodingContext);
