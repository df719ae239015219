//! "Contextual" pointers that carry the decoding context necessary to
//! disassemble whatever they point to.

use crate::reg::{self, DecodingContext};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::convert::TryInto;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::{fmt, str};

/// A pointer bundled with the decoding context that applies at its address.
///
/// Two pointers are equal only if both their addresses and their contexts are
/// equal, which makes a contextual pointer suitable as the key for memoized
/// decoding results: the same bytes decoded under two different contexts are
/// two different instructions.
///
/// Pointers sort by context first and address second. See the `Ord`
/// implementation of `DecodingContext` for how contexts sort.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pointer<P> {
    context: DecodingContext,
    pointer: P,
}

impl<P> Pointer<P> {
    pub fn new(pointer: P, context: DecodingContext) -> Self {
        Pointer { context, pointer }
    }

    /// Obtain a reference to the noncontextual pointer value.
    pub fn as_pointer(&self) -> &P {
        &self.pointer
    }

    /// Strip the context entirely and yield a pointer value.
    pub fn into_pointer(self) -> P {
        self.pointer
    }

    pub fn as_context(&self) -> &DecodingContext {
        &self.context
    }

    /// Edit the context of this pointer in place.
    pub fn context_mut(&mut self) -> &mut DecodingContext {
        &mut self.context
    }

    pub fn into_parts(self) -> (P, DecodingContext) {
        (self.pointer, self.context)
    }

    /// Create a new pointer with the same context as the current one.
    ///
    /// It is not guaranteed that the contexts of one address remain applicable
    /// at another. Whoever resolves successors is responsible for deciding
    /// that.
    pub fn contextualize(&self, p: P) -> Self {
        Pointer {
            context: self.context.clone(),
            pointer: p,
        }
    }

    /// Create a new pointer at the same address with a different context.
    pub fn with_context(&self, context: DecodingContext) -> Self
    where
        P: Clone,
    {
        Pointer {
            context,
            pointer: self.pointer.clone(),
        }
    }

    /// Determines if this and another contextual pointer have the same context.
    pub fn has_same_context<OP>(&self, other: &Pointer<OP>) -> bool {
        self.context == other.context
    }

    pub fn into_ptr<OP>(self) -> Pointer<OP>
    where
        P: Into<OP>,
    {
        Pointer {
            context: self.context,
            pointer: self.pointer.into(),
        }
    }

    pub fn try_into_ptr<OP>(self) -> Result<Pointer<OP>, <P as TryInto<OP>>::Error>
    where
        P: TryInto<OP>,
    {
        let pointer = self.pointer.try_into()?;

        Ok(Pointer {
            context: self.context,
            pointer,
        })
    }
}

impl<P> From<P> for Pointer<P> {
    fn from(p: P) -> Self {
        Pointer {
            context: DecodingContext::new(),
            pointer: p,
        }
    }
}

impl<P> Add<P> for Pointer<P>
where
    P: Add,
{
    type Output = Pointer<<P as Add>::Output>;

    fn add(self, rhs: P) -> Self::Output {
        Pointer {
            context: self.context,
            pointer: self.pointer + rhs,
        }
    }
}

impl<P> AddAssign<P> for Pointer<P>
where
    P: AddAssign,
{
    fn add_assign(&mut self, rhs: P) {
        self.pointer += rhs;
    }
}

impl<P> Sub<P> for Pointer<P>
where
    P: Sub,
{
    type Output = Pointer<<P as Sub>::Output>;

    fn sub(self, rhs: P) -> Self::Output {
        Pointer {
            context: self.context,
            pointer: self.pointer - rhs,
        }
    }
}

impl<P> SubAssign<P> for Pointer<P>
where
    P: SubAssign,
{
    fn sub_assign(&mut self, rhs: P) {
        self.pointer -= rhs;
    }
}

pub enum PointerParseError<P>
where
    P: str::FromStr,
{
    PointerWontParse(P::Err),
    ContextWontParse(reg::Error),
    MissingPointer,
}

impl<P> fmt::Debug for PointerParseError<P>
where
    P: str::FromStr,
    P::Err: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerParseError::PointerWontParse(e) => {
                f.debug_tuple("PointerWontParse").field(e).finish()
            }
            PointerParseError::ContextWontParse(e) => {
                f.debug_tuple("ContextWontParse").field(e).finish()
            }
            PointerParseError::MissingPointer => f.write_str("MissingPointer"),
        }
    }
}

impl<P> fmt::Display for PointerParseError<P>
where
    P: str::FromStr,
    P::Err: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PointerParseError::PointerWontParse(e) => write!(f, "Invalid address: {}", e),
            PointerParseError::ContextWontParse(e) => write!(f, "Invalid context: {}", e),
            PointerParseError::MissingPointer => write!(f, "Missing address"),
        }
    }
}

/// Parse a contextual pointer.
///
/// The address comes last, after the `!` which ends the context, e.g.
/// `TMReg_1!32768`. A pointer with no context is just the address.
impl<P> str::FromStr for Pointer<P>
where
    P: str::FromStr,
{
    type Err = PointerParseError<P>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (context_str, pointer_str) = s.rsplit_once('!').unwrap_or(("", s));

        if pointer_str.is_empty() {
            return Err(PointerParseError::MissingPointer);
        }

        let context = context_str
            .parse()
            .map_err(PointerParseError::ContextWontParse)?;
        let pointer = pointer_str
            .parse()
            .map_err(PointerParseError::PointerWontParse)?;

        Ok(Pointer { context, pointer })
    }
}

impl<P> fmt::Display for Pointer<P>
where
    P: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.context.is_empty() {
            write!(f, "{}!", self.context)?;
        }

        write!(f, "{}", self.pointer)
    }
}

//serde_plain's derive macros only take concrete types, so generic pointers
//get their visitor written out by hand.
impl<'de, P> Deserialize<'de> for Pointer<P>
where
    P: str::FromStr,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct V<P> {
            p: std::marker::PhantomData<P>,
        }

        impl<'de, P> de::Visitor<'de> for V<P>
        where
            P: str::FromStr,
        {
            type Value = Pointer<P>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("valid contextual pointer")
            }

            fn visit_str<E>(self, value: &str) -> Result<Pointer<P>, E>
            where
                E: de::Error,
            {
                value
                    .parse()
                    .map_err(|_| de::Error::invalid_value(de::Unexpected::Str(value), &self))
            }
        }

        deserializer.deserialize_str(V {
            p: std::marker::PhantomData,
        })
    }
}

impl<P> Serialize for Pointer<P>
where
    P: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
