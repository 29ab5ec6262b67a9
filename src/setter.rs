//! Typed setters: one parse/assign/serialize handler per supported leaf type.
//!
//! The supported set is closed. Scalars are `i32`, `i64`, `u32`, `u64`, `f64`,
//! `bool`, `String` and [`Duration`]; every scalar also works as a
//! comma-delimited `Vec<_>`. [`bind`] maps a destination's `TypeId` onto this
//! catalog and reports anything else as [`FlagfigError::UnsupportedType`].

use std::any::{Any, TypeId};
use std::time::Duration;

use tracing::warn;

use crate::duration;
use crate::error::FlagfigError;

/// Separator for sequence values on every layer (defaults, env, flags).
pub const SEQUENCE_DELIMITER: &str = ",";

mod sealed {
    pub trait Sealed {}
}

/// A scalar leaf type: one value parsed from one string.
///
/// This trait is sealed; the scalar set cannot be extended.
pub trait Scalar: Sized + sealed::Sealed + 'static {
    /// Name used in coercion errors and `--help`.
    const NAME: &'static str;

    /// `None` when `raw` is not a valid representation.
    fn parse_scalar(raw: &str) -> Option<Self>;

    /// Wire form accepted back by `parse_scalar`.
    fn render_scalar(&self) -> String;
}

macro_rules! display_scalar {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Scalar for $ty {
                const NAME: &'static str = stringify!($ty);

                fn parse_scalar(raw: &str) -> Option<Self> {
                    raw.parse().ok()
                }

                fn render_scalar(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_scalar!(i32, i64, u32, u64, f64);

impl sealed::Sealed for String {}

impl Scalar for String {
    const NAME: &'static str = "String";

    fn parse_scalar(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }

    fn render_scalar(&self) -> String {
        self.clone()
    }
}

impl sealed::Sealed for bool {}

impl Scalar for bool {
    const NAME: &'static str = "bool";

    /// Unrecognized input becomes `false` instead of failing.
    fn parse_scalar(raw: &str) -> Option<Self> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
            other => {
                warn!(
                    event = "flagfig.setter.bool_fallback",
                    value = other,
                    "Unrecognized boolean value, using false"
                );
                Some(false)
            }
        }
    }

    fn render_scalar(&self) -> String {
        self.to_string()
    }
}

impl sealed::Sealed for Duration {}

impl Scalar for Duration {
    const NAME: &'static str = "Duration";

    fn parse_scalar(raw: &str) -> Option<Self> {
        duration::parse(raw)
    }

    fn render_scalar(&self) -> String {
        duration::format(*self)
    }
}

/// A settable leaf type: a scalar or a comma-delimited sequence of scalars.
pub trait Setting: Sized + 'static {
    /// Rust-style type name, e.g. `Vec<i64>`.
    fn type_name() -> String;

    /// Convert a raw string. `None` means the string can not be coerced to
    /// this type; for numbers and durations that includes `""`.
    fn parse_setting(raw: &str) -> Option<Self>;

    /// Wire form, sequences comma-joined.
    fn render_setting(&self) -> String;

    /// Called on the destination after a failed parse.
    fn discard(&mut self) {}
}

macro_rules! scalar_setting {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Setting for $ty {
                fn type_name() -> String {
                    <$ty as Scalar>::NAME.to_string()
                }

                fn parse_setting(raw: &str) -> Option<Self> {
                    <$ty as Scalar>::parse_scalar(raw)
                }

                fn render_setting(&self) -> String {
                    self.render_scalar()
                }
            }
        )+
    };
}

scalar_setting!(i32, i64, u32, u64, f64, bool, String, Duration);

impl<T: Scalar> Setting for Vec<T> {
    fn type_name() -> String {
        format!("Vec<{}>", T::NAME)
    }

    fn parse_setting(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return Some(Vec::new());
        }
        raw.split(SEQUENCE_DELIMITER).map(T::parse_scalar).collect()
    }

    fn render_setting(&self) -> String {
        self.iter()
            .map(|v| v.render_scalar())
            .collect::<Vec<_>>()
            .join(SEQUENCE_DELIMITER)
    }

    /// A failed sequence parse never leaves stale elements behind.
    fn discard(&mut self) {
        self.clear();
    }
}

/// Parse-and-assign handler bound to one destination and one flag name.
///
/// Object-safe so the resolver can hold setters for different types in one
/// registry.
pub trait Setter {
    /// Flag name this setter is registered under.
    fn name(&self) -> &str;

    /// Type name shown in coercion errors and `--help`.
    fn type_name(&self) -> String;

    /// Whether the flag may appear without a value (`--debug`).
    fn is_switch(&self) -> bool;

    /// Coerce `raw` and assign it. On failure a scalar keeps its previous
    /// value and a sequence is emptied.
    fn set(&mut self, raw: &str) -> Result<(), FlagfigError>;

    /// Render the current value back to its wire form.
    fn serialize(&self) -> String;
}

/// [`Setter`] for one concrete [`Setting`] type.
pub struct TypedSetter<'a, T: Setting> {
    name: String,
    dest: &'a mut T,
}

impl<'a, T: Setting + Default> TypedSetter<'a, T> {
    /// Bind `dest` to `name` and immediately assign `initial`, so the field
    /// holds a defined value before any flag is parsed. An empty `initial`
    /// means no source supplied one and assigns the zero value.
    pub fn register(dest: &'a mut T, name: &str, initial: &str) -> Result<Self, FlagfigError> {
        let mut setter = Self {
            name: name.to_string(),
            dest,
        };
        if initial.is_empty() {
            *setter.dest = T::default();
        } else {
            setter.set(initial)?;
        }
        Ok(setter)
    }
}

impl<T: Setting + Default> Setter for TypedSetter<'_, T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn type_name(&self) -> String {
        T::type_name()
    }

    fn is_switch(&self) -> bool {
        TypeId::of::<T>() == TypeId::of::<bool>()
    }

    fn set(&mut self, raw: &str) -> Result<(), FlagfigError> {
        match T::parse_setting(raw) {
            Some(value) => {
                *self.dest = value;
                Ok(())
            }
            None => {
                self.dest.discard();
                Err(FlagfigError::TypeCoercion {
                    flag: self.name.clone(),
                    value: raw.to_string(),
                    type_name: T::type_name(),
                })
            }
        }
    }

    fn serialize(&self) -> String {
        self.dest.render_setting()
    }
}

/// Look `T` up in the supported-type catalog and register a setter for it.
///
/// `field` names the field in the `UnsupportedType` error.
pub fn bind<'a, T: Any>(
    field: &str,
    dest: &'a mut T,
    name: &str,
    initial: &str,
) -> Result<Box<dyn Setter + 'a>, FlagfigError> {
    let id = TypeId::of::<T>();
    let dest: &'a mut dyn Any = dest;

    macro_rules! catalog {
        ($($ty:ty),+ $(,)?) => {
            $(
                if id == TypeId::of::<$ty>() {
                    return match dest.downcast_mut::<$ty>() {
                        Some(typed) => TypedSetter::register(typed, name, initial)
                            .map(|s| Box::new(s) as Box<dyn Setter + 'a>),
                        None => Err(unsupported::<T>(field)),
                    };
                }
            )+
        };
    }

    catalog!(
        i32,
        i64,
        u32,
        u64,
        f64,
        bool,
        String,
        Duration,
        Vec<i32>,
        Vec<i64>,
        Vec<u32>,
        Vec<u64>,
        Vec<f64>,
        Vec<bool>,
        Vec<String>,
        Vec<Duration>,
    );

    Err(unsupported::<T>(field))
}

fn unsupported<T>(field: &str) -> FlagfigError {
    FlagfigError::UnsupportedType {
        field: field.to_string(),
        type_name: std::any::type_name::<T>().to_string(),
    }
}
