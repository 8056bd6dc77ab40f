//! Converters between a property's value type and the type the store persists.
//!
//! A converter for a property of type `C` stored as `S` implements `Converter<C, S>`. Generated code instantiates
//! it with `Default::default()` for every read and write, so converters must be stateless in practice.
//!
//! ## Examples
//! ```rust
//! use prefsmith_runtime::Converter;
//!
//! #[derive(Default)]
//! struct Celsius;
//!
//! impl Converter<f64, f32> for Celsius {
//!     fn to_converted(&self, supported: f32) -> f64 {
//!         f64::from(supported)
//!     }
//!
//!     fn to_supported(&self, converted: f64) -> f32 {
//!         converted as f32
//!     }
//! }
//!
//! assert_eq!(Celsius.to_supported(21.5), 21.5f32);
//! ```

/// Maps a stored value of type `S` to a property value of type `C` and back.
pub trait Converter<C, S> {
    /// Convert a value read from the store.
    fn to_converted(&self, supported: S) -> C;

    /// Convert a property value before writing it to the store.
    fn to_supported(&self, converted: C) -> S;
}

/// The identity converter used by properties that do not name one.
///
/// Generated code never calls it: properties using it read and write the store directly.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DefaultConverter;

impl<T> Converter<T, T> for DefaultConverter {
    fn to_converted(&self, supported: T) -> T {
        supported
    }

    fn to_supported(&self, converted: T) -> T {
        converted
    }
}
