//! Generated code, compiled for real.
//!
//! `build.rs` runs the generator over `fixtures/settings.json`; the result is included below next to the declared
//! trait and the converter it refers to, so any change in emitted code that stops compiling fails this crate's build.

pub mod app {
    use std::collections::HashSet;

    use prefsmith_runtime::{Converter, HashCode};

    /// The declared type of the fixture manifest.
    pub trait Settings {
        fn get_user_name(&self) -> String;
        fn is_enabled(&self) -> bool;
        fn get_tags(&self) -> HashSet<String>;
        fn get_launches(&self) -> i32;
        fn get_volume(&self) -> f32;
        fn get_created(&self) -> Date;
    }

    /// Milliseconds since the epoch.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Date(pub i64);

    impl HashCode for Date {
        fn hash_code(&self) -> i32 {
            self.0.hash_code()
        }
    }

    #[derive(Default)]
    pub struct DateConverter;

    impl Converter<Date, i64> for DateConverter {
        fn to_converted(&self, supported: i64) -> Date {
            Date(supported)
        }

        fn to_supported(&self, converted: Date) -> i64 {
            converted.0
        }
    }
}

include!(concat!(env!("OUT_DIR"), "/app_settings_impl.rs"));
