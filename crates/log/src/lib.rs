//! A simple logging library for the needs of Greenwood.

use std::fmt::Arguments;
use std::io::Write;

/// A verbosity level for a [`Message`].
///
/// The ordering is in *increasing verbosity*: [`Error`] is the least verbose
/// level and [`Trace`] the most verbose, which makes filtering by level a
/// simple comparison.
///
/// [`Error`]: Verbosity::Error
/// [`Trace`]: Verbosity::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Verbosity {
    /// A fatal error. Not necessarily a panic, but a situation that prevents
    /// at least part of the program from working correctly.
    Error,
    /// An error the program has recovered from by itself, but which may
    /// indicate that something is wrong.
    Warning,
    /// Information that is useful most of the time and does not indicate a
    /// problem.
    Info,
    /// Information that is only useful when debugging.
    Trace,
}

/// A message that can be logged.
pub struct Message<'a> {
    /// The name of the file in which the message was logged.
    pub file: &'static str,
    /// The line at which the message was logged.
    pub line: u32,
    /// The verbosity level of the message.
    pub verbosity: Verbosity,
    /// The module in which the message was logged.
    pub module: &'static str,
    /// The message itself.
    pub message: Arguments<'a>,
}

impl<'a> Message<'a> {
    /// Logs this message to the standard error stream.
    pub fn log(self) {
        let prefix = match self.verbosity {
            Verbosity::Error => "\x1B[1;31mERROR\x1B[0m  ",
            Verbosity::Warning => "\x1B[1;33mWARNING\x1B[0m",
            Verbosity::Info => "\x1B[1;34mINFO\x1B[0m   ",
            Verbosity::Trace => "\x1B[1;30mTRACE\x1B[0m  ",
        };

        let _ = writeln!(
            std::io::stderr().lock(),
            "{prefix}{} \x1B[2;90m(at {}:{})\x1B[0m",
            self.message,
            self.file,
            self.line,
        );
    }
}

/// Creates a [`Message`] instance with the current invoking location.
#[macro_export]
macro_rules! message {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message {
            file: ::core::file!(),
            line: ::core::line!(),
            verbosity: $verbosity,
            module: ::core::module_path!(),
            message: ::core::format_args!($($args)*),
        }
    };
}

/// Logs a message with the current invoking location.
#[macro_export]
macro_rules! log {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message::log($crate::message!($verbosity, $($args)*))
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Error`].
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Error, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Warning`].
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Warning, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Info`].
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Info, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Trace`].
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Trace, $($args)*)
    };
}
