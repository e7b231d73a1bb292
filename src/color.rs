extern crate termcolor;

use std::io::Write;
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};

macro_rules! get_version {
    ($file:expr) => {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " ",
            include_str!(concat!(env!("OUT_DIR"), "/", $file))
        )
    };
}

/// Prints the right-aligned status label in color and resets, leaving the
/// stream ready for the plain-text message.
pub fn print_label(stdout: &mut StandardStream, color: Color, label: &str) {
    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)).set_intense(true))
        .expect("Error: can't set output color");
    write!(stdout, "{:>7}: ", label).expect("Failed to write label");
    stdout.reset().expect("Error: can't reset output color");
}

macro_rules! write_status {
    ($dest:expr, $color:expr, $label:expr, $($arg:tt)*) => {{
        $crate::color::print_label($dest, $color, $label);
        writeln!($dest, $($arg)*).expect("Failed to write output");
    }};
}

macro_rules! write_error {
    ($dest:expr, $($arg:tt)*) => {
        write_status!($dest, termcolor::Color::Red, "Error", $($arg)*)
    };
}

macro_rules! write_info {
    ($dest:expr, $($arg:tt)*) => {
        write_status!($dest, termcolor::Color::Blue, "Info", $($arg)*)
    };
}

macro_rules! write_ok {
    ($dest:expr, $($arg:tt)*) => {
        write_status!($dest, termcolor::Color::Green, "Success", $($arg)*)
    };
}

macro_rules! write_progress {
    ($dest:expr, $($arg:tt)*) => {
        write_status!($dest, termcolor::Color::Cyan, "Fetch", $($arg)*)
    };
}
