//! The main REPL implementation.
//!
//! Each round prints the mode menu, reads a mode, then reads one input and
//! prints the conversion. Conversion errors are reported and the loop goes
//! on; only terminal or output failures end it early.

use crate::config::ReplConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use std::fmt;
use std::io::{self, Stdout, Write};
use std::str::FromStr;
use tracing::debug;
use vinculum_numeral::{Error, Result, decode, encode, validate};

/// Conversion mode chosen at the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Roman numeral in, integer out.
    RomanToArabic,
    /// Integer in, Roman numeral out.
    ArabicToRoman,
    /// Show the menu again.
    Help,
    /// Leave the loop.
    Exit,
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "roman" => Ok(Self::RomanToArabic),
            "2" | "arabic" => Ok(Self::ArabicToRoman),
            "help" => Ok(Self::Help),
            "exit" | "quit" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RomanToArabic => write!(f, "Roman to Arabic"),
            Self::ArabicToRoman => write!(f, "Arabic to Roman"),
            Self::Help => write!(f, "Show this menu"),
            Self::Exit => write!(f, "Close the program"),
        }
    }
}

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where results, errors, and the menu are written.
    out: W,

    /// Prompt, banner, and color settings.
    config: ReplConfig,
}

impl Repl<RustylineEditor, Stdout> {
    /// Creates a new REPL with the default rustyline editor writing to stdout.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E, Stdout> {
    /// Creates a new REPL with the given editor, writing to stdout.
    pub fn with_editor(editor: E) -> Self {
        Self::with_output(editor, io::stdout())
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Creates a new REPL with the given editor and output.
    pub fn with_output(editor: E, out: W) -> Self {
        Self {
            editor,
            out,
            config: ReplConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.config.banner = false;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &ReplConfig {
        &self.config
    }

    /// Returns a reference to the editor.
    #[must_use]
    pub const fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns a reference to the output.
    #[must_use]
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the REPL and returns its output.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Runs the REPL loop until `exit` or end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails. Conversion
    /// errors are printed and never returned.
    pub fn run(&mut self) -> Result<()> {
        if self.config.banner {
            self.print_banner()?;
        }

        while self.round()? {}

        writeln!(self.out, "\nGoodbye!")?;
        self.out.flush()?;
        Ok(())
    }

    /// Executes one menu round.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn round(&mut self) -> Result<bool> {
        self.print_menu()?;

        let Some(line) = self.read()? else {
            return Ok(false);
        };
        if line.trim().is_empty() {
            return Ok(true);
        }

        let Ok(mode) = line.parse::<Mode>() else {
            debug!(input = %line.trim(), "unknown mode");
            writeln!(self.out, "Unknown mode {:?}, choose 1, 2 or exit", line.trim())?;
            return Ok(true);
        };
        debug!(%mode, "mode selected");

        match mode {
            Mode::Exit => Ok(false),
            // The menu opens every round.
            Mode::Help => Ok(true),
            Mode::RomanToArabic => {
                writeln!(self.out, "Input roman numeral:")?;
                self.read_then(Self::roman_to_arabic)
            }
            Mode::ArabicToRoman => {
                writeln!(self.out, "Input decimal number")?;
                self.read_then(Self::arabic_to_roman)
            }
        }
    }

    /// Reads one input line and hands it to `handle`.
    ///
    /// Ctrl+C returns to the menu; end of input leaves the loop.
    fn read_then(&mut self, handle: fn(&mut Self, &str) -> Result<()>) -> Result<bool> {
        match self.read()? {
            Some(line) => {
                handle(self, line.trim())?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Reads a line. `None` means end of input; Ctrl+C reads as empty.
    fn read(&mut self) -> Result<Option<String>> {
        self.out.flush()?;
        match self.editor.read_line(&self.config.prompt)? {
            ReadResult::Line(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history(&line);
                }
                Ok(Some(line))
            }
            ReadResult::Interrupted => {
                writeln!(self.out)?;
                Ok(Some(String::new()))
            }
            ReadResult::Eof => Ok(None),
        }
    }

    /// Validates, decodes, and prints a numeral.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the output fails.
    pub fn roman_to_arabic(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        if !validate(text) {
            debug!(input = text, "rejected numeral");
            let message = self
                .config
                .paint("31", "Invalid input! Please enter valid roman numeral");
            writeln!(self.out, "{message}")?;
            return Ok(());
        }

        match decode(text) {
            Ok(value) => {
                debug!(input = text, value, "decoded numeral");
                let result = self.config.paint("1", &format!("\"{value}\""));
                writeln!(self.out, "Roman {text:?} equal to Arabic {result}")?;
            }
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }

    /// Parses, encodes, and prints a base-10 integer.
    ///
    /// # Errors
    ///
    /// Returns an error only if writing the output fails.
    pub fn arabic_to_roman(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        let Ok(value) = text.parse::<i64>() else {
            debug!(input = text, "rejected number");
            let message = self
                .config
                .paint("31", "Invalid input! Please enter arabic number");
            writeln!(self.out, "{message}")?;
            return Ok(());
        };

        match encode(value) {
            Ok(numeral) => {
                debug!(value, numeral = %numeral, "encoded value");
                let result = self.config.paint("1", &format!("{numeral:?}"));
                writeln!(self.out, "Arabic \"{value}\" equal to Roman {result}")?;
            }
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }

    fn print_error(&mut self, error: &Error) -> Result<()> {
        debug!(%error, "conversion failed");
        let message = self.config.paint("31", &format!("Error with message: {error}"));
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.out, "Choose operation mode:")?;
        writeln!(self.out, "1: {}", Mode::RomanToArabic)?;
        writeln!(self.out, "2: {}", Mode::ArabicToRoman)?;
        writeln!(self.out, "exit: {}", Mode::Exit)?;
        Ok(())
    }

    fn print_banner(&mut self) -> Result<()> {
        let title = self.config.paint("1;36", "Vinculum");
        writeln!(
            self.out,
            "{title} v{}: Roman numerals up to _M_M_M_C_M_X_C_I_XCMXCIX (3999999)",
            env!("CARGO_PKG_VERSION")
        )?;
        writeln!(
            self.out,
            "Prefix a letter with _ to multiply it by 1000. Use Ctrl+D to exit.\n"
        )?;
        Ok(())
    }
}
