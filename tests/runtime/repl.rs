//! Integration tests for the REPL menu loop

use std::collections::VecDeque;

use vinculum_numeral::Result;
use vinculum_runtime::{LineEditor, ReadResult, Repl, ReplConfig};

// =============================================================================
// Scripted Editor
// =============================================================================

/// Replays a fixed script and records every prompt it was shown.
#[derive(Default)]
pub struct ScriptedEditor {
    script: VecDeque<ReadResult>,
    prompts: Vec<String>,
}

impl ScriptedEditor {
    pub fn lines(lines: &[&str]) -> Self {
        Self {
            script: lines
                .iter()
                .map(|line| ReadResult::Line((*line).to_string()))
                .collect(),
            prompts: Vec::new(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, prompt: &str) -> Result<ReadResult> {
        self.prompts.push(prompt.to_string());
        Ok(self.script.pop_front().unwrap_or(ReadResult::Eof))
    }

    fn add_history(&mut self, _line: &str) {}
}

fn session(lines: &[&str]) -> String {
    let mut repl =
        Repl::with_output(ScriptedEditor::lines(lines), Vec::new()).with_config(ReplConfig::plain());
    repl.run().unwrap();
    String::from_utf8(repl.into_output()).unwrap()
}

// =============================================================================
// Conversions
// =============================================================================

#[test]
fn roman_to_arabic() {
    let out = session(&["1", "MMMDCCXXIV", "exit"]);
    assert!(out.contains("Input roman numeral:"));
    assert!(out.contains("Roman \"MMMDCCXXIV\" equal to Arabic \"3724\""));
}

#[test]
fn roman_to_arabic_keeps_input_case() {
    let out = session(&["roman", "dclxviii"]);
    assert!(out.contains("Roman \"dclxviii\" equal to Arabic \"668\""));
}

#[test]
fn arabic_to_roman() {
    let out = session(&["2", "1666666", "exit"]);
    assert!(out.contains("Input decimal number"));
    assert!(out.contains("Arabic \"1666666\" equal to Roman \"_M_D_C_L_X_VMDCLXVI\""));
}

#[test]
fn arabic_zero_prints_empty_numeral() {
    let out = session(&["2", "0"]);
    assert!(out.contains("Arabic \"0\" equal to Roman \"\""));
}

#[test]
fn several_rounds() {
    let out = session(&["1", "XIV", "2", "14", "1", "xiv", "exit"]);
    assert_eq!(out.matches("equal to").count(), 3);
    assert_eq!(out.matches("Choose operation mode:").count(), 4);
}

// =============================================================================
// Recoverable Errors
// =============================================================================

#[test]
fn malformed_numeral_then_recovery() {
    let out = session(&["1", "IIII", "1", "IV"]);
    assert!(out.contains("Invalid input! Please enter valid roman numeral"));
    assert!(out.contains("Roman \"IV\" equal to Arabic \"4\""));
}

#[test]
fn non_numeric_input_then_recovery() {
    let out = session(&["2", "4.5", "2", "4"]);
    assert!(out.contains("Invalid input! Please enter arabic number"));
    assert!(out.contains("Arabic \"4\" equal to Roman \"IV\""));
}

#[test]
fn over_range_value() {
    let out = session(&["2", "4000000"]);
    assert!(out.contains("Error with message: value 4000000 out of range"));
    assert!(!out.contains("equal to Roman"));
}

#[test]
fn over_range_numeral() {
    let out = session(&["1", "_M_M_M_C_M_X_C_XMMMCMXCIX"]);
    assert!(out.contains("Error with message: value 4003999 out of range"));
}

// =============================================================================
// Loop Control
// =============================================================================

#[test]
fn exit_stops_before_remaining_input() {
    let out = session(&["exit", "1", "XIV"]);
    assert!(!out.contains("equal to"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn help_shows_menu_then_converts() {
    let out = session(&["help", "2", "9"]);
    assert_eq!(out.matches("Choose operation mode:").count(), 3);
    assert!(!out.contains("Unknown mode"));
    assert!(out.contains("Arabic \"9\" equal to Roman \"IX\""));
}

#[test]
fn eof_mid_conversion_exits() {
    let out = session(&["1"]);
    assert!(out.contains("Input roman numeral:"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[test]
fn every_read_uses_configured_prompt() {
    let mut repl = Repl::with_output(ScriptedEditor::lines(&["2", "7"]), Vec::new())
        .with_config(ReplConfig::plain().with_prompt("numeral> "));
    repl.run().unwrap();
    // Mode, number, then the final mode read that hits end of input.
    assert_eq!(repl.editor().prompts, vec!["numeral> "; 3]);
    let out = String::from_utf8(repl.output().clone()).unwrap();
    assert!(out.contains("Roman \"VII\""));
}

#[test]
fn banner_is_printed_when_enabled() {
    let mut repl = Repl::with_output(ScriptedEditor::default(), Vec::new())
        .with_config(ReplConfig::plain().with_banner(true));
    repl.run().unwrap();
    let out = String::from_utf8(repl.into_output()).unwrap();
    assert!(out.starts_with("Vinculum v"));
}
