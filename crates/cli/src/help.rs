// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let placeholder =
        Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(placeholder)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::header("Options:")
    )
}

/// Commands list shown before options in main help.
pub fn commands() -> String {
    format!(
        "\
{header_records}
  {register}    Register a new student
  {list}        List students
  {search}      Search students by name or department
  {show}        Show student details
  {edit}        Edit a student's attributes
  {remove}      Mark student(s) inactive
  {restore}     Reactivate student(s)

{header_setup}
  {init}        Create the student database
  {admin}       Manage administrator accounts
  {config}      Manage configuration
  {export}      Export students to CSV or JSONL
  {completion}  Generate shell completions",
        header_records = colors::header("Student Records:"),
        register = colors::literal("register"),
        list = colors::literal("list"),
        search = colors::literal("search"),
        show = colors::literal("show"),
        edit = colors::literal("edit"),
        remove = colors::literal("remove"),
        restore = colors::literal("restore"),
        header_setup = colors::header("Setup & Administration:"),
        init = colors::literal("init"),
        admin = colors::literal("admin"),
        config = colors::literal("config"),
        export = colors::literal("export"),
        completion = colors::literal("completion"),
    )
}

/// Quickstart block shown after options in main help.
pub fn quickstart() -> String {
    colors::examples(
        "\
Quickstart:
  enroll init                          Create the database, seed an admin
  enroll register \"Alice Johnson\"      Register a student (ID auto-assigned)
  enroll list                          See active students
  enroll export                        Write a timestamped CSV",
    )
}
