//! Help/usage rendering. This component is an external collaborator
//! of the parser proper — the engine only ever reports `HelpRequested`, it
//! never formats anything itself.
//!
//! Exact spacing, column widths, and wrapping are implementation-defined;
//! this module only guarantees every declared flag/positional
//! appears with its description, and that required vs. optional is
//! visually distinguishable.

use std::fmt::{self, Write as _};

use crate::config::ParserConfig;
use crate::value::DataType;

fn usage_flag_fragment(flag: &crate::flag::FlagDescriptor) -> String {
    if flag.data_type() == DataType::Presence {
        flag.name().to_owned()
    } else {
        format!("{} {}", flag.name(), flag.display_meta_name())
    }
}

fn usage_positional_fragment(p: &crate::positional::PositionalDescriptor) -> String {
    let meta = p.display_meta_name();
    match (p.required(), p.variadic()) {
        (true, true) => format!("{meta} ..."),
        (true, false) => meta.to_owned(),
        (false, true) => format!("[ {meta} ... ]"),
        (false, false) => format!("[ {meta} ]"),
    }
}

/// Writes the usage line: program name, each optional flag bracketed,
/// required flags inline, then each positional by meta-name.
pub fn render_usage<W: fmt::Write>(
    config: &ParserConfig,
    program_name: &str,
    out: &mut W,
) -> fmt::Result {
    w_section!(out, "usage: ")?;
    write!(out, "{}", w_flag!(program_name))?;

    if let Some(help) = &config.help_flag {
        if config.help_enabled {
            write!(out, " [ {} ]", help.name)?;
        }
    }

    for flag in &config.flags {
        let fragment = usage_flag_fragment(flag);
        if flag.min_count() == 0 {
            write!(out, " [ {fragment} ]")?;
        } else {
            write!(out, " {fragment}")?;
        }
    }

    for p in &config.positionals {
        write!(out, " {}", usage_positional_fragment(p))?;
    }

    writeln!(out)
}

/// Writes the full help message: usage line, description, flags section,
/// positionals section, epilogue — or the verbatim
/// [`ParserConfig::set_custom_help`] override, if one was configured.
pub fn render_help<W: fmt::Write>(
    config: &ParserConfig,
    program_name: &str,
    out: &mut W,
) -> fmt::Result {
    if let Some(custom) = &config.custom_help {
        return writeln!(out, "{custom}");
    }

    if config.usage_enabled {
        render_usage(config, program_name, out)?;
        writeln!(out)?;
    }

    if let Some(description) = &config.description {
        writeln!(out, "{description}")?;
        writeln!(out)?;
    }

    if !config.flags.is_empty() || (config.help_enabled && config.help_flag.is_some()) {
        w_section!(out, "Available Flags:")?;
        writeln!(out)?;
        for flag in &config.flags {
            writeln!(out, "{}", usage_flag_fragment(flag))?;
            if let Some(desc) = flag.description() {
                writeln!(out, "    {desc}")?;
            }
        }
        if config.help_enabled {
            if let Some(help) = &config.help_flag {
                writeln!(out, "{}", help.name)?;
                if let Some(desc) = &help.description {
                    writeln!(out, "    {desc}")?;
                }
            }
        }
        writeln!(out)?;
    }

    if !config.positionals.is_empty() {
        w_section!(out, "Positional Arguments:")?;
        writeln!(out)?;
        for p in &config.positionals {
            writeln!(out, "{}", p.display_meta_name())?;
            if let Some(desc) = p.description() {
                writeln!(out, "    {desc}")?;
            }
        }
        writeln!(out)?;
    }

    if let Some(epilogue) = &config.epilogue {
        writeln!(out, "{epilogue}")?;
    }

    Ok(())
}

/// Convenience wrapper over [`render_usage`] that returns an owned `String`.
#[must_use]
pub fn usage_string(config: &ParserConfig, program_name: &str) -> String {
    let mut out = String::new();
    render_usage(config, program_name, &mut out).expect("writing to a String never fails");
    out
}

/// Convenience wrapper over [`render_help`] that returns an owned `String`.
#[must_use]
pub fn help_string(config: &ParserConfig, program_name: &str) -> String {
    let mut out = String::new();
    render_help(config, program_name, &mut out).expect("writing to a String never fails");
    out
}
