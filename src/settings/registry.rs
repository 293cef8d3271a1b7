//! Section/option registry that routes parsed config lines to options

use std::io::{self, Read, Write};
use std::path::Path;

use indexmap::IndexMap;

use crate::conffile::{self, ConfHandler};
use crate::options::OptionRef;

/// Name of the section that holds keys appearing before any `[header]`
pub const ROOT_SECTION: &str = "";

/// Section used for root-level keys that the root section doesn't declare
pub const DEFAULT_SECTION: &str = "game";

type Section<'a> = IndexMap<String, OptionRef<'a>>;

/// Registry of options by section, fed by the structural parser
///
/// The registry borrows its options; they live in whatever settings struct
/// declared them (see [`Settings::parser`](super::Settings::parser)). Drop the
/// parser to read the results back through the owning struct.
#[derive(Debug)]
pub struct RcParser<'a> {
    sections: IndexMap<String, Section<'a>>,
    current_section: String,
    default_section: String,
}

impl Default for RcParser<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> RcParser<'a> {
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
            current_section: ROOT_SECTION.to_string(),
            default_section: DEFAULT_SECTION.to_string(),
        }
    }

    /// Change the section used by [`add_option`](Self::add_option) and lookups
    pub fn set_section(&mut self, section: &str) {
        self.current_section = section.to_string();
    }

    pub fn current_section(&self) -> &str {
        &self.current_section
    }

    /// Section consulted for root-level keys the root section doesn't have
    pub fn set_default_section(&mut self, section: &str) {
        self.default_section = section.to_string();
    }

    pub fn default_section(&self) -> &str {
        &self.default_section
    }

    /// Register an option in the current section
    pub fn add_option(&mut self, name: &str, option: impl Into<OptionRef<'a>>) {
        let section = self.current_section.clone();
        self.add_option_in(&section, name, option);
    }

    /// Register an option in `section`. Reusing a name replaces the entry.
    pub fn add_option_in(&mut self, section: &str, name: &str, option: impl Into<OptionRef<'a>>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(name.to_string(), option.into());
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Look up `name` in the current section
    ///
    /// While in the root section, names the root doesn't declare fall back to
    /// the default section, so a flat file can fill in a named bundle.
    pub fn option(&mut self, name: &str) -> Option<&mut OptionRef<'a>> {
        let in_root = self
            .sections
            .get(ROOT_SECTION)
            .is_some_and(|root| root.contains_key(name));
        let section = if self.current_section == ROOT_SECTION && !in_root {
            &self.default_section
        } else {
            &self.current_section
        };
        self.sections.get_mut(section.as_str())?.get_mut(name)
    }

    /// Forget the current section and reset every option to its default
    pub fn reset(&mut self) {
        self.current_section.clear();
        for option in self.sections.values_mut().flat_map(|s| s.values_mut()) {
            option.reset();
        }
    }

    /// Parse a config stream. Options are reset first.
    pub fn parse<R: Read>(&mut self, reader: R) -> io::Result<()> {
        conffile::parse(reader, self)
    }

    /// Parse the file at `path`. `Ok(false)` means it could not be opened.
    pub fn parse_file(&mut self, path: impl AsRef<Path>) -> io::Result<bool> {
        conffile::parse_file(path, self)
    }

    /// Write a config file containing every option at its default value
    ///
    /// The root section comes first with no header, then every other section
    /// under a `[name]` header, in registration order.
    pub fn write_defaults<W: Write + ?Sized>(&self, out: &mut W, header: &str) -> io::Result<()> {
        write!(out, "{}\n\n", header)?;
        if let Some(root) = self.sections.get(ROOT_SECTION) {
            write_section(out, root)?;
        }
        for (name, section) in &self.sections {
            if name.is_empty() {
                continue;
            }
            write!(out, "[{}]\n\n", name)?;
            write_section(out, section)?;
        }
        Ok(())
    }

    /// [`write_defaults`](Self::write_defaults) into a string
    pub fn defaults_string(&self, header: &str) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail
        let _ = self.write_defaults(&mut buf, header);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn write_section<W: Write + ?Sized>(out: &mut W, section: &Section<'_>) -> io::Result<()> {
    for (name, option) in section {
        let description = option.description();
        if !description.is_empty() {
            writeln!(out, "; {}", description)?;
        }
        write!(out, "{} = {}\n\n", name, option.default_value_string())?;
    }
    Ok(())
}

impl ConfHandler for RcParser<'_> {
    fn parse_start(&mut self) {
        self.reset();
    }

    fn section_start(&mut self, section: &str) {
        if !section.is_empty() && !self.has_section(section) {
            tracing::warn!("Unknown section \"{}\": its options will be ignored", section);
        }
        self.current_section = section.to_string();
    }

    fn value_set(&mut self, key: &str, value: &str) {
        let section = self.current_section.clone();
        let Some(option) = self.option(key) else {
            if section.is_empty() {
                tracing::warn!("Unknown option \"{}\": ignored", key);
            } else {
                tracing::warn!("Unknown option \"{}\" in section {}: ignored", key, section);
            }
            return;
        };

        match option.parse(value) {
            Ok(()) => tracing::debug!("Set {} = {:?} (section {:?})", key, value, section),
            Err(e) => tracing::warn!(
                "Invalid value \"{}\" for {} in {:?}: {}",
                value,
                key,
                section,
                e
            ),
        }
    }
}
