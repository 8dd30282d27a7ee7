use crate::core::collection::Element;
use crate::core::render::{self, Format};
use crate::domain::config::IntrospectConfig;
use crate::domain::error::{IntrospectError, IntrospectResult};
use crate::infrastructure::hosts::HostMap;
use std::io::{self, Stdout, Write};

/// Console output writer.
///
/// Rendered data goes to the wrapped writer, errors to stderr.
pub struct ConsoleWriter<W: Write = Stdout> {
    out: W,
}

impl ConsoleWriter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn write_elements(&mut self, elements: &[Element<'_>], format: Format) -> IntrospectResult<()> {
        render::render(&mut self.out, elements, format)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn write_lines<I, S>(&mut self, lines: I) -> IntrospectResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            writeln!(self.out, "{}", line.as_ref())?;
        }
        Ok(())
    }

    pub fn write_message(&mut self, message: &str) -> IntrospectResult<()> {
        writeln!(self.out, "{}", message)?;
        Ok(())
    }

    pub fn write_config(&mut self, config: &IntrospectConfig) -> IntrospectResult<()> {
        let content = toml::to_string_pretty(config)
            .map_err(|e| IntrospectError::Output(format!("Failed to serialize config: {}", e)))?;
        write!(self.out, "{}", content)?;
        Ok(())
    }

    pub fn write_hosts(&mut self, hosts: &HostMap) -> IntrospectResult<()> {
        self.write_lines(hosts.names())
    }
}
