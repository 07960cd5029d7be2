//! Semantic checks that TOML deserialization can't express.

use miette::SourceSpan;

use crate::{Config, ReceiverNameMode, Result, error::SourceContext};

pub(crate) fn validate_config(config: &Config, ctx: &SourceContext) -> Result<()> {
    let generation = &config.generation;
    if generation.receiver_name_mode == ReceiverNameMode::Fixed
        && generation.fixed_receiver_name.trim().is_empty()
    {
        let span = find_key_span(ctx.src(), "fixedReceiverName")
            .or_else(|| find_key_span(ctx.src(), "receiverNameMode"));
        return Err(ctx.validation_error(
            "fixed receiver name mode needs a receiver name",
            "set fixedReceiverName, e.g. fixedReceiverName = \"s\"",
            span,
        ));
    }

    for (table, tool, timeout) in [
        ("generator", &config.generator.tool, config.generator.timeout_secs),
        ("index", &config.index.tool, config.index.timeout_secs),
    ] {
        if tool.trim().is_empty() {
            return Err(ctx.validation_error(
                format!("{}.tool must not be empty", table),
                "name a program on PATH or an absolute path",
                find_table_key_span(ctx.src(), table, "tool"),
            ));
        }
        if timeout == 0 {
            return Err(ctx.validation_error(
                format!("{}.timeoutSecs must be greater than zero", table),
                "use a timeout of at least 1 second",
                find_table_key_span(ctx.src(), table, "timeoutSecs"),
            ));
        }
    }

    Ok(())
}

/// Span of `key = ...` anywhere in the source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    find_key_from(src, key, 0)
}

/// Span of `key = ...` within `[table]`.
pub(crate) fn find_table_key_span(src: &str, table: &str, key: &str) -> Option<SourceSpan> {
    let header = format!("[{}]", table);
    let start = src.find(&header)?;
    find_key_from(src, key, start + header.len())
}

fn find_key_from(src: &str, key: &str, from: usize) -> Option<SourceSpan> {
    let mut offset = from;
    for line in src[from..].split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        if let Some(rest) = trimmed.strip_prefix(key) {
            if rest.trim_start().starts_with('=') {
                return Some(SourceSpan::from((offset + indent, key.len())));
            }
        }
        offset += line.len();
    }
    None
}
