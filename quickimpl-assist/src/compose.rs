//! Building the stub generator command.

use std::fmt;

use quickimpl_config::{GenerationConfig, ReceiverNameMode};
use quickimpl_core::{InterfaceCandidate, TriggerContext, receiver_prefix};

use crate::{AssistError, Result};

/// Arguments for one stub generator run.
///
/// The generator is called as `<tool> "<receiver_expr>" <interface>`, e.g.
/// `impl "f *Foo" io.Reader`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationCommand {
    receiver_expr: String,
    struct_name: String,
    interface_qualified_name: String,
}

impl GenerationCommand {
    /// Receiver with type, e.g. `f *Foo`
    pub fn receiver_expr(&self) -> &str {
        &self.receiver_expr
    }

    pub fn struct_name(&self) -> &str {
        &self.struct_name
    }

    /// Interface name the generator resolves, e.g. `io.Reader`
    pub fn interface(&self) -> &str {
        &self.interface_qualified_name
    }

    /// Process arguments, in order.
    pub fn args(&self) -> [&str; 2] {
        [&self.receiver_expr, &self.interface_qualified_name]
    }

    /// Arguments joined by a space, e.g. `f *Foo io.Reader`.
    pub fn argument_string(&self) -> String {
        format!("{} {}", self.receiver_expr, self.interface_qualified_name)
    }
}

impl fmt::Display for GenerationCommand {
    /// Shell form of the arguments: `"f *Foo" io.Reader`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {}",
            self.receiver_expr, self.interface_qualified_name
        )
    }
}

/// Receiver name for `struct_name` under `config`.
pub fn receiver_name(struct_name: &str, config: &GenerationConfig) -> String {
    match config.receiver_name_mode {
        ReceiverNameMode::Fixed => config.fixed_receiver_name.clone(),
        ReceiverNameMode::Derived => receiver_prefix(struct_name, config.receiver_name_length),
    }
}

/// Compose the generator command for implementing `candidate` on the struct
/// found by `ctx`.
///
/// # Errors
///
/// Returns [`AssistError::MissingStructName`] when the trigger line had no
/// struct name; a command without one would only confuse the generator.
pub fn compose(
    ctx: &TriggerContext,
    candidate: &InterfaceCandidate,
    config: &GenerationConfig,
) -> Result<GenerationCommand> {
    if !ctx.has_struct_name() {
        return Err(AssistError::MissingStructName {
            line_text: ctx.line_text().to_string(),
        });
    }

    let struct_name = ctx.struct_name();
    let receiver = receiver_name(struct_name, config);
    let receiver_expr = if config.receiver_is_pointer() {
        format!("{} *{}", receiver, struct_name)
    } else {
        format!("{} {}", receiver, struct_name)
    };

    Ok(GenerationCommand {
        receiver_expr,
        struct_name: struct_name.to_string(),
        interface_qualified_name: candidate.qualified_name(),
    })
}

#[cfg(test)]
mod tests {
    use quickimpl_config::ReceiverType;

    use super::*;

    fn ctx(line: &str) -> TriggerContext {
        TriggerContext::detect(line).expect("line should trigger")
    }

    fn derived(length: usize, receiver_type: ReceiverType) -> GenerationConfig {
        GenerationConfig {
            receiver_name_mode: ReceiverNameMode::Derived,
            receiver_name_length: length,
            fixed_receiver_name: String::new(),
            receiver_type,
        }
    }

    #[test]
    fn test_derived_pointer_receiver() {
        let command = compose(
            &ctx("type Foo struct {"),
            &InterfaceCandidate::new("Reader").in_package("io"),
            &derived(3, ReceiverType::Pointer),
        )
        .unwrap();

        assert_eq!(command.receiver_expr(), "foo *Foo");
        assert_eq!(command.argument_string(), "foo *Foo io.Reader");
    }

    #[test]
    fn test_single_char_receiver() {
        let command = compose(
            &ctx("type Foo struct {"),
            &InterfaceCandidate::new("Reader").in_package("io"),
            &derived(1, ReceiverType::Pointer),
        )
        .unwrap();

        assert_eq!(command.argument_string(), "f *Foo io.Reader");
        assert_eq!(command.args(), ["f *Foo", "io.Reader"]);
        assert_eq!(command.to_string(), "\"f *Foo\" io.Reader");
    }

    #[test]
    fn test_value_receiver() {
        let command = compose(
            &ctx("type Point struct {"),
            &InterfaceCandidate::new("Stringer").in_package("fmt"),
            &derived(1, ReceiverType::Value),
        )
        .unwrap();

        assert_eq!(command.receiver_expr(), "p Point");
    }

    #[test]
    fn test_zero_length_receiver() {
        let config = derived(0, ReceiverType::Pointer);
        assert_eq!(receiver_name("Foo", &config), "");

        let command = compose(
            &ctx("type Foo struct {"),
            &InterfaceCandidate::new("Reader"),
            &config,
        )
        .unwrap();
        assert_eq!(command.receiver_expr(), " *Foo");
    }

    #[test]
    fn test_length_beyond_name_keeps_full_name() {
        let config = derived(42, ReceiverType::Pointer);
        assert_eq!(receiver_name("HTTPServer", &config), "httpserver");
    }

    #[test]
    fn test_fixed_receiver_name() {
        let config = GenerationConfig {
            receiver_name_mode: ReceiverNameMode::Fixed,
            receiver_name_length: 3,
            fixed_receiver_name: "self".to_string(),
            receiver_type: ReceiverType::Pointer,
        };
        let command = compose(
            &ctx("type Foo struct {"),
            &InterfaceCandidate::new("Handler").in_package("http"),
            &config,
        )
        .unwrap();

        assert_eq!(command.argument_string(), "self *Foo http.Handler");
    }

    #[test]
    fn test_unqualified_interface() {
        let command = compose(
            &ctx("type Foo struct {"),
            &InterfaceCandidate::new("Shape"),
            &derived(1, ReceiverType::Pointer),
        )
        .unwrap();
        assert_eq!(command.interface(), "Shape");
    }

    #[test]
    fn test_deterministic() {
        let ctx = ctx("type Foo struct {");
        let candidate = InterfaceCandidate::new("Reader").in_package("io");
        let config = derived(2, ReceiverType::Pointer);

        let first = compose(&ctx, &candidate, &config).unwrap();
        let second = compose(&ctx, &candidate, &config).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.to_string(), second.to_string());
    }

    #[test]
    fn test_missing_struct_name_fails() {
        let err = compose(
            &ctx("struct"),
            &InterfaceCandidate::new("Reader"),
            &GenerationConfig::default(),
        )
        .unwrap_err();

        assert!(matches!(err, AssistError::MissingStructName { .. }));
    }
}
