//! CLI command implementations.

pub mod config;
pub mod render;
pub mod replay;

use std::io::Write;

use querytrace_core::{
    Binding, BindingKey, Bindings, DebugLogger, FixedProbe, LogMode, ParamType, TraceConfig,
    is_schema_change,
};

use crate::cli::{SurfaceChoice, TraceOptions};
use crate::error::{CliError, CliResult};

/// Resolve settings: defaults, then the config file, then the environment,
/// then command-line flags.
pub fn resolve_config(options: &TraceOptions) -> CliResult<TraceConfig> {
    let config = match &options.config {
        Some(path) => TraceConfig::from_file(path)?,
        None => TraceConfig::default(),
    };
    let mut config = config.with_env_overrides()?;

    if let Some(len) = options.max_length {
        config.set_max_value_length(len);
    }
    if options.strings {
        config.force_string_binding = true;
    }
    match options.surface_choice() {
        SurfaceChoice::Markup => config.override_interactive_output = true,
        SurfaceChoice::Console => config.override_interactive_output = false,
        SurfaceChoice::Auto => {}
    }
    Ok(config)
}

/// Build a collecting logger; commands print its traces themselves so every
/// trace ends up on its own line.
pub fn build_logger(options: &TraceOptions) -> CliResult<(DebugLogger, bool)> {
    let config = resolve_config(options)?;
    let muted = config.muted;

    let mut logger = DebugLogger::with_config(config);
    if options.surface_choice() == SurfaceChoice::Console {
        logger = logger.with_probe(FixedProbe::interactive());
    }
    logger.set_mode(LogMode::Collect);

    Ok((logger, muted))
}

/// Print the most recent trace, decorated for the logger's surface.
pub fn print_last(logger: &DebugLogger, out: &mut impl Write) -> CliResult<()> {
    if let Some(line) = logger.logs().last() {
        let decorated = logger.surface().line(line, is_schema_change(line));
        writeln!(out, "{}", decorated.trim_end_matches('\n'))?;
    }
    Ok(())
}

/// Parse a binding argument into an optional key and its binding.
///
/// Accepted forms are `value`, `:name=value` and `N=value`. A trailing
/// `::int` or `::str` sets the type; a bare `null` binds the NULL sentinel.
pub fn parse_binding(arg: &str) -> CliResult<(Option<BindingKey>, Binding)> {
    let (key, rest) = match arg.split_once('=') {
        Some((key, value)) if is_key(key) => (Some(BindingKey::parse(key)), value),
        Some((":", _)) => return Err(CliError::binding(arg, "placeholder name is empty")),
        _ => (None, arg),
    };

    let (text, param_type) = match rest.rsplit_once("::") {
        Some((text, tag)) => match ParamType::from_tag(tag) {
            Some(param_type) => (text, Some(param_type)),
            None => (rest, None),
        },
        None => (rest, None),
    };

    let binding = match (text, param_type) {
        ("null", _) => Binding::null(),
        (text, Some(param_type)) => Binding::typed(text, param_type),
        (text, None) => Binding::new(text),
    };
    Ok((key, binding))
}

/// Parse every binding argument, in order.
pub fn parse_bindings<S: AsRef<str>>(args: &[S]) -> CliResult<Bindings> {
    let mut bindings = Bindings::with_capacity(args.len());
    for arg in args {
        match parse_binding(arg.as_ref())? {
            (Some(key), binding) => {
                bindings.insert(key, binding);
            }
            (None, binding) => {
                bindings.push(binding);
            }
        }
    }
    Ok(bindings)
}

fn is_key(key: &str) -> bool {
    match key.strip_prefix(':') {
        Some(name) => !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_'),
        None => !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use querytrace_core::{BoundValue, Surface};

    #[test]
    fn test_parse_positional() {
        let (key, binding) = parse_binding("Dune").unwrap();
        assert_eq!(key, None);
        assert_eq!(binding, Binding::new("Dune"));
    }

    #[test]
    fn test_parse_named_and_numeric_keys() {
        let (key, binding) = parse_binding(":title=Dune").unwrap();
        assert_eq!(key, Some(BindingKey::Name(":title".into())));
        assert_eq!(binding, Binding::new("Dune"));

        let (key, _) = parse_binding("2=x").unwrap();
        assert_eq!(key, Some(BindingKey::Position(2)));
    }

    #[test]
    fn test_parse_type_suffix() {
        let (_, binding) = parse_binding(":id=42::str").unwrap();
        assert_eq!(binding, Binding::typed("42", ParamType::String));

        let (_, binding) = parse_binding("7::INT").unwrap();
        assert_eq!(binding, Binding::typed("7", ParamType::Integer));
    }

    #[test]
    fn test_parse_keeps_unrecognized_suffix_and_equals() {
        let (key, binding) = parse_binding("std::io").unwrap();
        assert_eq!(key, None);
        assert_eq!(binding, Binding::new("std::io"));

        let (key, binding) = parse_binding("a=b").unwrap();
        assert_eq!(key, None);
        assert_eq!(binding, Binding::new("a=b"));
    }

    #[test]
    fn test_parse_null() {
        let (_, binding) = parse_binding(":deleted_at=null").unwrap();
        assert_eq!(binding.value, BoundValue::Null);

        let (_, binding) = parse_binding("NULL").unwrap();
        assert_eq!(binding.value, BoundValue::String("NULL".into()));
    }

    #[test]
    fn test_parse_empty_name_is_error() {
        let err = parse_binding(":=5").unwrap_err();
        assert!(matches!(err, CliError::Binding { .. }));
    }

    #[test]
    fn test_parse_bindings_mixed() {
        let bindings = parse_bindings(&["1", ":name=x", "2"]).unwrap();
        let keys: Vec<_> = bindings.keys().map(ToString::to_string).collect();
        assert_eq!(keys, ["0", ":name", "1"]);
    }

    #[test]
    fn test_resolve_config_flags_win() {
        let options = TraceOptions {
            max_length: Some(-2),
            strings: true,
            markup: true,
            ..TraceOptions::default()
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.max_value_length, 0);
        assert!(config.force_string_binding);
        assert!(config.override_interactive_output);
    }

    #[test]
    fn test_console_flag_beats_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("querytrace.toml");
        std::fs::write(&path, "override_interactive_output = true\n").unwrap();

        let options = TraceOptions {
            config: Some(path),
            surface: SurfaceChoice::Console,
            ..TraceOptions::default()
        };
        let config = resolve_config(&options).unwrap();
        assert!(!config.override_interactive_output);

        let (logger, _) = build_logger(&options).unwrap();
        assert_eq!(logger.surface(), Surface::Console);
    }
}
