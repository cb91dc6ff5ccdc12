//! Fuzz target for query logging.
//!
//! Logging must never panic, whatever the template, bindings or settings.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_log_query
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use querytrace_core::{
    Binding, BindingKey, Bindings, DebugLogger, FixedProbe, LogMode, ParamType, QueryLogger,
};

#[derive(Debug, Arbitrary)]
struct FuzzCall {
    sql: String,
    bindings: Option<Vec<FuzzBinding>>,
    max_value_length: i64,
    force_string_binding: bool,
    interactive: bool,
    override_interactive_output: bool,
}

#[derive(Debug, Arbitrary)]
struct FuzzBinding {
    key: Option<String>,
    value: FuzzValue,
    param_type: Option<bool>,
}

#[derive(Debug, Arbitrary)]
enum FuzzValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl FuzzBinding {
    fn binding(&self) -> Binding {
        let value = match &self.value {
            FuzzValue::Null => return Binding::null(),
            FuzzValue::Bool(v) => Binding::new(*v),
            FuzzValue::Int(v) => Binding::new(*v),
            FuzzValue::Float(v) => Binding::new(*v),
            FuzzValue::Text(v) => Binding::new(v.as_str()),
        };
        match self.param_type {
            Some(true) => Binding::typed(value.value, ParamType::Integer),
            Some(false) => Binding::typed(value.value, ParamType::String),
            None => value,
        }
    }
}

fuzz_target!(|call: FuzzCall| {
    let mut logger = DebugLogger::new().with_probe(FixedProbe(call.interactive));
    logger
        .set_mode(LogMode::Collect)
        .set_max_value_length(call.max_value_length)
        .set_force_string_binding(call.force_string_binding)
        .set_override_interactive_output(call.override_interactive_output);

    let bindings = call.bindings.as_ref().map(|items| {
        let mut bindings = Bindings::new();
        for item in items {
            match &item.key {
                Some(key) => {
                    bindings.insert(BindingKey::parse(key), item.binding());
                }
                None => {
                    bindings.push(item.binding());
                }
            }
        }
        bindings
    });

    logger.log(&call.sql, bindings.as_ref());
    assert_eq!(logger.len(), 1);
});
