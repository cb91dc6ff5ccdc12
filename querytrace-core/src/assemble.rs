//! Substitution of rendered values into a canonical template.

use crate::bindings::Bindings;
use crate::render::ValueRenderer;
use crate::slots::is_slot;
use crate::value::Binding;

/// Replace every named slot in `sql` with its rendered binding.
///
/// Keys are substituted longest first so that `:slot1` can never match
/// inside `:slot10`. Keys without the slot sigil are skipped, and slots
/// without a binding stay in the output as written.
pub fn assemble(sql: &str, bindings: &Bindings, renderer: &ValueRenderer) -> String {
    let mut ordered: Vec<(&str, &Binding)> = bindings
        .iter()
        .filter_map(|(key, binding)| key.as_name().map(|name| (name, binding)))
        .filter(|(name, _)| is_slot(name))
        .collect();

    ordered.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()));

    let mut out = sql.to_string();
    for (slot, binding) in ordered {
        if out.contains(slot) {
            out = out.replace(slot, &renderer.render(binding));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::normalize_bindings;
    use crate::config::TraceConfig;
    use crate::slots::normalize_slots;
    use crate::surface::Surface;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_named_substitution() {
        let bindings = Bindings::new().bind(":id", 3).bind(":title", "Dune");
        let out = assemble(
            "SELECT * FROM book WHERE id = :id AND title = :title",
            &bindings,
            &ValueRenderer::default(),
        );
        assert_eq!(out, "SELECT * FROM book WHERE id = 3 AND title = 'Dune'");
    }

    #[test]
    fn test_every_occurrence_replaced() {
        let bindings = Bindings::new().bind(":v", "x");
        let out = assemble(":v = :v", &bindings, &ValueRenderer::default());
        assert_eq!(out, "'x' = 'x'");
    }

    #[test]
    fn test_longest_key_first() {
        let bindings = Bindings::new().bind(":slot1", "one").bind(":slot10", "ten");
        let out = assemble(":slot1 :slot10", &bindings, &ValueRenderer::default());
        assert_eq!(out, "'one' 'ten'");
    }

    #[test]
    fn test_name_prefix_collision() {
        let bindings = Bindings::new().bind(":name", "a").bind(":names", "b");
        let out = assemble(":names, :name", &bindings, &ValueRenderer::default());
        assert_eq!(out, "'b', 'a'");
    }

    #[test]
    fn test_eleven_positional_markers() {
        let template = vec!["?"; 11].join(" ");
        let normalized = normalize_slots(&template, Surface::Markup);
        let bindings = normalize_bindings(&Bindings::positional(0..11i64));

        let out = assemble(&normalized.sql, &bindings, &ValueRenderer::default());
        let values: Vec<String> = (0..11)
            .map(|i| format!("<b style=\"color:green\">{}</b>", i))
            .collect();
        assert_eq!(out, values.join(" "));
    }

    #[test]
    fn test_non_slot_keys_skipped() {
        let bindings = Bindings::new().bind("title", "x");
        let out = assemble("title = :title", &bindings, &ValueRenderer::default());
        assert_eq!(out, "title = :title");
    }

    #[test]
    fn test_positional_keys_skipped() {
        let bindings = Bindings::positional(["x"]);
        let out = assemble("0 = :slot0", &bindings, &ValueRenderer::default());
        assert_eq!(out, "0 = :slot0");
    }

    #[test]
    fn test_unmatched_slot_left_in_place() {
        let bindings = Bindings::new().bind(":a", 1);
        let out = assemble(":a + :b", &bindings, &ValueRenderer::default());
        assert_eq!(out, "1 + :b");
    }

    #[test]
    fn test_uses_renderer_settings() {
        let renderer = ValueRenderer::new(&TraceConfig::new().with_force_string_binding(true));
        let bindings = Bindings::new().bind(":n", 5);
        assert_eq!(assemble("n = :n", &bindings, &renderer), "n = '5'");
    }
}
