//! Template Builder: renders the system instruction for one optimization.
//!
//! Permissive: an unknown mode or domain key falls back to the catalog
//! default instead of failing. Strict checking lives in `validation`.
//!
//! Output contract: no blank lines, every line trimmed and `\n`-terminated,
//! byte-identical for identical inputs.

pub mod prompts;

use crate::catalog::{Catalog, Domain, Mode};
use crate::errors::Result;
use prompts::{BLOCK_RULE, EMPTY_LIST, OPTIMIZATION_TEMPLATE, OUTPUT_ONLY_INSTRUCTION};

/// Renders the instruction against the built-in catalog.
pub fn render_instruction(mode_key: &str, domain_key: Option<&str>) -> Result<String> {
    build_optimization_template(Catalog::builtin(), mode_key, domain_key)
}

/// Renders the full optimization instruction.
///
/// Only fails with `Configuration` when the catalog has no default entry to
/// fall back to; any key string is accepted.
pub fn build_optimization_template(
    catalog: &Catalog,
    mode_key: &str,
    domain_key: Option<&str>,
) -> Result<String> {
    let mode = resolve_mode(catalog, mode_key)?;
    let domain = resolve_domain(catalog, domain_key)?;

    let assembled = OPTIMIZATION_TEMPLATE
        .replace("{mode_instructions}", &mode_instructions(mode))
        .replace("{domain_instructions}", &domain_instructions(domain))
        .replace("{output_only_instruction}", OUTPUT_ONLY_INSTRUCTION);

    Ok(normalize_lines(&assembled))
}

/// Looks up a mode, falling back to the default for unknown keys.
pub fn resolve_mode(catalog: &Catalog, key: &str) -> Result<&'static Mode> {
    match catalog.get_mode(key) {
        Ok(mode) => Ok(mode),
        Err(_) => catalog.default_mode(),
    }
}

/// Looks up a domain, falling back to the default when absent or unknown.
pub fn resolve_domain(catalog: &Catalog, key: Option<&str>) -> Result<&'static Domain> {
    match key.map(|k| catalog.get_domain(k)) {
        Some(Ok(domain)) => Ok(domain),
        Some(Err(_)) | None => catalog.default_domain(),
    }
}

/// Mode block: every field of the record, one per line.
pub fn mode_instructions(mode: &Mode) -> String {
    format!(
        "{BLOCK_RULE}\n\
        Mode: {}\n\
        Description: {}\n\
        Usage: {}\n\
        Capabilities: {}\n\
        Strictness: {}\n\
        Require Citations: {}\n\
        Output Formats: {}\n\
        Industries: {}\n\
        Topics: {}\n\
        {BLOCK_RULE}",
        mode.key,
        mode.description,
        mode.usage,
        tag_list(mode.capabilities),
        mode.strictness,
        if mode.require_citations { "yes" } else { "no" },
        tag_list(mode.output_formats),
        tag_list(mode.industries),
        tag_list(mode.topics),
    )
}

/// Domain block: every field of the record, one per line.
pub fn domain_instructions(domain: &Domain) -> String {
    format!(
        "{BLOCK_RULE}\n\
        Domain: {}\n\
        Description: {}\n\
        Fields: {}\n\
        Applications: {}\n\
        {BLOCK_RULE}",
        domain.key,
        domain.description,
        tag_list(domain.fields),
        tag_list(domain.applications),
    )
}

/// Drops blank lines, trims the rest and terminates each with `\n`.
pub fn normalize_lines(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(String::with_capacity(text.len()), |mut out, line| {
            out.push_str(line);
            out.push('\n');
            out
        })
}

fn tag_list(tags: &[&str]) -> String {
    if tags.is_empty() {
        EMPTY_LIST.to_string()
    } else {
        tags.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Strictness;
    use crate::errors::IsoPromptError;

    fn assert_normalized(text: &str) {
        assert!(text.ends_with('\n'), "output must be newline-terminated");
        for line in text.split_terminator('\n') {
            assert!(!line.is_empty(), "blank line in output");
            assert_eq!(line, line.trim(), "untrimmed line: {line:?}");
        }
    }

    #[test]
    fn test_normalize_lines() {
        let raw = "\n   first line  \n\n\t\n  second\r\nthird";
        assert_eq!(normalize_lines(raw), "first line\nsecond\nthird\n");
        assert_eq!(normalize_lines("  \n \n"), "");
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_instruction("creative", Some("marketing")).unwrap();
        let b = render_instruction("creative", Some("marketing")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_output_is_normalized_for_every_mode() {
        let catalog = Catalog::builtin();
        for mode in catalog.mode_keys() {
            let text = build_optimization_template(catalog, mode, None).unwrap();
            assert_normalized(&text);
            assert!(text.contains(&format!("Mode: {mode}\n")));
        }
    }

    #[test]
    fn test_render_output_is_normalized_for_every_domain() {
        let catalog = Catalog::builtin();
        for domain in catalog.domain_keys() {
            let text = build_optimization_template(catalog, "simple", Some(domain)).unwrap();
            assert_normalized(&text);
            assert!(text.contains(&format!("Domain: {domain}\n")));
        }
    }

    #[test]
    fn test_mode_block_embeds_every_field() {
        let mode = Catalog::builtin().get_mode("analytical").unwrap();
        let block = mode_instructions(mode);
        assert!(block.contains("Mode: analytical"));
        assert!(block.contains("Description: Thorough analysis and detailed examination."));
        assert!(block.contains("Usage: Use for reports, audits, or in-depth reviews."));
        assert!(block.contains("Capabilities: Analysis, Breakdown, Structured Review"));
        assert!(block.contains("Strictness: high"));
        assert!(block.contains("Require Citations: yes"));
        assert!(block.contains("Output Formats: report, table, list, markdown"));
        assert!(block.contains("Industries: finance, research,"));
        assert!(block.contains("Topics: financial analysis, market research,"));
        assert!(block.starts_with(BLOCK_RULE) && block.ends_with(BLOCK_RULE));
    }

    #[test]
    fn test_domain_block_embeds_every_field() {
        let domain = Catalog::builtin().get_domain("supply_chain").unwrap();
        let block = domain_instructions(domain);
        assert!(block.contains("Domain: supply_chain"));
        assert!(block.contains("Description: Management of the flow of goods"));
        assert!(block.contains(
            "Fields: logistics, procurement, inventory_management, distribution, sourcing"
        ));
        assert!(block.contains("Applications: retail, manufacturing, transportation"));
    }

    #[test]
    fn test_empty_field_list_renders_placeholder() {
        let domain = Catalog::builtin().default_domain().unwrap();
        assert!(domain_instructions(domain).contains("Fields: none"));
    }

    #[test]
    fn test_unknown_mode_falls_back_to_default() {
        let fallback = render_instruction("not-a-real-mode", None).unwrap();
        let default = render_instruction("simple", None).unwrap();
        assert_eq!(fallback, default);
    }

    #[test]
    fn test_absent_and_unknown_domain_fall_back_to_default() {
        let absent = render_instruction("reasoning", None).unwrap();
        let unknown = render_instruction("reasoning", Some("underwater_basketry")).unwrap();
        let explicit = render_instruction("reasoning", Some("general_knowledge")).unwrap();
        assert_eq!(absent, explicit);
        assert_eq!(unknown, explicit);
    }

    #[test]
    fn test_odd_keys_never_error() {
        for key in ["", " ", "SIMPLE", "simple\n", "{mode_instructions}", "ü"] {
            assert!(render_instruction(key, Some(key)).is_ok(), "key {key:?}");
        }
    }

    #[test]
    fn test_skeleton_requirements_present() {
        let text = render_instruction("simple", None).unwrap();
        assert!(text.starts_with("You are a professional prompt engineer."));
        assert!(text.contains("1. Is clear and specific in its instructions.\n"));
        assert!(text.contains("3. Specifies the desired output format.\n"));
        assert!(text.contains("Mode Instructions:\n___\nMode: simple\n"));
        assert!(text.contains("Domain Instructions:\n___\nDomain: general_knowledge\n"));
        assert!(text.ends_with(
            "Return ONLY the optimized prompt, nothing else. \
            Do NOT include meta-commentary, explanations, or a preamble.\n"
        ));
    }

    #[test]
    fn test_output_only_instruction_closes_instruction() {
        let text = render_instruction("creative", Some("marketing")).unwrap();
        assert!(text.ends_with(&format!("{OUTPUT_ONLY_INSTRUCTION}\n")));
    }

    #[test]
    fn test_catalog_without_defaults_is_configuration_error() {
        const MODES: &[Mode] = &[Mode {
            key: "solo",
            description: "d",
            usage: "u",
            capabilities: &[],
            strictness: Strictness::Variable,
            require_citations: false,
            output_formats: &[],
            industries: &[],
            topics: &[],
        }];
        const DOMAINS: &[Domain] = &[Domain {
            key: "solo",
            description: "d",
            fields: &[],
            applications: &[],
        }];
        let catalog = Catalog::new(MODES, DOMAINS, "missing", "missing");

        // Known keys still render without touching the defaults
        assert!(build_optimization_template(&catalog, "solo", Some("solo")).is_ok());
        assert!(matches!(
            build_optimization_template(&catalog, "other", Some("solo")),
            Err(IsoPromptError::Configuration(_))
        ));
    }
}
