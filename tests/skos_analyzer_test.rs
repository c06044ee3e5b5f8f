//! End-to-end tests for thesaurus-expanding analyzers.

mod common;

use std::io::Write;
use std::sync::Arc;

use common::texts;
use skos_analysis::analysis::token_filter::{ConcatenateFilter, LowercaseFilter};
use skos_analysis::analysis::tokenizer::{WhitespaceTokenizer, WholeTokenizer};
use skos_analysis::prelude::*;
use tempfile::NamedTempFile;

/// A slice of a weapons vocabulary with a three-level hierarchy.
fn ukat() -> Arc<dyn ThesaurusEngine> {
    let mut thesaurus = InMemoryThesaurus::new();
    thesaurus
        .add_pref_label("ukat:weapons", "weapons")
        .add_alt_label("ukat:weapons", "armaments")
        .add_alt_label("ukat:weapons", "arms")
        .add_hidden_label("ukat:weapons", "weapnos")
        .add_pref_label("ukat:military-equipment", "military equipment")
        .add_pref_label("ukat:equipment", "equipment")
        .add_pref_label("ukat:small-arms", "small arms")
        .add_pref_label("ukat:rifles", "rifles")
        .add_broader("ukat:weapons", "ukat:military-equipment")
        .add_broader("ukat:military-equipment", "ukat:equipment")
        .add_broader("ukat:small-arms", "ukat:weapons")
        .add_broader("ukat:rifles", "ukat:small-arms");
    Arc::new(thesaurus)
}

fn analyze(analyzer: &dyn Analyzer, text: &str) -> Result<Vec<Token>> {
    analyzer.analyze(text)?.collect()
}

#[test]
fn test_uri_analyzer_from_json_config() -> Result<()> {
    let config = ExpansionConfig::from_json_str(
        r#"{ "expansion_type": "uri", "expand_to": ["pref", "alt", "narrower_transitive"] }"#,
    )?;
    let analyzer = SkosAnalyzer::new(ukat(), &config)?;
    let tokens = analyze(&analyzer, "ukat:weapons ukat:unknown")?;

    assert_eq!(
        texts(&tokens),
        vec![
            "ukat:weapons",
            "weapons",
            "armaments",
            "arms",
            "small arms",
            "rifles",
            "ukat:unknown"
        ]
    );
    assert_eq!(tokens[4].relation, Some(RelationKind::NarrowerTransitive));
    assert_eq!((tokens[6].start_offset, tokens[6].end_offset), (13, 25));

    Ok(())
}

#[test]
fn test_uri_analyzer_default_relations() -> Result<()> {
    let analyzer = SkosAnalyzer::new(ukat(), &ExpansionConfig::uri(Vec::<RelationKind>::new()))?;
    let tokens = analyze(&analyzer, "ukat:small-arms")?;

    assert_eq!(
        texts(&tokens),
        vec!["ukat:small-arms", "small arms", "weapons"]
    );
    assert!(tokens.iter().all(|t| t.relation != Some(RelationKind::Hidden)));

    Ok(())
}

#[test]
fn test_label_analyzer_ignores_configured_relations() -> Result<()> {
    let mut config = ExpansionConfig::label(2);
    config.expand_to = [RelationKind::Narrower].into_iter().collect();
    let analyzer = SkosAnalyzer::new(ukat(), &config)?;
    let tokens = analyze(&analyzer, "Some Military Equipment")?;

    assert_eq!(
        texts(&tokens),
        vec![
            "ukat:military-equipment",
            "ukat:equipment",
            "ukat:equipment",
            "ukat:equipment"
        ]
    );
    let relations: Vec<RelationKind> = tokens.iter().filter_map(|t| t.relation).collect();
    assert_eq!(
        relations,
        vec![
            RelationKind::Pref,
            RelationKind::Broader,
            RelationKind::BroaderTransitive,
            RelationKind::Pref
        ]
    );
    // "military equipment" spans both words, "equipment" only the last
    assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (5, 23));
    assert_eq!((tokens[3].start_offset, tokens[3].end_offset), (14, 23));

    Ok(())
}

#[test]
fn test_label_analyzer_from_config_file() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    writeln!(
        file,
        r#"{{ "expansion_type": "label", "max_label_length": 2 }}"#
    )?;

    let config = ExpansionConfig::from_file(file.path())?;
    let analyzer = SkosAnalyzer::new(ukat(), &config)?;
    let tokens = analyze(&analyzer, "Rifles and SMALL ARMS")?;

    let uris: Vec<&str> = tokens
        .iter()
        .filter(|t| t.relation == Some(RelationKind::Pref))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(uris, vec!["ukat:rifles", "ukat:small-arms"]);

    Ok(())
}

#[test]
fn test_whole_phrase_lookup_with_concatenation() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
        .add_filter(Arc::new(LowercaseFilter::new()))
        .add_filter(Arc::new(ConcatenateFilter::new()))
        .add_filter(Arc::new(LabelExpansionFilter::with_default_length(ukat())))
        .with_name("phrase");
    let tokens = analyze(&analyzer, "Military   Equipment")?;

    assert_eq!(
        texts(&tokens),
        vec!["ukat:military-equipment", "ukat:equipment", "ukat:equipment"]
    );
    assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 20));

    Ok(())
}

#[test]
fn test_whole_input_as_single_uri() -> Result<()> {
    let analyzer = PipelineAnalyzer::new(Arc::new(WholeTokenizer::new())).add_filter(Arc::new(
        UriExpansionFilter::new(ukat(), [RelationKind::Pref]),
    ));
    let tokens = analyze(&analyzer, "ukat:rifles")?;

    assert_eq!(texts(&tokens), vec!["ukat:rifles", "rifles"]);

    Ok(())
}

#[test]
fn test_invalid_configurations_are_rejected() {
    assert!(SkosAnalyzer::new(ukat(), &ExpansionConfig::label(0)).is_err());
    assert!(ExpansionConfig::from_json_str(r#"{ "expansion_type": "concept" }"#).is_err());
    assert!(ExpansionConfig::from_file("/nonexistent/skos.json").is_err());
}
