//! Content Resolver
//!
//! Derives a definition and an example sentence for a word from fetched
//! dictionary entries, with a template fallback chain for the sentence:
//! fetched example, then a part-of-speech template, then a generic one.

use super::{DictionaryClient, LexicalEntry, PartOfSpeech};

const NOUN_TEMPLATE: &str = "The {word} was the first thing everyone noticed.";
const VERB_TEMPLATE: &str = "Nobody expected them to {word} so quickly.";
const ADJECTIVE_TEMPLATE: &str = "It was a very {word} day in the village.";
const ADVERB_TEMPLATE: &str = "She finished the whole task {word}, just as planned.";
const DEFAULT_TEMPLATE: &str = "Your word to spell is {word}.";

/// First definition text: first entry, first meaning, first definition.
/// Deliberately not an exhaustive search; the primary sense wins.
pub fn definition_from(entries: &[LexicalEntry]) -> Option<&str> {
    entries
        .first()?
        .meanings
        .first()?
        .definitions
        .first()
        .map(|d| d.text.as_str())
}

/// First example sentence anywhere in the first entry, scanning meanings in
/// order and each meaning's definitions in order. Broader than the
/// definition lookup on purpose: any sense's example will do.
pub fn example_from(entries: &[LexicalEntry]) -> Option<&str> {
    entries
        .first()?
        .meanings
        .iter()
        .flat_map(|m| &m.definitions)
        .find_map(|d| d.example.as_deref())
}

fn template_for(pos: Option<PartOfSpeech>) -> &'static str {
    match pos {
        Some(PartOfSpeech::Noun) => NOUN_TEMPLATE,
        Some(PartOfSpeech::Verb) => VERB_TEMPLATE,
        Some(PartOfSpeech::Adjective) => ADJECTIVE_TEMPLATE,
        Some(PartOfSpeech::Adverb) => ADVERB_TEMPLATE,
        Some(PartOfSpeech::Unknown) | None => DEFAULT_TEMPLATE,
    }
}

/// Produce a sentence for the word, always. Prefers a fetched example; falls
/// back to the first meaning's part-of-speech template, then the generic one
/// when the lookup yielded nothing usable.
pub fn synthesize_sentence(word: &str, entries: Option<&[LexicalEntry]>) -> String {
    let template = match entries {
        Some(entries) => {
            if let Some(example) = example_from(entries) {
                return example.to_string();
            }
            let pos = entries
                .first()
                .and_then(|e| e.meanings.first())
                .and_then(|m| m.part_of_speech);
            template_for(pos)
        }
        None => DEFAULT_TEMPLATE,
    };
    template.replace("{word}", word)
}

/// Resolves definitions and sentences for words, owning the dictionary
/// client (and with it the lookup cache).
pub struct ContentResolver {
    dict: DictionaryClient,
}

impl ContentResolver {
    pub fn new(dict: DictionaryClient) -> Self {
        Self { dict }
    }

    pub fn dictionary(&self) -> &DictionaryClient {
        &self.dict
    }

    /// The word's primary definition, or `None` when the lookup fails or
    /// the entry has no definitions.
    pub async fn definition(&self, word: &str) -> Option<String> {
        let entries = self.dict.fetch(word).await?;
        definition_from(&entries).map(str::to_string)
    }

    /// A real example sentence for the word, or `None`. Used by word
    /// validation, which wants fetched content rather than a template.
    pub async fn fetched_example(&self, word: &str) -> Option<String> {
        let entries = self.dict.fetch(word).await?;
        example_from(&entries).map(str::to_string)
    }

    /// A sentence containing the word. Never absent: synthesized from a
    /// template when the API has no example.
    pub async fn sentence(&self, word: &str) -> String {
        let entries = self.dict.fetch(word).await;
        synthesize_sentence(word, entries.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Definition, Meaning};

    fn meaning(pos: Option<PartOfSpeech>, defs: &[(&str, Option<&str>)]) -> Meaning {
        Meaning {
            part_of_speech: pos,
            definitions: defs
                .iter()
                .map(|(text, example)| Definition {
                    text: text.to_string(),
                    example: example.map(str::to_string),
                })
                .collect(),
        }
    }

    fn entry(word: &str, meanings: Vec<Meaning>) -> LexicalEntry {
        LexicalEntry {
            word: word.to_string(),
            meanings,
        }
    }

    #[test]
    fn test_definition_takes_first_meaning_only() {
        let entries = vec![entry(
            "lead",
            vec![
                meaning(Some(PartOfSpeech::Noun), &[("A heavy metal.", None)]),
                meaning(Some(PartOfSpeech::Verb), &[("To guide.", None)]),
            ],
        )];
        assert_eq!(definition_from(&entries), Some("A heavy metal."));
    }

    #[test]
    fn test_definition_absent_when_no_meanings() {
        let entries = vec![entry("lead", vec![])];
        assert_eq!(definition_from(&entries), None);
        assert_eq!(definition_from(&[]), None);
    }

    #[test]
    fn test_definition_absent_when_no_definitions() {
        let entries = vec![entry("lead", vec![meaning(Some(PartOfSpeech::Noun), &[])])];
        assert_eq!(definition_from(&entries), None);
    }

    #[test]
    fn test_example_searches_all_meanings() {
        // No example in the first meaning; one deep in the second. The
        // definition lookup would stop at the first meaning, the example
        // search must not.
        let entries = vec![entry(
            "lead",
            vec![
                meaning(Some(PartOfSpeech::Noun), &[("A heavy metal.", None)]),
                meaning(
                    Some(PartOfSpeech::Verb),
                    &[
                        ("To guide.", None),
                        ("To be ahead.", Some("She leads the race.")),
                    ],
                ),
            ],
        )];
        assert_eq!(example_from(&entries), Some("She leads the race."));
    }

    #[test]
    fn test_sentence_prefers_fetched_example() {
        let entries = vec![entry(
            "ripple",
            vec![meaning(
                Some(PartOfSpeech::Noun),
                &[("A small wave.", Some("The stone made a ripple."))],
            )],
        )];
        assert_eq!(
            synthesize_sentence("ripple", Some(&entries)),
            "The stone made a ripple."
        );
    }

    #[test]
    fn test_sentence_verb_template_when_no_example() {
        let entries = vec![entry(
            "sprint",
            vec![meaning(Some(PartOfSpeech::Verb), &[("To run fast.", None)])],
        )];
        assert_eq!(
            synthesize_sentence("sprint", Some(&entries)),
            "Nobody expected them to sprint so quickly."
        );
    }

    #[test]
    fn test_sentence_noun_and_adjective_and_adverb_templates() {
        let noun = vec![entry(
            "anchor",
            vec![meaning(Some(PartOfSpeech::Noun), &[("A weight.", None)])],
        )];
        assert_eq!(
            synthesize_sentence("anchor", Some(&noun)),
            "The anchor was the first thing everyone noticed."
        );

        let adjective = vec![entry(
            "quiet",
            vec![meaning(Some(PartOfSpeech::Adjective), &[("Silent.", None)])],
        )];
        assert_eq!(
            synthesize_sentence("quiet", Some(&adjective)),
            "It was a very quiet day in the village."
        );

        let adverb = vec![entry(
            "quietly",
            vec![meaning(Some(PartOfSpeech::Adverb), &[("Silently.", None)])],
        )];
        assert_eq!(
            synthesize_sentence("quietly", Some(&adverb)),
            "She finished the whole task quietly, just as planned."
        );
    }

    #[test]
    fn test_sentence_template_uses_first_meanings_part_of_speech() {
        let entries = vec![entry(
            "lead",
            vec![
                meaning(Some(PartOfSpeech::Noun), &[("A heavy metal.", None)]),
                meaning(Some(PartOfSpeech::Verb), &[("To guide.", None)]),
            ],
        )];
        assert_eq!(
            synthesize_sentence("lead", Some(&entries)),
            "The lead was the first thing everyone noticed."
        );
    }

    #[test]
    fn test_sentence_default_template_on_fetch_failure() {
        assert_eq!(
            synthesize_sentence("gizmo", None),
            "Your word to spell is gizmo."
        );
    }

    #[test]
    fn test_sentence_default_template_on_unknown_part_of_speech() {
        let unknown = vec![entry(
            "ahem",
            vec![meaning(Some(PartOfSpeech::Unknown), &[("A cough.", None)])],
        )];
        assert_eq!(
            synthesize_sentence("ahem", Some(&unknown)),
            "Your word to spell is ahem."
        );

        let untagged = vec![entry("ahem", vec![meaning(None, &[("A cough.", None)])])];
        assert_eq!(
            synthesize_sentence("ahem", Some(&untagged)),
            "Your word to spell is ahem."
        );
    }

    #[tokio::test]
    async fn test_resolver_falls_back_when_api_unreachable() {
        let mut config = crate::config::Config::default();
        config.api_base_url = "http://127.0.0.1:9".to_string();
        config.request_timeout_secs = 1;
        let resolver = ContentResolver::new(DictionaryClient::new(&config));

        assert_eq!(resolver.definition("gizmo").await, None);
        assert_eq!(resolver.sentence("gizmo").await, "Your word to spell is gizmo.");
    }
}
