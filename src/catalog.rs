//! Startup-loaded emotion catalog.
//!
//! The catalog is built once at startup, validated loudly, and read-only
//! afterwards: per-request analysis never mutates or refreshes it. Keyword
//! sets are accent-folded at construction so matching is a single pass over
//! normalised text.
//!
//! Suggestions are a static table keyed by emotion name, validated to cover
//! every definition, so adding an emotion without suggestions fails at
//! startup instead of silently falling through to a generic default.

use std::collections::{HashMap, HashSet};

use crate::error::{EngineError, Result};
use crate::normalize::normalize;
use crate::types::{EmotionDefinition, RecommendationCategory};

/// Immutable emotion-definition table plus per-emotion suggestion lists.
#[derive(Debug, Clone)]
pub struct EmotionCatalog {
    definitions: Vec<EmotionDefinition>,
    /// Keyed by normalised emotion name.
    suggestions: HashMap<String, Vec<String>>,
    default_suggestions: Vec<String>,
}

impl EmotionCatalog {
    /// Build a catalog from definitions and a suggestion table.
    ///
    /// Keywords are normalised (trimmed, lowercased, accent-folded) here so
    /// the matcher never has to. Suggestion keys may be written in any
    /// casing/accenting; they are normalised too.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Catalog`] when:
    /// - `definitions` is empty
    /// - two definitions share a (normalised) name
    /// - a definition has an empty keyword set, or a keyword that is blank
    ///   after normalisation
    /// - the suggestion table does not cover every definition
    pub fn new(
        definitions: Vec<EmotionDefinition>,
        suggestions: HashMap<String, Vec<String>>,
    ) -> Result<Self> {
        if definitions.is_empty() {
            return Err(EngineError::Catalog(
                "catalog must define at least one emotion".into(),
            ));
        }

        let suggestions: HashMap<String, Vec<String>> = suggestions
            .into_iter()
            .map(|(name, list)| (normalize(&name), list))
            .collect();

        let mut seen = HashSet::new();
        let mut normalised_definitions = Vec::with_capacity(definitions.len());
        for mut definition in definitions {
            let key = normalize(&definition.name);
            if key.is_empty() {
                return Err(EngineError::Catalog("emotion with blank name".into()));
            }
            if !seen.insert(key.clone()) {
                return Err(EngineError::Catalog(format!(
                    "duplicate emotion '{}'",
                    definition.name
                )));
            }
            if definition.keywords.is_empty() {
                return Err(EngineError::Catalog(format!(
                    "emotion '{}' has an empty keyword set",
                    definition.name
                )));
            }
            let folded: Vec<String> = definition.keywords.iter().map(|kw| normalize(kw)).collect();
            definition.keywords = folded;
            if definition.keywords.iter().any(String::is_empty) {
                return Err(EngineError::Catalog(format!(
                    "emotion '{}' has a blank keyword",
                    definition.name
                )));
            }
            if !suggestions.contains_key(&key) {
                return Err(EngineError::Catalog(format!(
                    "no suggestions for emotion '{}'",
                    definition.name
                )));
            }
            normalised_definitions.push(definition);
        }

        Ok(Self {
            definitions: normalised_definitions,
            suggestions,
            default_suggestions: DEFAULT_SUGGESTIONS.iter().map(|s| (*s).to_string()).collect(),
        })
    }

    /// The built-in production catalog: eight emotions with their seeded
    /// keyword sets and suggestion lists.
    ///
    /// # Errors
    ///
    /// Only if the built-in data itself were malformed; the validation is the
    /// same loud startup check applied to custom catalogs.
    pub fn builtin() -> Result<Self> {
        Self::new(builtin_definitions(), builtin_suggestions())
    }

    /// All emotion definitions, in catalog order.
    pub fn all(&self) -> &[EmotionDefinition] {
        &self.definitions
    }

    /// Look up a definition by name, case- and accent-insensitively.
    pub fn get(&self, name: &str) -> Option<&EmotionDefinition> {
        let key = normalize(name);
        self.definitions
            .iter()
            .find(|definition| normalize(&definition.name) == key)
    }

    /// Suggested next steps for an emotion. Unknown names (including the
    /// neutral result) get the generic default list.
    pub fn suggestions_for(&self, name: &str) -> &[String] {
        self.suggestions
            .get(&normalize(name))
            .map_or(&self.default_suggestions, Vec::as_slice)
    }
}

/// Suggestions for unknown emotions and the neutral path.
const DEFAULT_SUGGESTIONS: &[&str] = &[
    "Versículos inspiradores",
    "Histórias bíblicas",
    "Versículo do dia",
];

fn builtin_definitions() -> Vec<EmotionDefinition> {
    fn emotion(
        name: &str,
        keywords: &[&str],
        description: &str,
        category: RecommendationCategory,
    ) -> EmotionDefinition {
        EmotionDefinition {
            name: name.to_string(),
            keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
            description: description.to_string(),
            category,
        }
    }

    vec![
        emotion(
            "tristeza",
            &[
                "triste",
                "tristeza",
                "deprimido",
                "melancólico",
                "abatido",
                "desanimado",
            ],
            "Sentimento de tristeza, dor emocional ou desânimo",
            RecommendationCategory::Comfort,
        ),
        emotion(
            "alegria",
            &["feliz", "alegre", "contente", "radiante", "animado", "júbilo"],
            "Sentimento de alegria, contentamento e júbilo",
            RecommendationCategory::Praise,
        ),
        emotion(
            "medo",
            &["medo", "temor", "pavor", "assustado", "receio", "apreensivo"],
            "Sentimento de medo, ansiedade ou preocupação",
            RecommendationCategory::Courage,
        ),
        emotion(
            "ansiedade",
            &[
                "ansioso",
                "preocupado",
                "nervoso",
                "tenso",
                "estressado",
                "angustiado",
            ],
            "Sentimento de ansiedade, preocupação ou estresse",
            RecommendationCategory::Peace,
        ),
        emotion(
            "solidão",
            &[
                "só",
                "sozinho",
                "solitário",
                "isolado",
                "abandonado",
                "desamparado",
            ],
            "Sentimento de solidão ou isolamento",
            RecommendationCategory::Companionship,
        ),
        emotion(
            "raiva",
            &["raiva", "ira", "irritado", "furioso", "bravo", "indignado"],
            "Sentimento de raiva ou irritação",
            RecommendationCategory::Forgiveness,
        ),
        emotion(
            "gratidão",
            &["grato", "agradecido", "reconhecido", "gratifico"],
            "Sentimento de gratidão e reconhecimento",
            RecommendationCategory::Thanksgiving,
        ),
        emotion(
            "esperança",
            &["esperança", "esperançoso", "otimista", "confiante"],
            "Sentimento de esperança e confiança no futuro",
            RecommendationCategory::Encouragement,
        ),
    ]
}

fn builtin_suggestions() -> HashMap<String, Vec<String>> {
    let table: &[(&str, &[&str])] = &[
        (
            "tristeza",
            &[
                "Versículos de consolo e esperança",
                "História de Jó (superação do sofrimento)",
                "Palavras de encorajamento",
                "Oração de conforto",
            ],
        ),
        (
            "alegria",
            &[
                "Versículos de louvor e gratidão",
                "História de Davi dançando (2 Samuel 6)",
                "Salmos de celebração",
                "Ações de graças",
            ],
        ),
        (
            "medo",
            &[
                "Versículos de coragem e proteção",
                "História de Davi e Golias",
                "Promessas de Deus sobre proteção",
                "Oração por coragem",
            ],
        ),
        (
            "ansiedade",
            &[
                "Versículos de paz e tranquilidade",
                "História de Jesus acalmando a tempestade",
                "Meditação bíblica",
                "Respiração com versículos",
            ],
        ),
        (
            "solidão",
            &[
                "Versículos sobre a presença de Deus",
                "História de Elias no deserto",
                "Promessas de companhia divina",
                "Comunidade e igreja",
            ],
        ),
        (
            "raiva",
            &[
                "Versículos sobre perdão",
                "História do Filho Pródigo",
                "Controle emocional na Bíblia",
                "Oração por paz interior",
            ],
        ),
        (
            "gratidão",
            &[
                "Versículos de ação de graças",
                "História dos 10 leprosos",
                "Salmos de louvor",
                "Como expressar gratidão",
            ],
        ),
        (
            "esperança",
            &[
                "Versículos de esperança futura",
                "História de Abraão e a promessa",
                "Promessas de Deus",
                "Plano de Deus para você",
            ],
        ),
    ];

    table
        .iter()
        .map(|(name, list)| {
            (
                (*name).to_string(),
                list.iter().map(|s| (*s).to_string()).collect(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_definition(name: &str, keywords: &[&str]) -> EmotionDefinition {
        EmotionDefinition {
            name: name.to_string(),
            keywords: keywords.iter().map(|kw| (*kw).to_string()).collect(),
            description: format!("Sentimento de {name}"),
            category: RecommendationCategory::Comfort,
        }
    }

    fn make_suggestions(names: &[&str]) -> HashMap<String, Vec<String>> {
        names
            .iter()
            .map(|name| ((*name).to_string(), vec!["Versículos".to_string()]))
            .collect()
    }

    #[test]
    fn builtin_catalog_validates() {
        let catalog = EmotionCatalog::builtin().expect("builtin catalog is valid");
        assert_eq!(catalog.all().len(), 8);
    }

    #[test]
    fn builtin_keywords_are_accent_folded() {
        let catalog = EmotionCatalog::builtin().expect("builtin");
        let tristeza = catalog.get("tristeza").expect("tristeza exists");
        assert!(tristeza.keywords.contains(&"melancolico".to_string()));
        let esperanca = catalog.get("esperança").expect("esperança exists");
        assert!(esperanca.keywords.contains(&"esperanca".to_string()));
    }

    #[test]
    fn get_is_case_and_accent_insensitive() {
        let catalog = EmotionCatalog::builtin().expect("builtin");
        assert!(catalog.get("SOLIDAO").is_some());
        assert!(catalog.get("solidão").is_some());
        assert!(catalog.get("gratidao").is_some());
        assert!(catalog.get("desconhecida").is_none());
    }

    #[test]
    fn empty_catalog_rejected() {
        let err = EmotionCatalog::new(vec![], HashMap::new()).unwrap_err();
        assert!(err.to_string().contains("at least one"));
    }

    #[test]
    fn duplicate_names_rejected() {
        let definitions = vec![
            make_definition("tristeza", &["triste"]),
            make_definition("Tristeza", &["abatido"]),
        ];
        let err =
            EmotionCatalog::new(definitions, make_suggestions(&["tristeza"])).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn empty_keyword_set_rejected() {
        let definitions = vec![make_definition("tristeza", &[])];
        let err =
            EmotionCatalog::new(definitions, make_suggestions(&["tristeza"])).unwrap_err();
        assert!(err.to_string().contains("empty keyword set"));
    }

    #[test]
    fn blank_keyword_rejected() {
        let definitions = vec![make_definition("tristeza", &["triste", "  "])];
        let err =
            EmotionCatalog::new(definitions, make_suggestions(&["tristeza"])).unwrap_err();
        assert!(err.to_string().contains("blank keyword"));
    }

    #[test]
    fn missing_suggestions_rejected() {
        let definitions = vec![
            make_definition("tristeza", &["triste"]),
            make_definition("alegria", &["feliz"]),
        ];
        let err =
            EmotionCatalog::new(definitions, make_suggestions(&["tristeza"])).unwrap_err();
        assert!(err.to_string().contains("no suggestions for emotion 'alegria'"));
    }

    #[test]
    fn keywords_normalised_at_construction() {
        let definitions = vec![make_definition("tristeza", &["  Melancólico "])];
        let catalog = EmotionCatalog::new(definitions, make_suggestions(&["tristeza"]))
            .expect("valid catalog");
        assert_eq!(catalog.all()[0].keywords, vec!["melancolico".to_string()]);
    }

    #[test]
    fn suggestions_for_known_emotion() {
        let catalog = EmotionCatalog::builtin().expect("builtin");
        let suggestions = catalog.suggestions_for("raiva");
        assert_eq!(suggestions.len(), 4);
        assert!(suggestions[0].contains("perdão"));
    }

    #[test]
    fn suggestions_for_unknown_emotion_fall_back_to_default() {
        let catalog = EmotionCatalog::builtin().expect("builtin");
        let suggestions = catalog.suggestions_for("neutral");
        assert_eq!(suggestions.len(), 3);
        assert!(suggestions[0].contains("inspiradores"));
    }

    #[test]
    fn suggestion_lookup_is_accent_insensitive() {
        let catalog = EmotionCatalog::builtin().expect("builtin");
        assert_eq!(
            catalog.suggestions_for("gratidão"),
            catalog.suggestions_for("GRATIDAO")
        );
    }
}
