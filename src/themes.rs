//! Secondary biblical themes, significant words, and related stories.
//!
//! Complements the emotion scorer with coarser thematic signals: a fixed
//! theme table matched by substring (the same naive containment the rest of
//! the engine uses), a stop-word filter for extracting significant words,
//! a word-overlap affinity ranking over supplied verse candidates, and
//! per-emotion tables of related bible stories.

use crate::normalize::normalize;
use crate::types::VerseCandidate;

/// Biblical themes with their accent-folded keyword lists.
const THEMES: &[(&str, &[&str])] = &[
    (
        "amor",
        &["amor", "amar", "amado", "caridade", "afeto", "ternura", "compaixao"],
    ),
    (
        "perdão",
        &["perdao", "perdoar", "perdoado", "misericordia", "graca", "reconciliacao"],
    ),
    (
        "esperança",
        &["esperanca", "esperar", "confianca", "futuro", "promessa", "fe"],
    ),
    (
        "paz",
        &["paz", "tranquilidade", "calma", "serenidade", "descanso", "quietude"],
    ),
    (
        "coragem",
        &["coragem", "corajoso", "bravura", "forca", "valentia", "ousadia"],
    ),
    (
        "gratidão",
        &["gratidao", "grato", "agradecer", "acao de gracas", "louvor", "reconhecimento"],
    ),
    (
        "consolo",
        &["consolo", "conforto", "alivio", "encorajamento", "apoio", "sustento"],
    ),
    (
        "proteção",
        &["protecao", "proteger", "guarda", "refugio", "abrigo", "defesa"],
    ),
];

/// Portuguese stop words, accent-folded.
const STOP_WORDS: &[&str] = &[
    "estou", "estao", "esta", "sinto", "me", "muito", "hoje", "agora", "de", "da", "do", "com",
    "para", "por", "em", "um", "uma", "o", "a", "os", "as", "que", "se", "eu", "voce", "nao",
    "mas",
];

/// A bible story related to an emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BibleStory {
    /// Story title.
    pub title: &'static str,
    /// Scripture reference, e.g. `"1 Samuel 17"`.
    pub reference: &'static str,
    /// One-line theme of the story.
    pub theme: &'static str,
}

/// Detect biblical themes present in normalised text.
///
/// Themes are reported in table order; a theme matches when any of its
/// keywords occurs in the text (substring containment, matching the
/// engine's overall matching policy).
pub fn detect_themes(normalized_text: &str) -> Vec<&'static str> {
    if normalized_text.is_empty() {
        return Vec::new();
    }
    THEMES
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|kw| normalized_text.contains(kw)))
        .map(|(name, _)| *name)
        .collect()
}

/// Extract significant words from raw text: normalised, longer than three
/// characters, stop words removed, deduplicated in first-seen order.
pub fn significant_words(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut words: Vec<String> = Vec::new();
    for word in crate::matcher::tokenize(&normalized) {
        if word.len() > 3 && !STOP_WORDS.contains(&word) && !words.iter().any(|w| w == word) {
            words.push(word.to_string());
        }
    }
    words
}

/// Rank supplied candidates by how many significant words of `text` their
/// own text contains, descending; zero-overlap candidates are dropped and
/// at most `limit` are returned.
///
/// This ranks only among *supplied* candidates; fetching them is the verse
/// store's job.
pub fn rank_by_word_overlap(
    text: &str,
    candidates: Vec<VerseCandidate>,
    limit: usize,
) -> Vec<VerseCandidate> {
    let words = significant_words(text);
    if words.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(usize, VerseCandidate)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let verse_text = normalize(&candidate.text);
            let overlap = words.iter().filter(|w| verse_text.contains(w.as_str())).count();
            (overlap > 0).then_some((overlap, candidate))
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate)
        .collect()
}

/// Bible stories related to an emotion, or an empty slice for emotions
/// without a story table.
pub fn stories_for_emotion(emotion: &str) -> &'static [BibleStory] {
    match normalize(emotion).as_str() {
        "tristeza" => TRISTEZA_STORIES,
        "alegria" => ALEGRIA_STORIES,
        "medo" => MEDO_STORIES,
        "ansiedade" => ANSIEDADE_STORIES,
        "solidao" => SOLIDAO_STORIES,
        "raiva" => RAIVA_STORIES,
        _ => &[],
    }
}

const TRISTEZA_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Jó e o Sofrimento",
        reference: "Jó 1-42",
        theme: "Superação do sofrimento",
    },
    BibleStory {
        title: "Jesus no Getsêmani",
        reference: "Mateus 26:36-46",
        theme: "Tristeza e oração",
    },
    BibleStory {
        title: "Lázaro e as Irmãs",
        reference: "João 11:1-44",
        theme: "Consolo na perda",
    },
];

const ALEGRIA_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Davi Dançando",
        reference: "2 Samuel 6:14-23",
        theme: "Alegria em adorar",
    },
    BibleStory {
        title: "Filho Pródigo",
        reference: "Lucas 15:11-32",
        theme: "Alegria do retorno",
    },
    BibleStory {
        title: "Nascimento de Jesus",
        reference: "Lucas 2:8-20",
        theme: "Alegria da salvação",
    },
];

const MEDO_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Davi e Golias",
        reference: "1 Samuel 17",
        theme: "Coragem contra o medo",
    },
    BibleStory {
        title: "Daniel na Cova dos Leões",
        reference: "Daniel 6",
        theme: "Fé supera o medo",
    },
    BibleStory {
        title: "Jesus Acalma a Tempestade",
        reference: "Marcos 4:35-41",
        theme: "Proteção divina",
    },
];

const ANSIEDADE_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Jesus Acalma a Tempestade",
        reference: "Marcos 4:35-41",
        theme: "Paz na ansiedade",
    },
    BibleStory {
        title: "Marta e Maria",
        reference: "Lucas 10:38-42",
        theme: "Prioridades e paz",
    },
    BibleStory {
        title: "Não se Preocupem",
        reference: "Mateus 6:25-34",
        theme: "Confiança em Deus",
    },
];

const SOLIDAO_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Elias no Deserto",
        reference: "1 Reis 19:1-18",
        theme: "Presença de Deus na solidão",
    },
    BibleStory {
        title: "Jesus no Deserto",
        reference: "Mateus 4:1-11",
        theme: "Companhia divina",
    },
    BibleStory {
        title: "Paulo na Prisão",
        reference: "2 Timóteo 4:9-18",
        theme: "Deus nunca abandona",
    },
];

const RAIVA_STORIES: &[BibleStory] = &[
    BibleStory {
        title: "Filho Pródigo",
        reference: "Lucas 15:11-32",
        theme: "Perdão e reconciliação",
    },
    BibleStory {
        title: "Jesus e os Vendedores",
        reference: "João 2:13-22",
        theme: "Raiva justa",
    },
    BibleStory {
        title: "Pedro Negando",
        reference: "João 18:15-27",
        theme: "Perdão após traição",
    },
];
