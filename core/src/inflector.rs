//! English singularization for controller noun phrases.
//!
//! Controller names carry plural nouns (`AdminCartsController`,
//! `AdminCategoriesController`); their entity classes carry the singular.
//! The rule set below is a fixed policy, not a general-purpose English
//! inflection library: controllers whose naming does not fit are mapped by
//! the explicit override table in [`crate::naming`] instead.
//!
//! Resolution order, first hit wins:
//!
//! 1. uninflected words, returned unchanged;
//! 2. irregular words, matched on the whole word;
//! 3. suffix rules, matched case-insensitively at the end of the word.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-word irregular plurals.
const IRREGULAR: &[(&str, &str)] = &[
    ("people", "person"),
    ("men", "man"),
    ("children", "child"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("geese", "goose"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("criteria", "criterion"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("knives", "knife"),
    ("wives", "wife"),
    ("halves", "half"),
    ("cookies", "cookie"),
    ("movies", "movie"),
    ("menus", "menu"),
    ("sexes", "sex"),
    ("atlases", "atlas"),
    ("statuses", "status"),
    ("aliases", "alias"),
    ("waves", "wave"),
    ("curves", "curve"),
];

/// Words that read the same in singular and plural.
///
/// Matched on the whole word, except the `ss` and `media` endings which also
/// cover compounds (`Access`, `SocialMedia`).
const UNINFLECTED: &str = r"(?i)^(?:.*ss|.*media|data|news|series|species|sheep|fish|deer|equipment|information|rice|money|meta|feedback|software|hardware|stats|status|campus|pants|clothes|trivia)$";

/// Suffix rules, most specific first.
const RULES: &[(&str, &str)] = &[
    (r"(?i)(s)tatuses$", "${1}tatus"),
    (r"(?i)^(.*)(menu)s$", "${1}${2}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias)(es)*$", "${1}"),
    (r"(?i)(buffal|her|potat|tomat|volcan)oes$", "${1}o"),
    (r"(?i)(alumn|bacill|cact|foc|fung|nucle|radi|stimul|syllab|termin|viri?)i$", "${1}us"),
    (r"(?i)([ftw]ax)es$", "${1}"),
    (r"(?i)(analys|ax|cris|test|thes)es$", "${1}is"),
    (r"(?i)(shoe|slave)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(ous)es$", "${1}e"),
    (r"(?i)([^a])uses$", "${1}us"),
    (r"(?i)([ml])ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive|hive|drive|dive|olive)s$", "${1}"),
    (r"(?i)([^fo])ves$", "${1}fe"),
    (r"(?i)(analy|diagno|^ba|parenthe|progno|synop|the)ses$", "${1}sis"),
    (r"(?i)(tax)a$", "${1}on"),
    (r"(?i)(c)riteria$", "${1}riterion"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(p)eople$", "${1}erson"),
    (r"(?i)(m)en$", "${1}an"),
    (r"(?i)(c)hildren$", "${1}hild"),
    (r"(?i)(f)eet$", "${1}oot"),
    (r"(?i)(eau)s$", "${1}"),
    (r"(?i)^(.*us)$", "${1}"),
    (r"(?i)s$", ""),
];

#[allow(clippy::expect_used)] // Patterns are compile-time literals
static UNINFLECTED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(UNINFLECTED).expect("uninflected pattern is valid"));

#[allow(clippy::expect_used)] // Patterns are compile-time literals
static SINGULAR_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|(pattern, replacement)| {
            (
                Regex::new(pattern).expect("singular rule is valid"),
                *replacement,
            )
        })
        .collect()
});

/// Return the singular form of `word`.
///
/// Words no rule applies to are returned unchanged.
///
/// # Examples
///
/// ```
/// use backoffice_core::inflector::singularize;
///
/// assert_eq!(singularize("Carts"), "Cart");
/// assert_eq!(singularize("Categories"), "Category");
/// assert_eq!(singularize("CustomerThreads"), "CustomerThread");
/// assert_eq!(singularize("People"), "Person");
/// assert_eq!(singularize("Address"), "Address");
/// ```
#[must_use]
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    if UNINFLECTED_PATTERN.is_match(word) {
        return word.to_string();
    }

    if let Some(singular) = irregular(word) {
        return singular;
    }

    for (pattern, replacement) in SINGULAR_RULES.iter() {
        if pattern.is_match(word) {
            return pattern.replace(word, *replacement).into_owned();
        }
    }

    word.to_string()
}

/// Whole-word irregular lookup, keeping the case of the first letter.
fn irregular(word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    let (_, singular) = IRREGULAR.iter().find(|(plural, _)| *plural == lower)?;

    let mut chars = singular.chars();
    let first = chars.next()?;
    let starts_upper = word.chars().next().is_some_and(char::is_uppercase);

    let mut result = String::with_capacity(singular.len());
    if starts_upper {
        result.extend(first.to_uppercase());
    } else {
        result.push(first);
    }
    result.push_str(chars.as_str());
    Some(result)
}
