use rstest::rstest;
use stylometer_core::model::Distribution;
use stylometer_core::text::{count_ngrams, normalize, tokenize};

#[test]
fn normalize_lowercases() {
    assert_eq!(normalize("Hello World", true), "hello world");
}

#[rstest]
#[case("un, deux.", "un deux")]
#[case("«citation»", "citation")]
#[case("l'auteur", "l auteur")]
#[case("fin!?", "fin")]
#[case("a-b;c:d", "a b c d")]
#[case("(un) [deux]", "un deux")]
#[case("ligne\nsuivante", "ligne suivante")]
fn normalize_strips_separators(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input, false), expected);
}

#[test]
fn normalize_keeps_punctuation_on_request() {
    assert_eq!(normalize("Eh bien!", true), "eh bien!");
}

#[test]
fn normalize_is_idempotent() {
    let raw = "Les  Misérables, tome I.\nFantine -- Victor Hugo";
    let once = normalize(raw, false);
    assert_eq!(normalize(&once, false), once);
}

#[test]
fn tokenize_empty_input() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \n\t ").is_empty());
}

#[test]
fn unigrams_drop_short_tokens() {
    let tokens = tokenize("les miserables misere les de la");
    let (counts, total) = count_ngrams(&tokens, 1);

    assert_eq!(counts.get("les"), Some(&2));
    assert_eq!(counts.get("miserables"), Some(&1));
    assert_eq!(counts.get("misere"), Some(&1));
    assert_eq!(counts.get("de"), None);
    assert_eq!(counts.get("la"), None);
    assert_eq!(total, 4);
}

#[test]
fn bigrams_keep_short_tokens() {
    let tokens = tokenize("le chat dort");
    let (counts, total) = count_ngrams(&tokens, 2);

    assert_eq!(counts.get("le chat"), Some(&1));
    assert_eq!(counts.get("chat dort"), Some(&1));
    assert_eq!(total, 2);
}

#[test]
fn no_tokens_no_ngrams() {
    let (counts, total) = count_ngrams(&[], 2);
    assert!(counts.is_empty());
    assert_eq!(total, 0);
}

#[test]
fn normalized_counts_form_a_probability_distribution() {
    let tokens = tokenize(&normalize("Les Miserables misere les", false));
    let (counts, total) = count_ngrams(&tokens, 1);
    let dist = Distribution::from_counts(&counts, total);

    assert_eq!(dist.probability("les"), Some(0.5));
    assert_eq!(dist.probability("miserables"), Some(0.25));
    assert_eq!(dist.probability("misere"), Some(0.25));

    let sum: f64 = dist.iter().map(|(_, p)| p).sum();
    assert!((sum - 1.0).abs() < 1e-9);
}
