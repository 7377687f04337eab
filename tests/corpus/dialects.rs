//! Dialect output shape for records with and without an author

use europresse_corpus::{ArticleRecord, ConvertConfig, Dialect, build_corpus};

use super::fixture::EXPORT;

fn two_records() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new("2020-01-03", "Le-Monde", "Avec-auteur", "Premier texte.")
            .with_author("Jean-Dupont"),
        ArticleRecord::new("2019-12-25", "Ouest-France", "Sans-auteur", "Second texte."),
    ]
}

#[test]
fn test_lexico_blocks() {
    let out = Dialect::Lexico.render(&two_records()).unwrap();
    let blocks: Vec<_> = out.split("<date=").skip(1).collect();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("2020-01-03>\r"));
    assert!(blocks[0].contains("<author=Jean-Dupont>\r"));
    assert!(blocks[1].starts_with("2019-12-25>\r"));
    assert!(!blocks[1].contains("<author="));
}

#[test]
fn test_iramuteq_blocks() {
    let out = Dialect::Iramuteq.render(&two_records()).unwrap();
    let headers: Vec<_> = out.lines().filter(|l| l.starts_with("**** ")).collect();

    assert_eq!(
        headers,
        vec![
            "**** *date_2020-01-03 *journal_Le-Monde *author_Jean-Dupont *title_Avec-auteur",
            "**** *date_2019-12-25 *journal_Ouest-France *title_Sans-auteur",
        ]
    );
}

#[test]
fn test_txm_blocks() {
    let out = Dialect::Txm.render(&two_records()).unwrap();
    let articles: Vec<_> = out.split("<article ").skip(1).collect();

    assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<corpus>"));
    assert!(out.ends_with("</corpus>"));
    assert_eq!(articles.len(), 2);
    assert!(articles[0].contains("titre=\"Avec-auteur\" auteur=\"Jean-Dupont\">"));
    assert!(articles[1].contains("titre=\"Sans-auteur\">"));
    assert!(!articles[1].contains("auteur="));
}

#[test]
fn test_text_blocks() {
    let out = Dialect::Text.render(&two_records()).unwrap();
    let headers: Vec<_> = out.lines().filter(|l| l.starts_with("Date : ")).collect();

    assert_eq!(headers.len(), 2);
    assert!(headers[0].ends_with("Title : Avec-auteur Auteur : Jean-Dupont"));
    assert!(headers[1].ends_with("Title : Sans-auteur"));
    assert!(!headers[1].contains("Auteur"));
}

#[test]
fn test_iramuteq_strips_body_asterisks_only() {
    let records = build_corpus(EXPORT, &ConvertConfig::default()).unwrap();

    let iramuteq = Dialect::Iramuteq.render(&records).unwrap();
    assert!(iramuteq.contains("\nTexte avec astérisques.\n"));

    for dialect in [Dialect::Lexico, Dialect::Txm, Dialect::Text] {
        let out = dialect.render(&records).unwrap();
        assert!(out.contains("*astérisques*"), "{dialect} should keep asterisks");
    }
}

#[test]
fn test_txm_wraps_long_body() {
    let records = build_corpus(EXPORT, &ConvertConfig::default()).unwrap();
    let out = Dialect::Txm.render(&records).unwrap();

    assert!(out.contains(
        ">Un mouvement social né sur les ronds-points a marqué toute\n&#13;une année de la vie politique française.</article>"
    ));
}
