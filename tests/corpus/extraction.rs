//! Extraction and normalization of a full export

use europresse_corpus::{
    ConvertConfig, CorpusError, Markers, MonthNames, build_corpus, extract_articles,
};

use super::fixture::{ENGLISH_DATE, EXPORT, MISSING_HEADER};

#[test]
fn test_one_record_per_container() {
    let raws = extract_articles(EXPORT, &Markers::europresse()).unwrap();
    assert_eq!(raws.len(), 3);

    let records = build_corpus(EXPORT, &ConvertConfig::default()).unwrap();
    assert_eq!(records.len(), raws.len());
}

#[test]
fn test_records_in_document_order() {
    let records = build_corpus(EXPORT, &ConvertConfig::default()).unwrap();
    let dates: Vec<_> = records.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, vec!["2020-01-03", "2019-12-25", "2020-03-09"]);
}

#[test]
fn test_normalized_fields() {
    let records = build_corpus(EXPORT, &ConvertConfig::default()).unwrap();

    let first = &records[0];
    assert_eq!(first.journal, "Le-Monde");
    assert_eq!(first.title, "Les-gilets-jaunes,-un-an-après");
    assert_eq!(first.author.as_deref(), Some("Jean-Dupont"));
    assert!(first.content.starts_with("Un mouvement social"));

    let second = &records[1];
    assert_eq!(second.journal, "Ouest-France");
    assert_eq!(second.title, "Noël-en-Bretagne");
    assert_eq!(second.author, None);

    let third = &records[2];
    assert_eq!(third.title, "Urgent-Retraites");
    assert_eq!(third.author.as_deref(), Some("Marie-Curie"));
    assert_eq!(third.content, "Texte avec *astérisques*.");
}

#[test]
fn test_missing_header_aborts_run() {
    let err = build_corpus(MISSING_HEADER, &ConvertConfig::default()).unwrap_err();
    assert!(matches!(
        err,
        CorpusError::MissingElement {
            article: 1,
            field: "date"
        }
    ));
    assert!(err.to_string().contains("missing date"));
}

#[test]
fn test_month_table_selects_language() {
    let err = build_corpus(ENGLISH_DATE, &ConvertConfig::default()).unwrap_err();
    assert!(matches!(err, CorpusError::UnknownMonth(ref m) if m == "January"));

    let config = ConvertConfig::default().with_months(MonthNames::english());
    let records = build_corpus(ENGLISH_DATE, &config).unwrap();
    assert_eq!(records[0].date, "2020-01-03");
    assert_eq!(records[0].journal, "The-Guardian");
}

#[test]
fn test_custom_markers() {
    let html = r#"<div class="item">
  <b class="src">Le Temps</b>
  <i class="when">12 juin 2021</i>
  <h2>Titre suisse</h2>
  <section>Contenu.</section>
</div>"#;
    let markers = Markers {
        article: "div.item".to_string(),
        journal: "b.src".to_string(),
        header: "i.when".to_string(),
        title: "h2".to_string(),
        author: "span.by".to_string(),
        content: "section".to_string(),
    };
    let config = ConvertConfig::default().with_markers(markers);
    let records = build_corpus(html, &config).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, "2021-06-12");
    assert_eq!(records[0].title, "Titre-suisse");
    assert!(records[0].author.is_none());
}

#[test]
fn test_impossible_day_kept_as_written() {
    let html = r#"<article>
  <span class="DocPublicationName">Le Monde</span>
  <span class="DocHeader">samedi 31 février 2020</span>
  <p class="titreArticleVisu">Erreur de date</p>
  <div class="docOcurrContainer">Corps.</div>
</article>"#;
    let records = build_corpus(html, &ConvertConfig::default()).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].date, "2020-02-31");
}
