//! Sample Europresse export shared by the corpus tests

/// Three articles: with author, without author, with asterisks in the body
pub const EXPORT: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head><meta charset="utf-8"><title>Europresse</title></head>
<body>
<article>
  <header>
    <div class="rdp__DocPublicationName"><span class="DocPublicationName">Le Monde </span></div>
    <span class="DocHeader">Économie, vendredi 3 janvier 2020 612 mots, p. 14</span>
    <div class="titreArticle"><p class="titreArticleVisu rdp__articletitle">Les "gilets jaunes", un an après</p></div>
    <div class="docAuthors">Jean Dupont</div>
  </header>
  <section>
    <div class="DocText clearfix"><div class="docOcurrContainer"><p>Un mouvement social né sur les ronds-points a marqué toute une année de la vie politique française.</p></div></div>
  </section>
</article>
<article>
  <header>
    <div class="rdp__DocPublicationName"><span class="DocPublicationName">Ouest France</span></div>
    <span class="DocHeader">mercredi 25 décembre 2019 230 mots</span>
    <div class="titreArticle"><p class="titreArticleVisu rdp__articletitle">Noël en Bretagne</p></div>
  </header>
  <section>
    <div class="DocText clearfix"><div class="docOcurrContainer"><p>Les marchés de Noël attirent les foules.</p></div></div>
  </section>
</article>
<article>
  <header>
    <div class="rdp__DocPublicationName"><span class="DocPublicationName">Libération</span></div>
    <span class="DocHeader">lundi 9 mars 2020</span>
    <div class="titreArticle"><p class="titreArticleVisu rdp__articletitle">*Urgent* Retraites</p></div>
    <div class="docAuthors">Marie *Curie*</div>
  </header>
  <section>
    <div class="DocText clearfix"><div class="docOcurrContainer"><p>Texte avec *astérisques*.</p></div></div>
  </section>
</article>
</body>
</html>
"#;

/// An export whose second article lacks a date header
pub const MISSING_HEADER: &str = r#"<html><body>
<article>
  <span class="DocPublicationName">Le Monde</span>
  <span class="DocHeader">3 janvier 2020</span>
  <p class="titreArticleVisu">Premier</p>
  <div class="docOcurrContainer">Corps.</div>
</article>
<article>
  <span class="DocPublicationName">Le Monde</span>
  <p class="titreArticleVisu">Second</p>
  <div class="docOcurrContainer">Corps.</div>
</article>
</body></html>"#;

/// An export dated with a month name outside the French calendar
pub const ENGLISH_DATE: &str = r#"<html><body>
<article>
  <span class="DocPublicationName">The Guardian</span>
  <span class="DocHeader">Friday 3 January 2020</span>
  <p class="titreArticleVisu">Headline</p>
  <div class="docOcurrContainer">Body.</div>
</article>
</body></html>"#;
