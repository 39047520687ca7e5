use super::*;

#[test]
fn page_text_skips_scripts_styles_and_comments() {
    let html = r#"<html><head><style>body { color: red }</style>
        <script>var tel = "06 00 00 00 00";</script></head>
        <body><h1>Ateliers&nbsp;Dupont</h1><!-- 07 00 00 00 00 --><p>Chaudronnerie &amp; soudure</p>
        <noscript>Activez JavaScript</noscript></body></html>"#;
    let page = PageText::parse(html);
    assert_eq!(page.text, "Ateliers Dupont Chaudronnerie & soudure");
    assert_eq!(page.title, None);
}

#[test]
fn page_text_reads_first_title() {
    let html = "<head><TITLE>\n  Dupont &amp; Fils | Plomberie\n</TITLE><title>Autre</title></head>";
    assert_eq!(
        PageText::parse(html).title.as_deref(),
        Some("Dupont & Fils | Plomberie")
    );
}

#[test]
fn page_text_missing_or_blank_title_is_none() {
    assert_eq!(PageText::parse("<html><body>rien</body></html>").title, None);
    assert_eq!(PageText::parse("<title>   </title>").title, None);
}

#[test]
fn page_text_decodes_decimal_and_hex_references() {
    let html = "<title>Soci&#233;t&#233; Dupont &#8211; Plomberie</title>\
        <p>L&#039;atelier contact&#x40;dupont.fr</p>";
    let page = PageText::parse(html);
    assert_eq!(page.title.as_deref(), Some("Société Dupont \u{2013} Plomberie"));
    assert!(page.text.ends_with("L'atelier contact@dupont.fr"));
    assert_eq!(extract_email(&page.text).as_deref(), Some("contact@dupont.fr"));
}

#[test]
fn page_text_decodes_named_references() {
    let page = PageText::parse(
        "<p>Menuiserie G&eacute;rard &ndash; t&eacute;l&nbsp;:&nbsp;01&nbsp;23&nbsp;45&nbsp;67&nbsp;89</p>",
    );
    assert_eq!(page.text, "Menuiserie Gérard \u{2013} tél : 01 23 45 67 89");
}

#[test]
fn extract_phone_national_formats() {
    assert_eq!(
        extract_phone("Appelez le 01 23 45 67 89 du lundi au vendredi").as_deref(),
        Some("01 23 45 67 89")
    );
    assert_eq!(extract_phone("Tél. 04.72.00.11.22").as_deref(), Some("04.72.00.11.22"));
    assert_eq!(extract_phone("0612345678").as_deref(), Some("0612345678"));
}

#[test]
fn extract_phone_international_format() {
    assert_eq!(
        extract_phone("Contact : +33 1 23 45 67 89").as_deref(),
        Some("+33 1 23 45 67 89")
    );
}

#[test]
fn extract_phone_prefers_national_match() {
    let text = "+33 4 78 00 00 00 ou 04 78 11 11 11";
    assert_eq!(extract_phone(text).as_deref(), Some("04 78 11 11 11"));
}

#[test]
fn extract_phone_labeled_candidate_must_look_french() {
    // The labeled pattern catches this, but it starts with neither 0 nor +33.
    assert_eq!(extract_phone("Tel: 9999 9999 99"), None);
    assert_eq!(extract_phone("Aucun numéro ici, code postal 69003"), None);
}

#[test]
fn extract_email_skips_placeholders() {
    let text = "noreply@site.fr, test@example.com, contact@ateliers-dupont.fr";
    assert_eq!(
        extract_email(text).as_deref(),
        Some("contact@ateliers-dupont.fr")
    );
}

#[test]
fn extract_email_none_when_only_placeholders() {
    assert_eq!(extract_email("antispam@site.fr NoReply@site.fr"), None);
    assert_eq!(extract_email("pas d'adresse"), None);
}

#[test]
fn name_from_title_takes_first_segment() {
    assert_eq!(
        name_from_title("Ateliers Dupont | Chaudronnerie Lyon").as_deref(),
        Some("Ateliers Dupont")
    );
    assert_eq!(
        name_from_title("Plomberie Martin - Dépannage 24h/24").as_deref(),
        Some("Plomberie Martin")
    );
}

#[test]
fn name_from_title_splits_on_typographic_dashes() {
    assert_eq!(
        name_from_title("Société Dupont \u{2013} Plomberie").as_deref(),
        Some("Société Dupont")
    );
    assert_eq!(
        name_from_title("Garage Lefèvre \u{2014} Carrosserie").as_deref(),
        Some("Garage Lefèvre")
    );
}

#[test]
fn name_from_title_length_bounds_are_exclusive() {
    assert_eq!(name_from_title("ABC | Accueil"), None);
    assert_eq!(name_from_title("ABCD").as_deref(), Some("ABCD"));
    let long = "x".repeat(50);
    assert_eq!(name_from_title(&long), None);
    let just_under = "x".repeat(49);
    assert_eq!(name_from_title(&just_under).as_deref(), Some(just_under.as_str()));
}

#[test]
fn domain_fallback_name_strips_www_and_tld() {
    assert_eq!(
        domain_fallback_name("https://www.boulangerie-dupont.fr/contact"),
        "Boulangerie-Dupont"
    );
    assert_eq!(domain_fallback_name("http://ACME.com"), "Acme");
}

#[test]
fn domain_fallback_name_defaults_when_unparseable() {
    assert_eq!(domain_fallback_name("pas une url"), FALLBACK_COMPANY_NAME);
    assert_eq!(domain_fallback_name("file:///tmp/x.html"), FALLBACK_COMPANY_NAME);
}

#[test]
fn title_case_matches_word_boundaries() {
    assert_eq!(title_case("ACME plomberie-paris"), "Acme Plomberie-Paris");
    assert_eq!(title_case("société 3d print"), "Société 3D Print");
    assert_eq!(title_case(""), "");
}
