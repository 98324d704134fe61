// tests/telegram_format.rs
use newswatch::notify::telegram::compose_message;
use newswatch::search::Article;

fn article(title: &str, link: &str) -> Article {
    Article {
        link: link.to_string(),
        title: title.to_string(),
        description: None,
        published_at: None,
    }
}

#[test]
fn digest_has_header_numbering_and_links() {
    let articles = vec![
        article("<b>Vestas</b> lands &quot;record&quot; order", "https://ex.com/1"),
        article("Turbine blade plant breaks ground", "https://ex.com/2"),
    ];
    let text = compose_message("wind", &articles, "2025-01-13 09:00");

    assert_eq!(
        text,
        "<b>wind</b> news (2025-01-13 09:00)\n\n\
         1. Vestas lands \"record\" order\nhttps://ex.com/1\n\n\
         2. Turbine blade plant breaks ground\nhttps://ex.com/2\n\n"
    );
}

#[test]
fn titles_and_keyword_are_escaped_for_html_mode() {
    let articles = vec![article(
        "profits up 5% & counting <b>now</b>",
        "https://ex.com/a?x=1&y=2",
    )];
    let text = compose_message("R&D", &articles, "2025-01-13 09:00");

    assert!(text.starts_with("<b>R&amp;D</b> news"));
    assert!(text.contains("profits up 5% &amp; counting now"));
    assert!(text.contains("https://ex.com/a?x=1&amp;y=2"));
    // the only raw tags left are our own header markup
    assert_eq!(text.matches('<').count(), 2);
}
