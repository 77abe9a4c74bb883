use super::*;

#[test]
fn restaurant_href_encodes_spaces_and_symbols() {
    assert_eq!(restaurant_href("Joe's Diner"), "/restaurant/Joe%27s%20Diner");
}

#[test]
fn restaurant_href_keeps_unreserved_characters() {
    assert_eq!(restaurant_href("cafe-du_monde.2~"), "/restaurant/cafe-du_monde.2~");
}

#[test]
fn restaurant_href_encodes_utf8_bytes() {
    assert_eq!(restaurant_href("Café"), "/restaurant/Caf%C3%A9");
}

#[test]
fn lists_results_as_links() {
    let results = vec!["Luigi's".to_owned(), "Pho 99".to_owned()];
    let html = view! { <SearchPage query="i" results=results /> }.to_html();
    assert!(html.contains("/restaurant/Luigi%27s"));
    assert!(html.contains("/restaurant/Pho%2099"));
    assert!(!html.contains("No restaurants found."));
}

#[test]
fn reports_empty_search() {
    let html = view! { <SearchPage query="zzz" /> }.to_html();
    assert!(html.contains("No restaurants found."));
}

#[test]
fn blank_query_shows_form_only() {
    let html = view! { <SearchPage /> }.to_html();
    assert!(html.contains("Search for a restaurant"));
    assert!(html.contains(r#"name="q""#));
    assert!(!html.contains("No restaurants found."));
}
