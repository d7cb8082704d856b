use super::*;

const ALL_VIEWS: [View; 3] = [View::Home, View::About, View::Sth];

#[test]
fn home_heading_is_home() {
    assert_eq!(View::Home.render().heading, "Home");
}

#[test]
fn about_heading_matches_sth() {
    assert_eq!(View::About.render().heading, "Sth");
    assert_eq!(View::About.render().heading, View::Sth.render().heading);
}

#[test]
fn every_view_links_home_about_sth_in_order() {
    for view in ALL_VIEWS {
        let hrefs: Vec<&str> = view.render().links.iter().map(|l| l.href).collect();
        assert_eq!(hrefs, ["/", "/about", "/sth"], "{view:?}");
    }
}

#[test]
fn fragment_html_has_heading_then_links_with_breaks() {
    let html = View::Home.render().to_string();
    assert_eq!(
        html,
        "<h1>Home</h1><a href=\"/\">home</a><br/><a href=\"/about\">about</a><br/><a href=\"/sth\">sth</a><br/>"
    );
}

#[test]
fn render_is_idempotent() {
    for view in ALL_VIEWS {
        let first = view.render().to_string();
        let second = view.render().to_string();
        assert_eq!(first, second);
    }
}

#[test]
fn document_embeds_fragment_in_root() {
    let fragment = View::Sth.render();
    let html = document(Some(&fragment));
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<div id=\"root\"><h1>Sth</h1>"));
}

#[test]
fn document_without_fragment_has_empty_root() {
    let html = document(None);
    assert!(html.contains("<div id=\"root\"></div>"));
    assert!(!html.contains("<h1>"));
}

#[test]
fn view_serializes_snake_case() {
    assert_eq!(serde_json::to_value(View::About).unwrap(), serde_json::json!("about"));
}
