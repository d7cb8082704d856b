//! Static page views.
//!
//! DESIGN
//! ======
//! A `View` is pure data: a heading plus the shared navigation links. Rendering
//! produces a `Fragment`, which formats itself as the HTML that goes inside the
//! document body. Nothing here holds state, so rendering is deterministic and
//! repeated calls yield identical output.
//!
//! The About view renders the heading "Sth", same as the Sth view. Keep it
//! that way until someone confirms what the page is supposed to say.

use std::fmt;

use serde::Serialize;

// =============================================================================
// LINKS
// =============================================================================

/// A navigation link rendered on every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation shared by all views, in render order.
pub const NAV_LINKS: [Link; 3] = [
    Link { label: "home", href: "/" },
    Link { label: "about", href: "/about" },
    Link { label: "sth", href: "/sth" },
];

// =============================================================================
// VIEWS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    About,
    Sth,
}

impl View {
    /// Heading text shown at the top of the page.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About | Self::Sth => "Sth",
        }
    }

    #[must_use]
    pub const fn render(self) -> Fragment {
        Fragment { heading: self.heading(), links: &NAV_LINKS }
    }
}

// =============================================================================
// FRAGMENT
// =============================================================================

/// Rendered output of a view: one heading followed by the link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment {
    pub heading: &'static str,
    pub links: &'static [Link],
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<h1>{}</h1>", self.heading)?;
        for link in self.links {
            write!(f, "<a href=\"{}\">{}</a><br/>", link.href, link.label)?;
        }
        Ok(())
    }
}

// =============================================================================
// DOCUMENT SHELL
// =============================================================================

/// Wrap a rendered fragment in a full HTML document. `None` renders an empty
/// body, which is what an unmatched path looks like.
#[must_use]
pub fn document(fragment: Option<&Fragment>) -> String {
    let body = fragment.map(ToString::to_string).unwrap_or_default();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\"/>\n\
         <title>sthpages</title>\n</head>\n<body>\n<div id=\"root\">{body}</div>\n</body>\n</html>\n"
    )
}

/// Body returned for asset requests that have no file behind them.
pub const NOT_FOUND_HTML: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\"/>\n\
     <title>sthpages</title>\n</head>\n<body>\n<h1>sthpages</h1>\n<p>404</p>\n</body>\n</html>\n";

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
