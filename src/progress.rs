use crate::constants::SCROLL_PROGRESS_ID;
use crate::core::navigation::scroll_progress_percent;
use crate::dom;
use crate::error::SiteError;
use web_sys as web;

/// Width of the scroll progress bar tracks how far the page has been scrolled.
pub struct ScrollProgress {
    bar: web::HtmlElement,
    document: web::Document,
}

impl ScrollProgress {
    pub fn mount(document: &web::Document) -> Result<Self, SiteError> {
        let bar = dom::by_id(document, SCROLL_PROGRESS_ID)?;
        Ok(Self {
            bar,
            document: document.clone(),
        })
    }

    pub fn update(&self) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        let body_top = self
            .document
            .body()
            .map(|b| b.scroll_top() as f64)
            .unwrap_or(0.0);
        let scroll_top = if body_top > 0.0 {
            body_top
        } else {
            root.scroll_top() as f64
        };
        let pct = scroll_progress_percent(
            scroll_top,
            root.scroll_height() as f64,
            root.client_height() as f64,
        );
        dom::set_style(&self.bar, "width", &format!("{pct}%"));
    }
}
